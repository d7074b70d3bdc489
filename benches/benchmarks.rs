criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        decoding_trick_frame,
        encoding_deal_frame,
        computing_legal_follow,
        resolving_full_trick,
        dealing_seeded_deck,
}

fn decoding_trick_frame(c: &mut criterion::Criterion) {
    let bytes = trick_frame().encode().unwrap();
    c.bench_function("decode a trick summary frame", |b| {
        b.iter(|| {
            let frame = Frame::decode(&bytes).unwrap();
            Message::try_from(&frame).unwrap()
        })
    });
}

fn encoding_deal_frame(c: &mut criterion::Criterion) {
    let hand = Deck::new().deal()[1];
    c.bench_function("encode a deal frame", |b| {
        b.iter(|| {
            let message = Message::Deal(hand);
            Frame::new(message.kind(), 0, Target::Seat(1), 7, message.payload()).encode()
        })
    });
}

fn computing_legal_follow(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let hand = Deck::shuffled(rng).deal()[2];
    let mut trick = Trick::new();
    trick.push(0, Card::try_from("9s").unwrap());
    trick.push(1, Card::try_from("Ks").unwrap());
    c.bench_function("compute legal plays while following", |b| {
        b.iter(|| legal_plays(&hand, &trick, false, false))
    });
}

fn resolving_full_trick(c: &mut criterion::Criterion) {
    let plays = ["5c", "Qc", "2h", "Kc"].map(|s| Card::try_from(s).unwrap());
    let plays = [(0, plays[0]), (1, plays[1]), (2, plays[2]), (3, plays[3])];
    c.bench_function("resolve a four-card trick", |b| b.iter(|| outcome(&plays)));
}

fn dealing_seeded_deck(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(1);
    c.bench_function("shuffle and deal four hands", |b| {
        b.iter(|| Deck::shuffled(rng).deal())
    });
}

fn trick_frame() -> Frame {
    let message = Message::Trick(TrickSummary {
        winner: 3,
        plays: [
            (0, Card::try_from("5c").unwrap()),
            (1, Card::try_from("Qc").unwrap()),
            (2, Card::try_from("2h").unwrap()),
            (3, Card::try_from("Kc").unwrap()),
        ],
        points: 1,
    });
    Frame::new(message.kind(), 0, Target::Broadcast, 42, message.payload())
}

use heartring::cards::*;
use heartring::protocol::*;
use heartring::rules::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
