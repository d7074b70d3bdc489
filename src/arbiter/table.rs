use crate::DECISION_TIMEOUT;
use crate::N;
use crate::PASS_SIZE;
use crate::Points;
use crate::Position;
use crate::TRICKS;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::coordinator::Outgoing;
use crate::coordinator::decision;
use crate::players::Strategy;
use crate::protocol::GameResult;
use crate::protocol::HandSummary;
use crate::protocol::Message;
use crate::protocol::Stage;
use crate::protocol::Target;
use crate::protocol::TrickSummary;
use crate::rules::Direction;
use crate::rules::Trick;
use crate::rules::hand_scores;
use crate::rules::is_game_over;
use crate::rules::shooter;
use crate::rules::winner;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;

/// The arbiter's authoritative view of the table.
///
/// Runs beside the arbiter seat's own [`Coordinator`] and observes the
/// same messages, after the coordinator has. The arbiter is also the
/// dealer, so a dealer moon shot is settled by the arbiter seat's
/// strategy.
///
/// Passing starts and ends at the arbiter: tricks open only once every
/// seat has passed and the passing token has come back round, so no
/// passing grant is still in flight when the leader is granted.
///
/// [`Coordinator`]: crate::coordinator::Coordinator
pub struct Arbiter {
    seat: Position,
    decision: Duration,
    rng: SmallRng,
    deck: Option<Deck>,
    hand_number: usize,
    direction: Direction,
    hands: [Hand; N],
    passed: [bool; N],
    open: bool,
    trick: Trick,
    taken: [Points; N],
    tricks: usize,
    totals: [Points; N],
    grant: Option<Position>,
    live: bool,
}

impl Arbiter {
    pub fn new(seat: Position, seed: Option<u64>) -> Self {
        Self::with_timeout(seat, seed, DECISION_TIMEOUT)
    }
    pub fn with_timeout(seat: Position, seed: Option<u64>, decision: Duration) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            seat,
            decision,
            rng,
            deck: None,
            hand_number: 0,
            direction: Direction::for_hand(0),
            hands: [Hand::empty(); N],
            passed: [false; N],
            open: false,
            trick: Trick::new(),
            taken: [0; N],
            tricks: 0,
            totals: [0; N],
            grant: None,
            live: false,
        }
    }
    /// Deals every hand from `deck` instead of shuffling.
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }
    pub fn hands(&self) -> &[Hand; N] {
        &self.hands
    }
    pub fn totals(&self) -> [Points; N] {
        self.totals
    }
    pub fn hand_number(&self) -> usize {
        self.hand_number
    }
    pub fn is_live(&self) -> bool {
        self.live
    }
}

impl Arbiter {
    /// Shuffles, deals and opens the next hand.
    pub fn start(&mut self) -> Outgoing {
        self.live = true;
        self.hands = match self.deck {
            Some(ref deck) => deck.deal(),
            None => Deck::shuffled(&mut self.rng).deal(),
        };
        self.passed = [false; N];
        self.open = false;
        self.trick.clear();
        self.taken = [0; N];
        self.tricks = 0;
        log::info!(
            "[arbiter] hand #{} passing {}",
            self.hand_number + 1,
            self.direction
        );
        let mut outgoing = vec![(Message::Start, Target::Broadcast)];
        for (seat, hand) in self.hands.iter().enumerate() {
            outgoing.push((Message::Deal(*hand), Target::Seat(seat as Position)));
        }
        match self.direction {
            Direction::None => outgoing.extend(self.open_tricks()),
            direction => {
                outgoing.push((Message::Phase(Stage::Passing(direction)), Target::Broadcast));
                outgoing.push(self.grant(self.seat));
            }
        }
        outgoing
    }

    /// Updates the authoritative view with one message and returns any
    /// summaries, phase changes or token grants that follow from it.
    pub async fn observe(
        &mut self,
        origin: Position,
        dest: Target,
        message: &Message,
        strategy: &mut dyn Strategy,
    ) -> Outgoing {
        if !self.live {
            return vec![];
        }
        match (message, dest) {
            (Message::Pass(cards), Target::Seat(to)) => self.on_pass(origin, to, cards),
            (Message::Play(card), _) => self.on_play(origin, *card, strategy).await,
            (Message::Token(holder), _) if *holder == self.seat => self.on_return(),
            _ => vec![],
        }
    }

    /// Re-grants the token to whichever seat the table is waiting on.
    pub fn on_stall(&mut self) -> Outgoing {
        if !self.live {
            return vec![];
        }
        let seat = match (self.open, self.passed.iter().all(|p| *p)) {
            (false, false) => self.waiting_to_pass(),
            (false, true) => {
                log::warn!("[arbiter] passing token lost, opening tricks");
                return self.open_tricks();
            }
            (true, _) => match self.trick.plays().last() {
                Some((last, _)) => Some(next(*last)),
                None => self.grant,
            },
        };
        match seat {
            Some(seat) => {
                log::warn!("[arbiter] ring stalled, re-granting token to P{}", seat);
                vec![self.grant(seat)]
            }
            None => vec![],
        }
    }

    fn on_pass(&mut self, origin: Position, to: Position, cards: &[Card; PASS_SIZE]) -> Outgoing {
        if self.passed[origin as usize] {
            log::warn!("[arbiter] second pass from P{}, ignored", origin);
            return vec![];
        }
        for card in cards {
            self.hands[origin as usize].remove(*card);
            self.hands[to as usize].add(*card);
        }
        self.passed[origin as usize] = true;
        log::debug!("[arbiter] P{} passed to P{}", origin, to);
        vec![]
    }

    /// The passing token is back at the arbiter seat.
    fn on_return(&mut self) -> Outgoing {
        match !self.open && self.passed.iter().all(|p| *p) {
            true => self.open_tricks(),
            false => vec![],
        }
    }

    fn open_tricks(&mut self) -> Outgoing {
        self.open = true;
        vec![
            (Message::Phase(Stage::Tricks), Target::Broadcast),
            self.grant(self.leader()),
        ]
    }

    async fn on_play(
        &mut self,
        origin: Position,
        card: Card,
        strategy: &mut dyn Strategy,
    ) -> Outgoing {
        if !self.trick.push(origin, card) {
            log::warn!("[arbiter] play {} by P{} does not fit trick", card, origin);
            return vec![];
        }
        self.hands[origin as usize].remove(card);
        let Some(plays) = self.trick.complete() else {
            return vec![];
        };
        let outcome = crate::rules::outcome(&plays);
        self.taken[outcome.winner as usize] += outcome.points;
        self.tricks += 1;
        self.trick.clear();
        log::info!(
            "[arbiter] trick {} to P{} ({} pts)",
            self.tricks,
            outcome.winner,
            outcome.points
        );
        let summary = TrickSummary {
            winner: outcome.winner,
            plays,
            points: outcome.points,
        };
        let mut outgoing = vec![(Message::Trick(summary), Target::Broadcast)];
        match self.tricks == TRICKS {
            true => outgoing.extend(self.resolve(strategy).await),
            false => outgoing.push(self.grant(outcome.winner)),
        }
        outgoing
    }

    async fn resolve(&mut self, strategy: &mut dyn Strategy) -> Outgoing {
        let choice = match shooter(&self.taken) == Some(self.seat) {
            true => Some(decision::moon(strategy, self.decision).await),
            false => None,
        };
        let scoring = hand_scores(&self.taken, &self.totals, self.seat, choice);
        self.totals = scoring.totals;
        log::info!(
            "[arbiter] hand #{} scores {:?} totals {:?}",
            self.hand_number + 1,
            scoring.scores,
            scoring.totals
        );
        let summary = HandSummary {
            scores: scoring.scores,
            totals: scoring.totals,
            moon: scoring.moon,
        };
        let mut outgoing = vec![(Message::Summary(summary), Target::Broadcast)];
        if is_game_over(&self.totals) {
            let result = GameResult {
                winner: winner(&self.totals),
                totals: self.totals,
            };
            log::info!("[arbiter] game over, P{} wins", result.winner);
            self.live = false;
            self.grant = None;
            outgoing.push((Message::GameOver(result), Target::Broadcast));
        } else {
            self.hand_number += 1;
            self.direction = self.direction.rotate();
            outgoing.extend(self.start());
        }
        outgoing
    }

    fn grant(&mut self, seat: Position) -> (Message, Target) {
        self.grant = Some(seat);
        (Message::Token(seat), Target::Broadcast)
    }

    /// Holder of the two of clubs.
    fn leader(&self) -> Position {
        self.hands
            .iter()
            .position(|h| h.contains(&Card::TWO_OF_CLUBS))
            .map(|s| s as Position)
            .unwrap_or(self.seat)
    }

    fn waiting_to_pass(&self) -> Option<Position> {
        (0..N)
            .map(|i| ((self.seat as usize + i) % N) as Position)
            .find(|s| !self.passed[*s as usize])
    }
}

fn next(seat: Position) -> Position {
    ((seat as usize + 1) % N) as Position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Heuristic;

    fn tokens(outgoing: &Outgoing) -> Vec<Position> {
        outgoing
            .iter()
            .filter_map(|(m, _)| match m {
                Message::Token(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn start_deals_everyone() {
        let mut arbiter = Arbiter::new(0, Some(1));
        let out = arbiter.start();
        assert_eq!(out[0], (Message::Start, Target::Broadcast));
        for seat in 0..N {
            assert!(matches!(out[1 + seat], (Message::Deal(h), Target::Seat(s)) if h.size() == 13 && s as usize == seat));
        }
        assert_eq!(
            out[5],
            (Message::Phase(Stage::Passing(Direction::Left)), Target::Broadcast)
        );
        assert_eq!(tokens(&out), vec![0]);
    }

    #[test]
    fn seeded_deals_repeat() {
        let mut a = Arbiter::new(0, Some(99));
        let mut b = Arbiter::new(0, Some(99));
        assert_eq!(a.start(), b.start());
    }

    async fn pass_all(arbiter: &mut Arbiter, bot: &mut Heuristic) {
        for seat in 0..N as Position {
            let to = Direction::Left.target(seat).unwrap_or(seat);
            let cards = arbiter.hands()[seat as usize].first(3);
            let cards = [cards[0], cards[1], cards[2]];
            let out = arbiter
                .observe(seat, Target::Seat(to), &Message::Pass(cards), bot)
                .await;
            assert!(out.is_empty());
        }
    }

    #[tokio::test]
    async fn tricks_open_when_passing_token_returns() {
        let ref mut bot = Heuristic;
        let mut arbiter = Arbiter::new(0, Some(5));
        arbiter.start();
        let early = arbiter
            .observe(3, Target::Broadcast, &Message::Token(0), bot)
            .await;
        assert!(early.is_empty());
        pass_all(&mut arbiter, bot).await;
        let relay = arbiter
            .observe(2, Target::Broadcast, &Message::Token(3), bot)
            .await;
        assert!(relay.is_empty());
        let opened = arbiter
            .observe(3, Target::Broadcast, &Message::Token(0), bot)
            .await;
        assert_eq!(opened.len(), 2);
        assert_eq!(opened[0], (Message::Phase(Stage::Tricks), Target::Broadcast));
        let leader = tokens(&opened)[0];
        assert!(arbiter.hands()[leader as usize].contains(&Card::TWO_OF_CLUBS));
        assert!(arbiter.hands().iter().all(|h| h.size() == 13));
        let again = arbiter
            .observe(0, Target::Broadcast, &Message::Token(0), bot)
            .await;
        assert!(again.is_empty());
    }

    #[tokio::test]
    async fn stall_opens_tricks_when_passing_token_is_lost() {
        let ref mut bot = Heuristic;
        let mut arbiter = Arbiter::new(0, Some(5));
        arbiter.start();
        pass_all(&mut arbiter, bot).await;
        let out = arbiter.on_stall();
        assert_eq!(out[0], (Message::Phase(Stage::Tricks), Target::Broadcast));
        let leader = tokens(&out)[0];
        assert_eq!(tokens(&arbiter.on_stall()), vec![leader]);
    }

    #[test]
    fn fixed_deck_deals_every_hand() {
        let mut arbiter = Arbiter::new(0, None).with_deck(Deck::new());
        arbiter.start();
        assert_eq!(arbiter.hands(), &Deck::new().deal());
        assert!(arbiter.hands()[1].contains(&Card::TWO_OF_CLUBS));
    }

    #[tokio::test]
    async fn resolves_trick_and_grants_winner() {
        let ref mut bot = Heuristic;
        let mut arbiter = Arbiter::new(0, Some(5));
        arbiter.start();
        let plays = ["2c", "Qc", "3h", "Kc"].map(|s| Card::try_from(s).unwrap());
        let mut out = vec![];
        for (seat, card) in plays.into_iter().enumerate() {
            out = arbiter
                .observe(seat as Position, Target::Broadcast, &Message::Play(card), bot)
                .await;
        }
        let Message::Trick(summary) = out[0].0 else {
            panic!("expected trick summary")
        };
        assert_eq!(summary.winner, 3);
        assert_eq!(summary.points, 1);
        assert_eq!(tokens(&out), vec![3]);
    }

    #[tokio::test]
    async fn stall_regrants_waiting_seat() {
        let ref mut bot = Heuristic;
        let mut arbiter = Arbiter::new(0, Some(5));
        assert!(arbiter.on_stall().is_empty());
        arbiter.start();
        assert_eq!(tokens(&arbiter.on_stall()), vec![0]);
        let cards = arbiter.hands()[0].first(3);
        let cards = [cards[0], cards[1], cards[2]];
        arbiter
            .observe(0, Target::Seat(1), &Message::Pass(cards), bot)
            .await;
        assert_eq!(tokens(&arbiter.on_stall()), vec![1]);
    }
}
