use super::Event;
use super::Phase;
use super::Snapshot;
use super::decision;
use crate::ARBITER;
use crate::DECISION_TIMEOUT;
use crate::N;
use crate::PASS_SIZE;
use crate::Points;
use crate::Position;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Suit;
use crate::players::Strategy;
use crate::protocol::GameResult;
use crate::protocol::HandSummary;
use crate::protocol::Message;
use crate::protocol::Stage;
use crate::protocol::Target;
use crate::protocol::TrickSummary;
use crate::rules::Direction;
use crate::rules::Trick;
use crate::rules::legal_plays;
use std::time::Duration;

/// Outgoing messages produced by handling one incoming message.
pub type Outgoing = Vec<(Message, Target)>;

/// One seat's turn state machine.
///
/// Consumes every message relevant to the seat, in arrival order, and
/// answers with the messages the seat must originate. It only acts while
/// it holds the token; everything else is bookkeeping. Trick points and
/// totals come from the arbiter's summaries, never from local tallies.
pub struct Coordinator {
    seat: Position,
    arbiter: Position,
    decision: Duration,
    phase: Phase,
    hands: usize,
    direction: Option<Direction>,
    token: Option<Position>,
    hand: Hand,
    stash: Vec<(Position, [Card; PASS_SIZE])>,
    passed: bool,
    trick: Trick,
    hearts_broken: bool,
    tricks: usize,
    taken: [Points; N],
    totals: [Points; N],
    result: Option<GameResult>,
}

impl Coordinator {
    pub fn new(seat: Position) -> Self {
        Self::with_timeout(seat, DECISION_TIMEOUT)
    }
    pub fn with_timeout(seat: Position, decision: Duration) -> Self {
        Self {
            seat,
            arbiter: ARBITER,
            decision,
            phase: Phase::Waiting,
            hands: 0,
            direction: None,
            token: None,
            hand: Hand::empty(),
            stash: Vec::new(),
            passed: false,
            trick: Trick::new(),
            hearts_broken: false,
            tricks: 0,
            taken: [0; N],
            totals: [0; N],
            result: None,
        }
    }
    /// Seat whose grants are always honoured.
    pub fn with_arbiter(mut self, arbiter: Position) -> Self {
        self.arbiter = arbiter;
        self
    }
    pub fn seat(&self) -> Position {
        self.seat
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn totals(&self) -> [Points; N] {
        self.totals
    }
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seat: self.seat,
            hand_number: self.hands.saturating_sub(1),
            phase: self.phase,
            direction: self.direction,
            token: self.token,
            hand: self.hand,
            trick: self.trick.clone(),
            hearts_broken: self.hearts_broken,
            tricks: self.tricks,
            taken: self.taken,
            totals: self.totals,
        }
    }
}

impl Coordinator {
    /// Applies one message seen by this seat and returns what to send.
    pub async fn handle(
        &mut self,
        origin: Position,
        dest: Target,
        message: &Message,
        strategy: &mut dyn Strategy,
    ) -> Outgoing {
        log::debug!("[seat P{}] {} from P{}", self.seat, message, origin);
        let outgoing = match message {
            Message::Start => self.on_start(strategy).await,
            Message::Deal(hand) => self.on_deal(*hand, strategy).await,
            Message::Phase(stage) => self.on_stage(*stage, strategy).await,
            Message::Token(holder) => self.on_token(origin, *holder, strategy).await,
            Message::Pass(cards) => self.on_pass(origin, dest, *cards, strategy).await,
            Message::Play(card) => self.on_play(origin, *card, strategy).await,
            Message::Trick(summary) => self.on_trick(summary, strategy).await,
            Message::Summary(summary) => self.on_summary(summary, strategy).await,
            Message::GameOver(result) => self.on_game_over(result, strategy).await,
        };
        log::trace!(
            "[seat P{}] {}",
            self.seat,
            serde_json::to_string(&self.snapshot()).unwrap_or_default()
        );
        outgoing
    }

    async fn on_start(&mut self, strategy: &mut dyn Strategy) -> Outgoing {
        self.phase = Phase::Waiting;
        self.direction = None;
        self.token = None;
        self.hand = Hand::empty();
        self.stash.clear();
        self.passed = false;
        self.trick.clear();
        self.hearts_broken = false;
        self.tricks = 0;
        self.taken = [0; N];
        self.hands += 1;
        strategy
            .notify(&Event::HandStart {
                hand: self.hands - 1,
            })
            .await;
        vec![]
    }

    async fn on_deal(&mut self, hand: Hand, strategy: &mut dyn Strategy) -> Outgoing {
        if self.phase != Phase::Waiting {
            log::warn!("[seat P{}] deal while {}, ignored", self.seat, self.phase);
            return vec![];
        }
        self.hand = hand;
        self.phase = Phase::Dealt;
        strategy.notify(&Event::Dealt(hand)).await;
        vec![]
    }

    async fn on_stage(&mut self, stage: Stage, strategy: &mut dyn Strategy) -> Outgoing {
        match (self.phase, stage) {
            (Phase::Dealt, Stage::Passing(direction)) => {
                self.phase = Phase::Passing;
                self.direction = Some(direction);
            }
            (Phase::Dealt | Phase::Passing, Stage::Tricks) => {
                self.phase = Phase::Tricks;
                self.merge();
            }
            (phase, stage) => {
                log::warn!("[seat P{}] {} while {}, ignored", self.seat, stage, phase);
                return vec![];
            }
        }
        strategy.notify(&Event::Stage(stage)).await;
        vec![]
    }

    async fn on_token(
        &mut self,
        origin: Position,
        holder: Position,
        strategy: &mut dyn Strategy,
    ) -> Outgoing {
        if origin != self.arbiter && self.token != Some(origin) {
            log::debug!(
                "[seat P{}] stale grant to P{} from P{}, dropped",
                self.seat,
                holder,
                origin
            );
            return vec![];
        }
        self.token = Some(holder);
        strategy.notify(&Event::Token(holder)).await;
        if holder != self.seat {
            return vec![];
        }
        match self.phase {
            Phase::Passing => self.take_pass_turn(strategy).await,
            Phase::Tricks => self.take_trick_turn(strategy).await,
            phase => {
                log::warn!("[seat P{}] token while {}, holding", self.seat, phase);
                vec![]
            }
        }
    }

    async fn take_pass_turn(&mut self, strategy: &mut dyn Strategy) -> Outgoing {
        let target = match self.direction.and_then(|d| d.target(self.seat)) {
            Some(target) => target,
            None => return self.relay(),
        };
        if self.passed {
            log::debug!("[seat P{}] already passed, holding token", self.seat);
            return vec![];
        }
        let snapshot = self.snapshot();
        let Some(cards) = decision::pass(strategy, &snapshot, self.decision).await else {
            log::error!("[seat P{}] nothing to pass from {}", self.seat, self.hand);
            return vec![];
        };
        for card in cards {
            self.hand.remove(card);
        }
        self.passed = true;
        log::info!(
            "[seat P{}] passes {} {} {} to P{}",
            self.seat,
            cards[0],
            cards[1],
            cards[2],
            target
        );
        strategy
            .notify(&Event::Passed { to: target, cards })
            .await;
        self.merge();
        let mut outgoing = vec![(Message::Pass(cards), Target::Seat(target))];
        outgoing.extend(self.relay());
        outgoing
    }

    async fn take_trick_turn(&mut self, strategy: &mut dyn Strategy) -> Outgoing {
        if self.trick.plays().iter().any(|(s, _)| *s == self.seat) {
            log::warn!("[seat P{}] token after playing to this trick, holding", self.seat);
            return vec![];
        }
        let first = self.tricks == 0;
        let card = match (first && self.trick.is_empty(), self.hand.contains(&Card::TWO_OF_CLUBS)) {
            (true, true) => Card::TWO_OF_CLUBS,
            (true, false) => return self.relay(),
            (false, _) => {
                let legal = legal_plays(&self.hand, &self.trick, first, self.hearts_broken);
                let snapshot = self.snapshot();
                match decision::play(strategy, &snapshot, &legal, self.decision).await {
                    Some(card) => card,
                    None => {
                        log::error!("[seat P{}] nothing to play", self.seat);
                        return vec![];
                    }
                }
            }
        };
        self.hand.remove(card);
        log::info!("[seat P{}] plays {}", self.seat, card);
        let mut outgoing = vec![(Message::Play(card), Target::Broadcast)];
        if self.trick.len() + 1 < N {
            outgoing.extend(self.relay());
        }
        outgoing
    }

    async fn on_pass(
        &mut self,
        origin: Position,
        dest: Target,
        cards: [Card; PASS_SIZE],
        strategy: &mut dyn Strategy,
    ) -> Outgoing {
        if dest != Target::Seat(self.seat) || origin == self.seat {
            return vec![];
        }
        log::debug!("[seat P{}] receives pass from P{}", self.seat, origin);
        self.stash.push((origin, cards));
        if self.passed || self.phase == Phase::Tricks {
            self.merge();
        }
        strategy
            .notify(&Event::Received {
                from: origin,
                cards,
            })
            .await;
        vec![]
    }

    async fn on_play(
        &mut self,
        origin: Position,
        card: Card,
        strategy: &mut dyn Strategy,
    ) -> Outgoing {
        if !self.trick.push(origin, card) {
            log::warn!("[seat P{}] play {} by P{} does not fit trick, ignored", self.seat, card, origin);
            return vec![];
        }
        if card.suit() == Suit::H {
            self.hearts_broken = true;
        }
        strategy
            .notify(&Event::Played { seat: origin, card })
            .await;
        vec![]
    }

    async fn on_trick(&mut self, summary: &TrickSummary, strategy: &mut dyn Strategy) -> Outgoing {
        self.taken[summary.winner as usize] += summary.points;
        self.tricks += 1;
        self.trick.clear();
        strategy.notify(&Event::Trick(*summary)).await;
        vec![]
    }

    async fn on_summary(&mut self, summary: &HandSummary, strategy: &mut dyn Strategy) -> Outgoing {
        self.phase = Phase::HandDone;
        self.totals = summary.totals;
        self.token = None;
        strategy.notify(&Event::Hand(*summary)).await;
        vec![]
    }

    async fn on_game_over(&mut self, result: &GameResult, strategy: &mut dyn Strategy) -> Outgoing {
        self.phase = Phase::GameOver;
        self.totals = result.totals;
        self.token = None;
        self.result = Some(*result);
        strategy.notify(&Event::GameOver(*result)).await;
        vec![]
    }

    /// Hands the token to the next seat round the ring.
    fn relay(&self) -> Outgoing {
        let next = ((self.seat as usize + 1) % N) as Position;
        vec![(Message::Token(next), Target::Broadcast)]
    }

    /// Folds cards received from other seats into the hand.
    fn merge(&mut self) {
        for (_, cards) in self.stash.drain(..) {
            for card in cards {
                self.hand.add(card);
            }
        }
    }
}
