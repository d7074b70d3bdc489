use super::Trick;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Suit;

/// Cards a seat may play into `trick`.
///
/// Non-empty whenever `hand` is: each restriction falls back to the
/// whole hand when nothing satisfies it.
pub fn legal_plays(hand: &Hand, trick: &Trick, first: bool, hearts_broken: bool) -> Hand {
    let safe = |h: Hand| if h.is_empty() { *hand } else { h };
    match (trick.lead(), first) {
        (None, true) if hand.contains(&Card::TWO_OF_CLUBS) => Hand::from(vec![Card::TWO_OF_CLUBS]),
        (None, true) => safe(hand.filter(|c| !c.is_point())),
        (None, false) if !hearts_broken => safe(hand.filter(|c| c.suit() != Suit::H)),
        (None, false) => *hand,
        (Some(lead), _) if !hand.of(lead).is_empty() => hand.of(lead),
        (Some(_), true) => safe(hand.filter(|c| !c.is_point())),
        (Some(_), false) => *hand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        Hand::from(Card::parse(s).unwrap())
    }
    fn led(plays: &[(u8, &str)]) -> Trick {
        let mut trick = Trick::new();
        for (seat, card) in plays {
            trick.push(*seat, Card::try_from(*card).unwrap());
        }
        trick
    }

    #[test]
    fn two_of_clubs_must_open() {
        let h = hand("2c 9c Ad Kh Qs");
        assert_eq!(legal_plays(&h, &Trick::new(), true, false), hand("2c"));
    }

    #[test]
    fn void_with_only_points_plays_points() {
        let h = hand("Qs 5h");
        let t = led(&[(0, "2c")]);
        assert_eq!(legal_plays(&h, &t, true, false), h);
        assert_eq!(legal_plays(&h, &t, false, false), h);
    }

    #[test]
    fn first_trick_void_avoids_points() {
        let h = hand("Qs 5h 7d");
        let t = led(&[(0, "2c")]);
        assert_eq!(legal_plays(&h, &t, true, false), hand("7d"));
        assert_eq!(legal_plays(&h, &t, false, false), h);
    }

    #[test]
    fn must_follow_suit() {
        let h = hand("3c Jc 5h Ad");
        let t = led(&[(2, "9c")]);
        assert_eq!(legal_plays(&h, &t, false, true), hand("3c Jc"));
    }

    #[test]
    fn hearts_wait_until_broken() {
        let h = hand("5h 9h 4s");
        assert_eq!(legal_plays(&h, &Trick::new(), false, false), hand("4s"));
        assert_eq!(legal_plays(&h, &Trick::new(), false, true), h);
        let hearts = hand("5h 9h");
        assert_eq!(legal_plays(&hearts, &Trick::new(), false, false), hearts);
    }

    #[test]
    fn first_lead_without_two_of_clubs() {
        let h = hand("Qs 5h 8d");
        assert_eq!(legal_plays(&h, &Trick::new(), true, false), hand("8d"));
        let points = hand("Qs 5h");
        assert_eq!(legal_plays(&points, &Trick::new(), true, false), points);
    }
}
