use crate::GAME_LIMIT;
use crate::MOON;
use crate::N;
use crate::Points;
use crate::Position;
use serde::Deserialize;
use serde::Serialize;

/// How a dealer who shot the moon settles it.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Moon {
    /// (A) the shooter scores 0, everyone else 26.
    #[default]
    Others,
    /// (B) the shooter scores 26, everyone else 0.
    Shooter,
}

/// A resolved hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    pub scores: [Points; N],
    pub totals: [Points; N],
    pub moon: Option<Position>,
}

/// The seat that took every penalty point this hand, if any.
pub fn shooter(taken: &[Points; N]) -> Option<Position> {
    taken
        .iter()
        .position(|p| *p == MOON)
        .map(|s| s as Position)
}

/// Turns per-seat trick points into hand scores and new totals.
///
/// Only the dealer gets to pick how a moon is settled; anyone else who
/// shoots is settled as [`Moon::Others`], as is a dealer who made no
/// choice.
pub fn hand_scores(
    taken: &[Points; N],
    prior: &[Points; N],
    dealer: Position,
    choice: Option<Moon>,
) -> Scoring {
    let moon = shooter(taken);
    let scores = match moon {
        None => *taken,
        Some(s) => {
            let settle = match s == dealer {
                true => choice.unwrap_or_default(),
                false => Moon::Others,
            };
            std::array::from_fn(|i| match (i == s as usize, settle) {
                (true, Moon::Others) | (false, Moon::Shooter) => 0,
                (true, Moon::Shooter) | (false, Moon::Others) => MOON,
            })
        }
    };
    Scoring {
        scores,
        totals: std::array::from_fn(|i| prior[i] + scores[i]),
        moon,
    }
}

pub fn is_game_over(totals: &[Points; N]) -> bool {
    totals.iter().any(|t| *t >= GAME_LIMIT)
}

/// Lowest total wins; ties go to the lowest seat.
pub fn winner(totals: &[Points; N]) -> Position {
    totals
        .iter()
        .enumerate()
        .min_by_key(|(i, t)| (**t, *i))
        .map(|(i, _)| i as Position)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_hand_passes_through() {
        let s = hand_scores(&[3, 13, 10, 0], &[10, 10, 10, 10], 0, None);
        assert_eq!(s.scores, [3, 13, 10, 0]);
        assert_eq!(s.totals, [13, 23, 20, 10]);
        assert_eq!(s.moon, None);
    }

    #[test]
    fn non_dealer_moon() {
        let s = hand_scores(&[26, 0, 0, 0], &[0; N], 2, Some(Moon::Shooter));
        assert_eq!(s.scores, [0, 26, 26, 26]);
        assert_eq!(s.moon, Some(0));
    }

    #[test]
    fn dealer_moon_choices() {
        let a = hand_scores(&[0, 0, 26, 0], &[0; N], 2, Some(Moon::Others));
        assert_eq!(a.scores, [26, 26, 0, 26]);
        let b = hand_scores(&[0, 0, 26, 0], &[0; N], 2, Some(Moon::Shooter));
        assert_eq!(b.scores, [0, 0, 26, 0]);
        let none = hand_scores(&[0, 0, 26, 0], &[0; N], 2, None);
        assert_eq!(none.scores, a.scores);
    }

    #[test]
    fn game_end_and_winner() {
        let totals = [101, 40, 60, 70];
        assert!(is_game_over(&totals));
        assert_eq!(winner(&totals), 1);
        assert!(!is_game_over(&[99, 0, 0, 0]));
        assert!(is_game_over(&[0, 0, 100, 0]));
        assert_eq!(winner(&[50, 30, 30, 100]), 1);
    }
}
