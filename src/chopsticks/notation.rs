use std::sync::OnceLock;

use regex::Regex;

use crate::chopsticks::prelude::*;

static MOVE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// A move: the mover's chosen hand and what it does.
///
/// The text form is exactly `"<side> <action>"` with a single space, e.g. `"left split"` or
/// `"right left"`. Parsing only checks the grammar; whether the move is legal in a given
/// position is decided by `GameState::is_valid_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub hand: Side,
    pub action: Action,
}

impl Move {
    pub fn new(hand: Side, action: Action) -> Move {
        Move { hand, action }
    }

    /// Attacks the opponent's `target` hand with the mover's `hand`.
    pub fn attack(hand: Side, target: Side) -> Move {
        Move::new(hand, Action::Attack(target))
    }

    /// Splits the mover's `hand` across both hands.
    pub fn split(hand: Side) -> Move {
        Move::new(hand, Action::Split)
    }

    pub fn notate(&self) -> String {
        format!("{} {}", self.hand, self.action)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.hand, self.action)
    }
}

impl std::str::FromStr for Move {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let malformed = |reason: String| GameError::InvalidInputFormat { input: s.to_owned(), reason };

        let pattern = match MOVE_PATTERN.get() {
            Some(pattern) => pattern,
            None => {
                let compiled = Regex::new("^(?<hand>[^ ]*) (?<action>[^ ]*)$")?;
                MOVE_PATTERN.get_or_init(|| compiled)
            }
        };
        let Some(matches) = pattern.captures(s) else {
            return Err(malformed(format!("expected exactly one space, found {}", s.matches(' ').count())).into());
        };

        let hand = matches["hand"].parse::<Side>().map_err(|e| malformed(e.to_string()))?;
        let action = matches["action"].parse::<Action>().map_err(|e| malformed(e.to_string()))?;
        Ok(Move { hand, action })
    }
}
