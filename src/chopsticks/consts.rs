use std::ops::Not;
use crate::utils::prelude::*;

/// Counts wrap around at this value; a hand reaching it is dead.
pub const MODULUS: u8 = 5;

/// The count each hand holds at the start of a game.
pub const STARTING_COUNT: u8 = 1;

// A hand selector.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left = 0,
    Right = 1,
}

impl Side {
    /// Gets both sides in canonical order.
    pub fn all() -> [Side; 2] {
        [Side::Left, Side::Right]
    }

    /// Notates the side.
    pub fn notate(&self) -> &'static str {
        match self {
            Side::Left  => "left",
            Side::Right => "right"
        }
    }
}

impl Not for Side {
    type Output = Side;
    fn not(self) -> Self::Output {
        match self {
            Side::Left  => Side::Right,
            Side::Right => Side::Left
        }
    }
}

impl std::str::FromStr for Side {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "left"  => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _       => Err(anyhow!("invalid notation {s} for side"))
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.notate())
    }
}

// What the chosen hand does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    /// Tap the opponent's hand on the given side.
    Attack(Side),
    /// Divide the chosen hand evenly across both of the mover's hands.
    Split,
}

impl Action {
    /// Notates the action.
    pub fn notate(&self) -> &'static str {
        match self {
            Action::Attack(side) => side.notate(),
            Action::Split        => "split"
        }
    }
}

impl std::str::FromStr for Action {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "split" => Ok(Action::Split),
            _       => s.parse::<Side>()
                .map(Action::Attack)
                .map_err(|_| anyhow!("invalid notation {s} for action"))
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.notate())
    }
}
