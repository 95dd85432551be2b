use crate::chopsticks::prelude::*;

/// One of the two participants; identified by a name that is unique within its game.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    left_hand: Hand,
    right_hand: Hand,
}

impl Player {
    /// Produces a fresh player with one finger raised on each hand.
    pub fn new(name: impl Into<String>) -> Player {
        Player::with_hands(name, STARTING_COUNT, STARTING_COUNT)
    }

    /// Produces a player holding the given counts.
    pub fn with_hands(name: impl Into<String>, left: u8, right: u8) -> Player {
        Player {
            name: name.into(),
            left_hand: Hand::new(left),
            right_hand: Hand::new(right),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A player survives while either hand is alive.
    pub fn is_alive(&self) -> bool {
        self.left_hand.is_alive() || self.right_hand.is_alive()
    }

    pub fn get_hand(&self, side: Side) -> Hand {
        match side {
            Side::Left  => self.left_hand,
            Side::Right => self.right_hand
        }
    }

    pub fn set_hand(&mut self, side: Side, hand: Hand) -> &mut Self {
        match side {
            Side::Left  => self.left_hand = hand,
            Side::Right => self.right_hand = hand
        };
        self
    }

    /// Both counts in (left, right) order.
    pub fn counts(&self) -> [u8; 2] {
        [self.left_hand.count(), self.right_hand.count()]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.left_hand, self.right_hand)
    }
}
