use crate::chopsticks::prelude::*;

/// A single hand; holds a count of raised fingers in `0..MODULUS`. A hand holding zero is dead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hand(u8);

impl Hand {
    /// Produces a hand holding the given count, reduced into range.
    pub fn new(count: u8) -> Hand {
        Hand(count % MODULUS)
    }

    /// The count held by this hand.
    pub fn count(&self) -> u8 {
        self.0
    }

    /// Whether or not this hand can still act or be attacked.
    pub fn is_alive(&self) -> bool {
        self.0 != 0
    }

    /// Whether or not this hand holds an even count.
    pub fn is_even(&self) -> bool {
        self.0 % 2 == 0
    }

    /// The hand that results from `other` tapping this one.
    pub fn combine(&self, other: &Hand) -> Hand {
        Hand((self.0 + other.0) % MODULUS)
    }

    /// Halves this hand into two equal hands. Callers must ensure the count is even;
    /// an odd remainder is dropped.
    pub fn split(&self) -> (Hand, Hand) {
        let half = Hand(self.0 / 2);
        (half, half)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
