use itertools::iproduct;

use crate::chopsticks::prelude::*;

/// The four hand counts of a position in fixed slot order:
/// `[first.left, first.right, second.left, second.right]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(pub [u8; 4]);

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}{b}{c}{d}")
    }
}

/// A relabeling of a position that preserves its strategic meaning.
///
/// The group is generated by mirroring either player's hands and by exchanging
/// which player occupies the first slot, so it has exactly 8 elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Relabel {
    pub mirror_first: bool,
    pub mirror_second: bool,
    pub swap_players: bool,
}

impl Relabel {
    pub fn identity() -> Relabel {
        Relabel { mirror_first: false, mirror_second: false, swap_players: false }
    }

    /// Gets all relabelings, identity first.
    pub fn all() -> [Relabel; 8] {
        let mut all = [Relabel::identity(); 8];
        for (slot, (swap_players, mirror_first, mirror_second)) in iproduct!([false, true], [false, true], [false, true]).enumerate() {
            all[slot] = Relabel { mirror_first, mirror_second, swap_players };
        }
        all
    }

    /// Applies the relabeling to a signature. Mirroring happens before the players are exchanged.
    pub fn apply(&self, signature: &Signature) -> Signature {
        let [a, b, c, d] = signature.0;
        let [a, b] = if self.mirror_first { [b, a] } else { [a, b] };
        let [c, d] = if self.mirror_second { [d, c] } else { [c, d] };
        match self.swap_players {
            true  => Signature([c, d, a, b]),
            false => Signature([a, b, c, d])
        }
    }
}

impl GameState {
    /// The literal encoding of this position, in player-one-first order.
    pub fn compress(&self) -> Signature {
        let [a, b] = self.player1().counts();
        let [c, d] = self.player2().counts();
        Signature([a, b, c, d])
    }

    /// Every encoding of a position equivalent to this one. Coinciding relabelings collapse,
    /// so the set holds at most 8 signatures.
    pub fn compress_all(&self) -> BTreeSet<Signature> {
        let signature = self.compress();
        Relabel::all().iter().map(|r| r.apply(&signature)).collect()
    }

    /// Whether this exact board has been seen before, under any relabeling.
    pub fn is_loop(&self) -> bool {
        self.seen_states().contains(&self.compress())
    }
}
