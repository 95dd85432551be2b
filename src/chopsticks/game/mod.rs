pub(crate) mod moves;
pub(crate) mod signature;

use crate::chopsticks::prelude::*;

pub use signature::{Relabel, Signature};

/// A game of Chopsticks between two named players.
///
/// The players keep fixed slots (`player1`, `player2`) for identity lookup and for the fixed-order
/// encoding, but turn order is owned by whoever drives the game. `seen_states` accumulates the
/// symmetry closure of every position reached since the game began; cloning a game clones the
/// history with it, so hypothetical lines never write back into the real one.
#[derive(Clone, Debug)]
pub struct GameState {
    players: [Player; 2],
    seen_states: HashSet<Signature>,
}

impl GameState {
    /// Starts a game between two players, who must have distinct names.
    pub fn new(player1: Player, player2: Player) -> Result<GameState> {
        if player1.name() == player2.name() {
            return Err(GameError::InvalidArgument {
                reason: format!("both players are named {}", player1.name())
            }.into());
        }
        Ok(GameState { players: [player1, player2], seen_states: HashSet::new() })
    }

    pub fn player1(&self) -> &Player {
        &self.players[0]
    }

    pub fn player2(&self) -> &Player {
        &self.players[1]
    }

    /// Finds a player by name.
    pub fn get_player(&self, name: &str) -> Result<&Player> {
        let slot = self.slot(name)?;
        Ok(&self.players[slot])
    }

    /// Finds a player by name, for in-place edits.
    pub fn get_player_mut(&mut self, name: &str) -> Result<&mut Player> {
        let slot = self.slot(name)?;
        Ok(&mut self.players[slot])
    }

    /// Finds the player facing the named one.
    pub fn opponent_of(&self, name: &str) -> Result<&Player> {
        let slot = self.slot(name)?;
        Ok(&self.players[1 - slot])
    }

    /// The names of both players, in slot order.
    pub fn names(&self) -> [&str; 2] {
        [self.players[0].name(), self.players[1].name()]
    }

    /// Every signature recorded so far.
    pub fn seen_states(&self) -> &HashSet<Signature> {
        &self.seen_states
    }

    /// Records the current position, under every relabeling, as seen.
    pub fn store_state(&mut self) {
        let closure = self.compress_all();
        self.seen_states.extend(closure);
    }

    /// Adds previously recorded signatures to this game's history.
    pub fn remember<'s>(&mut self, signatures: impl IntoIterator<Item = &'s Signature>) {
        self.seen_states.extend(signatures);
    }

    /// The name of the only surviving player, if exactly one survives.
    pub fn get_winner(&self) -> Option<&str> {
        match [self.players[0].is_alive(), self.players[1].is_alive()] {
            [true, false] => Some(self.players[0].name()),
            [false, true] => Some(self.players[1].name()),
            [true, true]  => None,
            [false, false] => {
                log::error!("both players are dead in {}", self.compress());
                debug_assert!(false, "both players are dead in {}", self.compress());
                None
            }
        }
    }

    /// Whether `player` may play `mv` in this position.
    pub fn is_valid_move(&self, player: &str, mv: &Move) -> Result<bool> {
        match self.check_move(player, mv) {
            Ok(()) => Ok(true),
            Err(err) => match GameError::classify(&err) {
                Some(GameError::IllegalMove { .. }) => Ok(false),
                _ => Err(err)
            }
        }
    }

    /// Checks `mv` against the rules, naming the violated rule if it is illegal.
    pub fn check_move(&self, player: &str, mv: &Move) -> Result<()> {
        let attacker = self.get_player(player)?;
        let defender = self.opponent_of(player)?;
        let illegal = |reason: &str| -> Result<()> {
            Err(GameError::IllegalMove { player: player.to_owned(), mv: mv.notate(), reason: reason.to_owned() }.into())
        };

        let attack_hand = attacker.get_hand(mv.hand);
        let off_hand = attacker.get_hand(!mv.hand);
        if !attack_hand.is_alive() {
            return illegal("the chosen hand is dead");
        }
        match mv.action {
            Action::Attack(target) if !defender.get_hand(target).is_alive() => {
                illegal("the targeted hand is dead")
            },
            Action::Split if !attack_hand.is_even() => illegal("only an even hand can split"),
            Action::Split if off_hand.is_alive() => illegal("can only split with a single live hand"),
            _ => Ok(())
        }
    }

    /// Plays a move with no rule checks; only the identities are verified.
    pub fn execute_move(&mut self, attacker: &str, defender: &str, mv: &Move) -> Result<()> {
        let [a, d] = [self.slot(attacker)?, self.slot(defender)?];
        if a == d {
            return Err(GameError::InvalidArgument {
                reason: format!("{attacker} cannot play against themselves")
            }.into());
        }

        let attack_hand = self.players[a].get_hand(mv.hand);
        match mv.action {
            Action::Split => {
                let (left, right) = attack_hand.split();
                self.players[a].set_hand(Side::Left, left).set_hand(Side::Right, right);
            },
            Action::Attack(target) => {
                let defend_hand = self.players[d].get_hand(target);
                self.players[d].set_hand(target, defend_hand.combine(&attack_hand));
            }
        };
        Ok(())
    }

    /// Parses, checks, executes and records a move typed by `mover`.
    pub fn play(&mut self, mover: &str, text: &str) -> Result<Move> {
        let mv = text.parse::<Move>()?;
        self.check_move(mover, &mv)?;
        let defender = self.opponent_of(mover)?.name().to_owned();
        self.execute_move(mover, &defender, &mv)?;
        self.store_state();
        log::debug!("{mover} played {mv}, position is now {}", self.compress());
        Ok(mv)
    }

    fn slot(&self, name: &str) -> Result<usize> {
        self.players.iter().position(|p| p.name() == name).ok_or_else(|| {
            GameError::InvalidArgument { reason: format!("{name} is not playing in this game") }.into()
        })
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}: {}", self.player1().name(), self.player1())?;
        write!(f, "{}: {}", self.player2().name(), self.player2())
    }
}
