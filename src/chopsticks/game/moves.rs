use crate::chopsticks::prelude::*;

impl GameState {
    /// Lists the moves `attacker` may play against `defender`, in a fixed order so that
    /// searches break ties the same way every time:
    /// 1. left-hand attacks on the left, then right, target (or a right-hand split if the left is dead)
    /// 2. right-hand attacks on the left, then right, target (or a left-hand split if the right is dead)
    pub fn get_possible_moves(attacker: &Player, defender: &Player) -> Vec<Move> {
        let mut moves = Vec::with_capacity(4);
        for side in Side::all() {
            if attacker.get_hand(side).is_alive() {
                moves.extend(Side::all().into_iter()
                    .filter(|&target| defender.get_hand(target).is_alive())
                    .map(|target| Move::attack(side, target)));
            } else if attacker.get_hand(!side).is_even() {
                moves.push(Move::split(!side));
            }
        }
        moves
    }

    /// The moves available to the named player in this position.
    pub fn valid_moves(&self, player: &str) -> Result<Vec<Move>> {
        let attacker = self.get_player(player)?;
        let defender = self.opponent_of(player)?;
        Ok(GameState::get_possible_moves(attacker, defender))
    }
}
