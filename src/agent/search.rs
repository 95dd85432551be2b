use crate::chopsticks::prelude::*;

use super::AgentConfig;

/// The value of a position to the player about to move.
pub type Evaluation = i8;

pub const WIN: Evaluation = 1;
pub const DRAW: Evaluation = 0;
pub const LOSS: Evaluation = -1;
/// Marks a node no move has been scored for yet; never a real value.
pub const UNSET: Evaluation = -2;

/// The best line found by a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Absent when the position was already decided.
    pub mv: Option<Move>,
    pub value: Evaluation,
    /// Positions visited, the root included.
    pub nodes: usize,
}

/// A depth-limited minimax searcher that scores repeated positions as draws.
///
/// Every child is searched on its own clone of the game, history included, so a line only
/// sees the positions of the real game plus those reached earlier on the same line.
/// Results are never cached: the same position may score differently at different depths.
#[derive(Clone, Debug)]
pub struct SearchAgent {
    config: AgentConfig,
    nodes: usize,
}

impl SearchAgent {
    pub fn new(config: AgentConfig) -> SearchAgent {
        SearchAgent { config, nodes: 0 }
    }

    /// Picks a move for `mover` and its value: `WIN`, `DRAW` or `LOSS`.
    pub fn best_move(&mut self, game: &GameState, mover: &str, opponent: &str) -> Result<(Option<Move>, Evaluation)> {
        let SearchReport { mv, value, .. } = self.search(game, mover, opponent)?;
        Ok((mv, value))
    }

    /// Searches from `game` with `mover` to play, and reports how much work it took.
    pub fn search(&mut self, game: &GameState, mover: &str, opponent: &str) -> Result<SearchReport> {
        if game.opponent_of(mover)?.name() != opponent {
            return Err(GameError::InvalidArgument {
                reason: format!("{opponent} is not playing against {mover}")
            }.into());
        }

        self.nodes = 0;
        let (mv, value) = self.maximize(game, mover, opponent, 0)?;
        log::debug!(
            "{mover} searched {} nodes from {}: {} scores {value}",
            self.nodes, game.compress(), mv.map_or("nothing".into(), |m| m.notate())
        );
        Ok(SearchReport { mv, value, nodes: self.nodes })
    }

    fn maximize(&mut self, game: &GameState, mover: &str, opponent: &str, depth: usize) -> Result<(Option<Move>, Evaluation)> {
        self.nodes += 1;
        if let Some(winner) = game.get_winner() {
            return Ok((None, if winner == mover { WIN } else { LOSS }));
        }

        let (mut best_move, mut max_value) = (None, UNSET);
        let moves = GameState::get_possible_moves(game.get_player(mover)?, game.get_player(opponent)?);
        for mv in moves {
            let mut next = game.clone();
            next.execute_move(mover, opponent, &mv)?;

            let value = if depth > self.config.depth_limit || next.is_loop() {
                log::trace!("pruned {mv} at depth {depth} into {}", next.compress());
                DRAW
            } else {
                next.store_state();
                let (_, reply) = self.maximize(&next, opponent, mover, depth + 1)?;
                -reply
            };

            if value == WIN {
                return Ok((Some(mv), value)); // nothing beats a win
            }
            if value > max_value {
                (best_move, max_value) = (Some(mv), value);
            }
        }

        if max_value == UNSET {
            return Err(GameError::InternalInvariantViolation {
                reason: format!("{mover} has no moves in live position {}", game.compress())
            }.into());
        }
        Ok((best_move, max_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(p1: [u8; 2], p2: [u8; 2]) -> GameState {
        GameState::new(Player::with_hands("a", p1[0], p1[1]), Player::with_hands("b", p2[0], p2[1])).unwrap()
    }

    fn agent() -> SearchAgent {
        AgentConfig::default().get_agent()
    }

    #[test]
    fn decided_positions_are_terminal() {
        let g = game([0, 0], [1, 1]);
        assert_eq!(agent().best_move(&g, "b", "a").unwrap(), (None, WIN));
        assert_eq!(agent().best_move(&g, "a", "b").unwrap(), (None, LOSS));
    }

    #[test]
    fn takes_a_win_in_one() {
        let g = game([4, 0], [1, 0]);
        let (mv, value) = agent().best_move(&g, "a", "b").unwrap();
        assert_eq!(mv, Some(Move::attack(Side::Left, Side::Left)));
        assert_eq!(value, WIN);
    }

    #[test]
    fn win_in_one_for_the_second_slot() {
        let g = game([0, 2], [0, 3]);
        let (mv, value) = agent().best_move(&g, "b", "a").unwrap();
        assert_eq!(mv, Some(Move::attack(Side::Right, Side::Right)));
        assert_eq!(value, WIN);
    }

    #[test]
    fn every_reply_loses() {
        let g = game([0, 1], [0, 3]);
        let mut searcher = AgentConfig::new().with_depth_limit(4).get_agent();
        let (mv, value) = searcher.best_move(&g, "a", "b").unwrap();
        assert_eq!(mv, Some(Move::attack(Side::Right, Side::Right)));
        assert_eq!(value, LOSS);
    }

    #[test]
    fn later_move_beats_a_losing_first_move() {
        let g = game([0, 1], [1, 2]);
        assert_eq!(
            g.valid_moves("a").unwrap(),
            [Move::attack(Side::Right, Side::Left), Move::attack(Side::Right, Side::Right)]
        );
        let mut searcher = AgentConfig::new().with_depth_limit(4).get_agent();
        let (mv, value) = searcher.best_move(&g, "a", "b").unwrap();
        assert_eq!(mv, Some(Move::attack(Side::Right, Side::Right)));
        assert_eq!(value, DRAW);
    }

    #[test]
    fn repetition_scores_as_draw() {
        let mut g = game([1, 0], [2, 0]);
        g.store_state();
        g.get_player_mut("b").unwrap().set_hand(Side::Left, Hand::new(1));
        let seen = g.seen_states().clone();

        // the only move leads back into a stored position
        let (mv, value) = agent().best_move(&g, "a", "b").unwrap();
        assert_eq!(mv, Some(Move::attack(Side::Left, Side::Left)));
        assert_eq!(value, DRAW);
        assert_eq!(g.seen_states(), &seen);
    }

    #[test]
    fn depth_limit_scores_as_draw() {
        let mut searcher = AgentConfig::new().with_depth_limit(0).get_agent();
        let g = GameState::new(Player::new("a"), Player::new("b")).unwrap();
        let report = searcher.search(&g, "a", "b").unwrap();
        assert_eq!(report.mv, Some(Move::attack(Side::Left, Side::Left)));
        assert_eq!(report.value, DRAW);
        assert_eq!(report.nodes, 5);
    }

    #[test]
    fn search_leaves_the_game_untouched() {
        let mut g = GameState::new(Player::new("a"), Player::new("b")).unwrap();
        g.play("a", "left left").unwrap();
        let before = g.clone();
        let mut searcher = AgentConfig::new().with_depth_limit(4).get_agent();
        let (mv, value) = searcher.best_move(&g, "b", "a").unwrap();
        assert!(mv.is_some_and(|m| g.is_valid_move("b", &m).unwrap()));
        assert!([LOSS, DRAW, WIN].contains(&value));
        assert_eq!(g.seen_states(), before.seen_states());
        assert_eq!(g.compress(), before.compress());
    }

    #[test]
    fn rejects_mismatched_players() {
        let g = GameState::new(Player::new("a"), Player::new("b")).unwrap();
        let err = agent().best_move(&g, "a", "a").unwrap_err();
        assert!(matches!(GameError::classify(&err), Some(GameError::InvalidArgument { .. })));
        assert!(agent().best_move(&g, "zed", "b").is_err());
    }
}
