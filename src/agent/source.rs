use std::io::{BufRead, Write};

use crate::chopsticks::prelude::*;

use super::SearchAgent;

const PROMPT: &str = "Make a move. Enter either left or right to select your hand, then a space, then left or \
right to select which of your opponent's hands to attack. Instead of naming an opponent's hand you may \
write split, to split your selected hand in half (so long as it is your only hand, and it is even).";

/// Something that can decide a seat's moves.
pub trait MoveSource {
    /// Produces a syntactically valid move for `mover`. Whether it is legal is checked by the caller.
    fn request_move(
        &mut self, game: &GameState, mover: &str, input: &mut dyn BufRead, output: &mut dyn Write,
    ) -> Result<String>;

    /// Whether an illegal move from this source should be asked for again rather than treated as a defect.
    fn is_interactive(&self) -> bool;
}

/// Reads moves typed at a prompt.
#[derive(Clone, Copy, Debug, Default)]
pub struct HumanPrompt;

impl MoveSource for HumanPrompt {
    fn request_move(
        &mut self, _game: &GameState, mover: &str, input: &mut dyn BufRead, output: &mut dyn Write,
    ) -> Result<String> {
        loop {
            writeln!(output, "{PROMPT}")?;
            output.flush()?;
            let Some(text) = read_trimmed_line(input)? else {
                return Err(anyhow!("input closed while waiting for {mover}'s move"));
            };
            match text.parse::<Move>() {
                Ok(_) => return Ok(text),
                Err(err) => {
                    log::warn!("rejected input from {mover}: {err}");
                    writeln!(output, "Invalid input.")?;
                }
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Picks moves with a minimax search.
#[derive(Clone, Debug)]
pub struct SearchDriven {
    agent: SearchAgent,
}

impl SearchDriven {
    pub fn new(agent: SearchAgent) -> SearchDriven {
        SearchDriven { agent }
    }
}

impl MoveSource for SearchDriven {
    fn request_move(
        &mut self, game: &GameState, mover: &str, _input: &mut dyn BufRead, _output: &mut dyn Write,
    ) -> Result<String> {
        let opponent = game.opponent_of(mover)?.name();
        let report = self.agent.search(game, mover, opponent)?;
        let Some(mv) = report.mv else {
            return Err(GameError::InvalidArgument {
                reason: format!("{mover} was asked to move in a finished game")
            }.into());
        };
        log::info!("{mover} plays {mv} (value {}, {} nodes)", report.value, report.nodes);
        Ok(mv.notate())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Reads one line without its terminator; `None` at end of input.
pub(crate) fn read_trimmed_line(input: &mut dyn BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::agent::AgentConfig;

    fn opening() -> GameState {
        GameState::new(Player::new("a"), Player::new("b")).unwrap()
    }

    #[test]
    fn prompt_repeats_until_well_formed() {
        let mut input = Cursor::new("left\nleft  left\nright split\n");
        let mut output = Vec::new();
        let text = HumanPrompt.request_move(&opening(), "a", &mut input, &mut output).unwrap();
        assert_eq!(text, "right split"); // well formed, even though illegal here
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Invalid input.").count(), 2);
    }

    #[test]
    fn prompt_fails_at_end_of_input() {
        let mut input = Cursor::new("nonsense\n");
        assert!(HumanPrompt.request_move(&opening(), "a", &mut input, &mut std::io::sink()).is_err());
    }

    #[test]
    fn prompt_accepts_crlf() {
        let mut input = Cursor::new("left right\r\n");
        let text = HumanPrompt.request_move(&opening(), "a", &mut input, &mut std::io::sink()).unwrap();
        assert_eq!(text, "left right");
    }

    #[test]
    fn search_source_finds_the_kill() {
        let g = GameState::new(Player::with_hands("a", 4, 0), Player::with_hands("b", 1, 0)).unwrap();
        let mut source = SearchDriven::new(AgentConfig::default().get_agent());
        let text = source.request_move(&g, "a", &mut std::io::empty(), &mut std::io::sink()).unwrap();
        assert_eq!(text, "left left");
        assert!(!source.is_interactive());
    }

    #[test]
    fn search_source_refuses_finished_games() {
        let g = GameState::new(Player::with_hands("a", 0, 0), Player::new("b")).unwrap();
        let mut source = SearchDriven::new(AgentConfig::default().get_agent());
        assert!(source.request_move(&g, "b", &mut std::io::empty(), &mut std::io::sink()).is_err());
    }
}
