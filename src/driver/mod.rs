mod options;

use std::io::{BufRead, Write};

pub use options::{DriverOptions, Seating};

use crate::{agent::read_trimmed_line, prelude::*};

const RULE_VIOLATION: &str = "Move cannot be made according to the game rules.";

/// How a match ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(String),
    Unfinished,
}

/// Runs a match at a text console, asking each seat's move source for moves in turn.
pub struct Driver<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: DriverOptions,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(options: DriverOptions, input: R, output: W) -> Driver<R, W> {
        Driver { input, output, config: options }
    }

    /// Seats the players and plays until someone wins.
    pub fn run(&mut self) -> Result<Outcome> {
        let [first, second] = self.names()?;
        let agent_config = self.config.agent_config();
        let mut seats = self.config.sources().map(|which| agent_config.get_source(which));
        let mut game = GameState::new(Player::new(first), Player::new(second))?;

        log::info!("{} vs {}, engine at depth {}", game.player1().name(), game.player2().name(), agent_config.depth_limit);
        self.play(&mut game, &mut seats)
    }

    /// Plays `game` to completion from its current position, player one first.
    pub fn play(&mut self, game: &mut GameState, seats: &mut [Box<dyn MoveSource>; 2]) -> Result<Outcome> {
        let [mut attacker, mut defender] = [0, 1];
        let mut turns = 0;

        while game.player1().is_alive() && game.player2().is_alive() {
            if self.config.max_turns.is_some_and(|limit| turns >= limit) {
                writeln!(self.output, "Stopped after {turns} turns without a winner.")?;
                return Ok(Outcome::Unfinished);
            }

            let name = game.names()[attacker].to_owned();
            writeln!(self.output, "** {name}'s turn. **")?;
            writeln!(self.output, "{game}")?;

            loop {
                let text = seats[attacker].request_move(game, &name, &mut self.input, &mut self.output)?;
                match game.play(&name, &text) {
                    Ok(_) => break,
                    Err(err) if seats[attacker].is_interactive() && GameError::classify(&err).is_some_and(GameError::is_recoverable) => {
                        log::warn!("encountered recoverable error:\n{err}");
                        writeln!(self.output, "{RULE_VIOLATION}")?;
                    },
                    Err(err) => return Err(err)
                }
            }

            [attacker, defender] = [defender, attacker];
            turns += 1;
        }

        let Some(winner) = game.get_winner().map(str::to_owned) else {
            return Err(GameError::InternalInvariantViolation {
                reason: format!("the match ended without a winner at {}", game.compress())
            }.into());
        };
        writeln!(self.output, "{winner} is victorious!")?;
        log::info!("{winner} won after {turns} turns");
        Ok(Outcome::Winner(winner))
    }

    /// Hands back the console output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Takes names from the options, asking for any that are missing, until they differ.
    fn names(&mut self) -> Result<[String; 2]> {
        let given = [self.config.first.clone(), self.config.second.clone()];
        loop {
            let first = match &given[0] {
                Some(name) => name.clone(),
                None       => self.ask("Enter first player name: ")?
            };
            let second = match &given[1] {
                Some(name) => name.clone(),
                None       => self.ask("Enter second player name: ")?
            };
            if first != second {
                return Ok([first, second]);
            }
            if given.iter().all(Option::is_some) {
                return Err(GameError::InvalidArgument { reason: format!("both players are named {first}") }.into());
            }
            writeln!(self.output, "Try again. Names must be distinct.")?;
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        read_trimmed_line(&mut self.input)?.ok_or(anyhow!("input closed while reading a name"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::*;

    fn driver(args: &[&str], input: &str) -> Driver<Cursor<String>, Vec<u8>> {
        let options = DriverOptions::parse_from(std::iter::once("chopsticks").chain(args.iter().copied()));
        Driver::new(options, Cursor::new(input.to_owned()), Vec::new())
    }

    fn printed(d: Driver<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(d.into_output()).unwrap()
    }

    #[test]
    fn two_humans_play_to_a_win() {
        let moves = ["ann", "bob", "left left", "left left", "left left", "right left", "left right"];
        let mut d = driver(&["--ai", "neither"], &moves.join("\n"));
        assert_eq!(d.run().unwrap(), Outcome::Winner("ann".into()));

        let out = printed(d);
        assert!(out.contains("** ann's turn. **\nann: 1 1\nbob: 1 1"));
        assert!(out.contains("** bob's turn. **\nann: 1 1\nbob: 2 1"));
        assert!(out.ends_with("ann is victorious!\n"));
    }

    #[test]
    fn bad_moves_are_asked_for_again() {
        let moves = [
            "left left", "left left",
            "bogus", "left left",           // malformed
            "left left", "right left",      // bob's left hand is dead
            "left right",
        ];
        let mut d = driver(&["--ai", "neither", "--first", "ann", "--second", "bob"], &moves.join("\n"));
        assert_eq!(d.run().unwrap(), Outcome::Winner("ann".into()));

        let out = printed(d);
        assert_eq!(out.matches("Invalid input.").count(), 1);
        assert_eq!(out.matches(RULE_VIOLATION).count(), 1);
    }

    #[test]
    fn names_must_differ() {
        let mut d = driver(&["--ai", "neither"], "ann\nann\nann\nbob\n");
        assert!(d.run().is_err()); // runs out of moves once seated
        assert_eq!(printed(d).matches("Try again. Names must be distinct.").count(), 1);
    }

    #[test]
    fn identical_names_on_the_command_line_are_fatal() {
        let mut d = driver(&["--first", "ann", "--second", "ann"], "");
        let err = d.run().unwrap_err();
        assert!(matches!(GameError::classify(&err), Some(GameError::InvalidArgument { .. })));
    }

    #[test]
    fn end_of_input_is_fatal() {
        let mut d = driver(&["--ai", "neither", "--first", "ann", "--second", "bob"], "left left\n");
        assert!(d.run().is_err());
    }

    #[test]
    fn turn_limit_stops_the_match() {
        let mut d = driver(&["--ai", "both", "--first", "ann", "--second", "bob", "-d", "2", "--max-turns", "0"], "");
        assert_eq!(d.run().unwrap(), Outcome::Unfinished);
        assert!(printed(d).contains("Stopped after 0 turns"));
    }

    #[test]
    fn engines_play_each_other() {
        let mut d = driver(&["--ai", "both", "--first", "ann", "--second", "bob", "-d", "3", "--max-turns", "8"], "");
        let outcome = d.run().unwrap();
        let out = printed(d);
        assert!(out.contains("** ann's turn. **"));
        assert!(out.contains("** bob's turn. **"));
        match outcome {
            Outcome::Winner(name) => assert!(out.ends_with(&format!("{name} is victorious!\n"))),
            Outcome::Unfinished   => assert!(out.contains("Stopped after 8 turns")),
        }
    }

    #[test]
    fn engine_answers_a_human() {
        let mut d = driver(&["--ai", "second", "--first", "ann", "--second", "bot", "-d", "2", "--max-turns", "2"], "left left\n");
        assert_eq!(d.run().unwrap(), Outcome::Unfinished);
        let out = printed(d);
        assert!(out.contains("** bot's turn. **\nann: 1 1\nbot: 2 1"));
    }
}
