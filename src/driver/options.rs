use clap::{Parser, ValueEnum};
use crate::prelude::*;

/// Which seats the engine plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Seating {
    First,
    Second,
    Both,
    Neither,
}

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Play Chopsticks against a minimax engine")]
pub struct DriverOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Name of the player who moves first; asked for when absent.
    #[arg(long)]
    pub first: Option<String>,

    /// Name of the player who moves second; asked for when absent.
    #[arg(long)]
    pub second: Option<String>,

    #[arg(long, value_enum, default_value_t = Seating::First)]
    pub ai: Seating,

    #[arg(short, long, default_value_t = DEPTH_LIMIT)]
    pub depth_limit: usize,

    /// Stops the match after this many moves without declaring a winner.
    #[arg(long)]
    pub max_turns: Option<usize>,
}

impl DriverOptions {
    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig::default().with_depth_limit(self.depth_limit)
    }

    /// The kind of move source seated in each slot.
    pub fn sources(&self) -> [WhichSource; 2] {
        let [first, second] = match self.ai {
            Seating::First   => [true, false],
            Seating::Second  => [false, true],
            Seating::Both    => [true, true],
            Seating::Neither => [false, false]
        };
        [first, second].map(|engine| if engine { WhichSource::Search } else { WhichSource::Human })
    }
}
