mod search;
mod source;

pub use search::{Evaluation, SearchAgent, SearchReport, DRAW, LOSS, UNSET, WIN};
pub use source::{HumanPrompt, MoveSource, SearchDriven};
pub(crate) use source::read_trimmed_line;

/// How many plies the search explores before scoring a line as a draw.
pub const DEPTH_LIMIT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WhichSource {
    Human,
    Search
}

#[derive(Clone, Copy, Debug)]
pub struct AgentConfig {
    /// Children created at a depth beyond this are scored as draws without being searched.
    pub depth_limit: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig { depth_limit: DEPTH_LIMIT }
    }
}

impl AgentConfig {
    /// Gets the default search configuration.
    pub fn new() -> AgentConfig {
        AgentConfig::default()
    }

    pub fn with_depth_limit(mut self, depth_limit: usize) -> AgentConfig {
        self.depth_limit = depth_limit;
        self
    }

    /// Produces a searcher.
    pub fn get_agent(&self) -> SearchAgent {
        SearchAgent::new(*self)
    }

    /// Produces a move source of the requested kind.
    pub fn get_source(&self, which: WhichSource) -> Box<dyn MoveSource> {
        match which {
            WhichSource::Human  => Box::new(HumanPrompt),
            WhichSource::Search => Box::new(SearchDriven::new(self.get_agent()))
        }
    }
}
