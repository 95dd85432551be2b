pub mod agent;
pub mod chopsticks;
pub mod driver;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::collections::{BTreeSet, HashSet};
    }
}

pub mod prelude {
    pub use super::agent::*;
    pub use super::chopsticks::prelude::*;
    pub use super::driver::*;
    pub use super::utils::prelude::*;
}
