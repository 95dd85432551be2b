/*
 *  An implementation of Chopsticks in Rust.
 */

pub mod consts;
pub mod error;
pub mod game;
pub(crate) mod hand;
pub mod notation;
pub(crate) mod player;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        consts::*,
        error::GameError,
        game::{GameState, Relabel, Signature},
        hand::Hand,
        notation::*,
        player::Player,
    };
}
