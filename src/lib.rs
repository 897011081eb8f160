pub mod agent;
pub(crate) mod error;
pub mod game;
pub mod notation;
pub mod runner;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        error::{Error, Kind, Result},
        game::*,
        notation::*,
        runner::{GameRecord, HeuristicKind, Runner, RunnerOptions, STANDARD},
    };
}
