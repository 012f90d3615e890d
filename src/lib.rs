#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
mod player;
mod player_cpu;
pub mod prelude;
mod scoreboard;
mod strategy;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use player::*;
pub use player_cpu::*;
pub use scoreboard::*;
pub use strategy::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use ui::*;
