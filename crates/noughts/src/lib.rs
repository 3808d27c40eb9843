//! Noughts - terminal tic-tac-toe against scripted bots.
//!
//! The binary is the presentation layer around [`noughts_core`]: it parses
//! the command line, loads configuration, renders the match in a terminal
//! and runs the pacing timers the controller asks for.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod simulate;
mod tui;

pub use cli::{Cli, Command};
pub use config::AppConfig;
pub use logging::{init_file_tracing, init_stderr_tracing};
pub use simulate::{Summary, simulate};
pub use tui::{App, PlayOptions, run_tui, scoreboard_names};
