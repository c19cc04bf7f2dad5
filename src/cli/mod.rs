//! Command-line interface for tempo-run.
//!
//! The CLI plays the part of the UI collaborator: it feeds queries to the
//! catalog client and drives the favorites store from terminal input.

mod commands;

pub use commands::{Cli, run_command};
