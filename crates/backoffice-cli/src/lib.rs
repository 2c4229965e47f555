//! # backoffice-cli
//!
//! Command-line front end for the console: one subcommand per area, each
//! driving the controllers from `backoffice-controller`.

pub mod commands;
pub mod context;
pub mod output;

pub use commands::{Cli, Commands};
pub use context::Console;
