//! Manual time tracker CLI library.
//!
//! This crate provides the command-line interface over the tracker
//! service in `stint-store`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
