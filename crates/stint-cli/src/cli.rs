//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Manual time tracker.
///
/// Name a task, start and stop a timer, and review, edit, resume or
/// export the completed entries.
#[derive(Debug, Parser)]
#[command(name = "stint", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start a timer for a task.
    Start {
        /// The task name.
        task: String,
    },

    /// Stop the running timer and record the entry.
    Stop,

    /// Stop any running timer and start one for a task.
    ///
    /// Without a task name, resumes the most recently completed entry.
    Resume {
        /// The task name. Defaults to the latest entry's task.
        task: Option<String>,
    },

    /// Show the running timer and entry counts.
    Status,

    /// List completed entries, newest first.
    Log,

    /// Show entries grouped by task with aggregate durations.
    Table,

    /// Re-render the table view once per second until Ctrl-C.
    Watch,

    /// Rename a completed entry.
    Edit {
        /// The entry id (as shown by `stint log`).
        id: i64,

        /// The new task name.
        task: String,
    },

    /// Delete a completed entry.
    Delete {
        /// The entry id (as shown by `stint log`).
        id: i64,
    },

    /// Export completed entries as CSV.
    Export {
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List task-name suggestions, optionally filtered.
    Suggest {
        /// Case-insensitive substring to match against names.
        pattern: Option<String>,
    },

    /// Toggle the dark-mode preference.
    Theme,
}
