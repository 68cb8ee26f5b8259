//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "Prompted daily reflection journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a new journal entry
    New {
        /// Entry kind (morning, evening)
        kind: String,

        /// Logical day for the entry, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Prompt response as key=value; repeatable.
        /// Omit to answer the prompts interactively
        #[arg(short = 'r', long = "response", value_name = "KEY=VALUE")]
        responses: Vec<String>,
    },

    /// List journal entries, newest first
    List {
        /// Only entries of this kind (morning, evening)
        #[arg(short, long)]
        kind: Option<String>,

        /// Only entries for this day, YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,

        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a single entry in full
    Show {
        /// Entry id, e.g. morning-1700000000000
        id: String,
    },

    /// Replace the responses of an existing entry
    Edit {
        /// Entry id, e.g. morning-1700000000000
        id: String,

        /// Move the entry to another day, YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,

        /// Replacement response as key=value; repeatable.
        /// The given responses replace the entry's content as a whole
        #[arg(short = 'r', long = "response", value_name = "KEY=VALUE")]
        responses: Vec<String>,
    },

    /// Delete an entry by id
    Delete {
        /// Entry id, e.g. morning-1700000000000
        id: String,
    },
}
