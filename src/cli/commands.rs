//! CLI command definitions

use crate::domain::Rating;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Terminal mood journal with weekly trends", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record how you are feeling right now
    Log {
        /// Overall mood, 1 (low) to 10 (high)
        #[arg(short, long, default_value_t = Rating::default())]
        mood: Rating,

        /// Energy level, 1 to 10
        #[arg(short, long, default_value_t = Rating::default())]
        energy: Rating,

        /// Stress level, 1 to 10
        #[arg(short, long, default_value_t = Rating::default())]
        stress: Rating,

        /// What's affecting your mood today?
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Show recent entries, newest first
    List {
        /// Number of entries to show (default: recent_limit from config)
        #[arg(short = 'n', long, conflicts_with = "all")]
        limit: Option<usize>,

        /// Show every entry
        #[arg(short, long)]
        all: bool,
    },

    /// Show average mood, total entries, best day and insight
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show daily averages for the last seven days
    Week {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the insight for your latest entries
    Insight,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
