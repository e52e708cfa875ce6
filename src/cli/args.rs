use crate::services::SinkKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vcheck")]
#[command(about = "Inspect verbosity masks and exercise gated diagnostics")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file (verbosity, sink, timestamps)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Configuration preset (default, quiet, verbose, trace)
    #[arg(short = 'p', long, global = true, conflicts_with = "config")]
    pub preset: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a mask expression and show its value and levels
    Mask {
        /// Mask expression, e.g. "WARNING_S|DEBUG_1" or "0x140"
        expression: String,
    },

    /// List every named level and which ones a mask enables
    Levels {
        /// Mask to evaluate (defaults to the configured verbosity)
        #[arg(short, long)]
        mask: Option<String>,
    },

    /// Emit a message through the gated diagnostics layer
    Emit {
        /// Message text
        message: String,

        /// Level of the message
        #[arg(short, long, default_value = "INFO")]
        level: String,

        /// Active mask (defaults to the configured verbosity)
        #[arg(short, long)]
        mask: Option<String>,

        /// Caller name used as prefix
        #[arg(long, default_value = "vcheck")]
        caller: String,

        /// Omit the caller prefix
        #[arg(long)]
        plain: bool,

        /// Output destination
        #[arg(short, long)]
        sink: Option<SinkKind>,
    },

    /// Check a status code and exit non-zero unless it is OK (0)
    Check {
        /// Status code to check
        #[arg(allow_negative_numbers = true)]
        code: i32,

        /// Active mask (defaults to the configured verbosity)
        #[arg(short, long)]
        mask: Option<String>,
    },
}
