//! Command line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::clippings::Variant;
use crate::delivery::DeliveryMethod;

#[derive(Parser, Debug)]
#[command(
    name = "remind",
    version,
    about = "Send yourself a few random highlights from your e-reader clippings",
    long_about = "Send yourself a few random highlights from your e-reader clippings.\n\n\
                  remind reads a 'My Clippings.txt' style export, picks records at random \
                  and delivers them as a short digest."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also append log output to this file
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick random highlights and deliver them as a digest
    Send(SendArgs),

    /// Print every record found in the clippings export
    List(ListArgs),

    /// Show or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Where records come from and how they are extracted.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Clippings export to read
    #[arg(short, long, value_name = "FILE")]
    pub clippings: Option<PathBuf>,

    /// Extraction variant
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Skip records missing a field instead of failing (structured variant)
    #[arg(long)]
    pub skip_malformed: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of records in the digest
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Template for structured digests (.html templates are escaped)
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Seed for a reproducible selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// How to deliver the digest
    #[arg(long, value_enum)]
    pub via: Option<DeliveryMethod>,

    /// Output file for --via file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Sender address
    #[arg(long, value_name = "ADDRESS")]
    pub from: Option<String>,

    /// Recipient address
    #[arg(long, value_name = "ADDRESS")]
    pub to: Option<String>,

    /// Subject line
    #[arg(long)]
    pub subject: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print records as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
