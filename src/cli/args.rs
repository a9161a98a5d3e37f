//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Slicing-floorplan processor: region dimensions and module placement
#[derive(Parser, Debug)]
#[command(name = "slicefp")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completion scripts
    #[arg(long = "generate", value_enum)]
    pub generator: Option<clap_complete::Shell>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit the postorder stream with cuts as bare symbols
    Skeleton {
        /// Floorplan input file
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Emit the postorder stream with resolved region dimensions
    Resolve {
        /// Floorplan input file
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Emit the preorder module placement stream
    Place {
        /// Floorplan input file
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write all three streams in one batch run
    Run {
        /// Floorplan input file
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// Skeleton output file
        skeleton: PathBuf,
        /// Resolved-dimensions output file
        resolved: PathBuf,
        /// Placement output file
        placement: PathBuf,
    },

    /// Show the floorplan hierarchy as a tree
    Tree {
        /// Floorplan input file
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
