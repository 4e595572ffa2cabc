//! Command-line interface implementation for dsge-scaffold.
//! Provides argument parsing using clap. Every flag is optional; with no
//! flags the current directory is scaffolded with the literal layout.

use clap::Parser;
use std::path::PathBuf;

use crate::layout::DestinationLayout;
use crate::processor::ScaffoldOptions;

/// Command-line arguments structure for dsge-scaffold.
#[derive(Parser, Debug)]
#[command(author, version, about = "Seeds a template/ project tree with example files and dsge sources", long_about = None)]
pub struct Args {
    /// Directory containing examples/template and source
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Place every matched source under template/source/dsge,
    /// regardless of the platform path separator
    #[arg(short, long)]
    pub relocate: bool,

    /// Print the planned operations without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Destination layout selected by the flags.
    pub fn layout(&self) -> DestinationLayout {
        if self.relocate {
            DestinationLayout::Relocate
        } else {
            DestinationLayout::Literal
        }
    }

    pub fn scaffold_options(&self) -> ScaffoldOptions {
        ScaffoldOptions::new(&self.base_dir).with_layout(self.layout())
    }
}

/// Parses command line arguments, exiting through clap on invalid input.
pub fn get_args() -> Args {
    Args::parse()
}
