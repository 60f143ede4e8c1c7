//! Command-line interface implementation for kmenu.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for kmenu.
#[derive(Parser, Debug)]
#[command(author, version, about = "kmenu: generate Kconfig menus from board and app trees", long_about = None)]
pub struct Args {
    /// Project root containing the board and app directories
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
