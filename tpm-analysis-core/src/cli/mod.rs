mod check;
mod export;
mod render;
mod report;

#[cfg(test)]
mod tests;

pub use check::*;
pub use export::*;
pub use render::*;
pub use report::*;

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file
        path: Option<PathBuf>,

        /// Print errors without decoration
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },
}
