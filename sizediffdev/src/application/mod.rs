pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use sizediff_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Single { title, level } => handlers::handle_single(title, level),
        Commands::Aggregate { title, level } => handlers::handle_aggregate(title, level),
        Commands::Custom { title, level } => handlers::handle_custom(title, level),
    }
}
