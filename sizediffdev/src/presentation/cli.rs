use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "sizediff demo CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report every file as it leaves the optimizer
    Single {
        #[arg(long, default_value = "Images")]
        title: String,

        /// zstd compression level for the optimizer stage
        #[arg(long, default_value_t = 3)]
        level: i32,
    },

    /// One aggregate report for the whole stream
    Aggregate {
        #[arg(long, default_value = "CSS")]
        title: String,

        #[arg(long, default_value_t = 3)]
        level: i32,
    },

    /// Aggregate report through a custom output callback
    Custom {
        #[arg(long, default_value = "API Report")]
        title: String,

        #[arg(long, default_value_t = 3)]
        level: i32,
    },
}
