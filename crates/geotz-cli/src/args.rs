use clap::{Parser, Subcommand};

/// CLI arguments for geotz-cli
#[derive(Debug, Parser)]
#[command(
    name = "geotz",
    version,
    about = "CLI for resolving coordinates against offline timezone stores"
)]
pub struct CliArgs {
    /// Directory holding the conventionally named store files
    /// (timezone16.bin and timezone21.bin)
    #[arg(short = 'd', long = "data-dir", global = true, default_value = "data")]
    pub data_dir: String,

    /// Path to the coarse store file (overrides the data directory)
    #[arg(long = "coarse", global = true)]
    pub coarse: Option<String>,

    /// Path to the fine store file (overrides the data directory)
    #[arg(long = "fine", global = true)]
    pub fine: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a coordinate to a timezone with country metadata
    Resolve {
        /// Latitude in degrees (e.g. 52.52)
        lat: f32,
        /// Longitude in degrees (e.g. 13.405)
        lon: f32,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a coordinate to a bare timezone id, trying regional
    /// overrides first and probing nearby coordinates on a miss
    Simple {
        /// Latitude in degrees
        lat: f32,
        /// Longitude in degrees
        lon: f32,
    },

    /// Show a summary of both stores
    Stats,
}
