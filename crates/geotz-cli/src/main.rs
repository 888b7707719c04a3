//! geotz-cli — Command-line interface for geotz-core
//!
//! This binary resolves latitude/longitude pairs to IANA timezone
//! identifiers from your terminal, using the same offline stores the
//! library works with. It supports a full lookup with country metadata,
//! the harder-trying `simple` resolution, and store statistics.
//!
//! Usage examples
//! --------------
//!
//! - Resolve a coordinate
//!   $ geotz-cli resolve 52.52 13.405
//!   $ geotz-cli resolve 52.52 13.405 --json
//!
//! - Resolve with overrides and nearby probing
//!   $ geotz-cli simple 54.2 5.95
//!
//! - Show store statistics
//!   $ geotz-cli stats
//!
//! Data source
//! -----------
//!
//! By default, the CLI opens `timezone16.bin` (coarse) and
//! `timezone21.bin` (fine) inside the directory given by
//! `--data-dir` (default: `data`). Use `--coarse <path>` and
//! `--fine <path>` to point at individually placed store files.
//!
//! See also: the repository README for more details and examples.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use geotz_core::TimeZoneResolver;
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Determine store paths (conventional names inside the data dir
    // unless overridden individually)
    let data_dir = Path::new(&args.data_dir);
    let coarse_path: PathBuf = match &args.coarse {
        Some(path) => PathBuf::from(path),
        None => data_dir.join(geotz_core::COARSE_FILE_NAME),
    };
    let fine_path: PathBuf = match &args.fine {
        Some(path) => PathBuf::from(path),
        None => data_dir.join(geotz_core::FINE_FILE_NAME),
    };

    let resolver = TimeZoneResolver::open(&coarse_path, &fine_path)?;

    match args.command {
        Commands::Resolve { lat, lon, json } => match resolver.lookup(lat, lon) {
            Some(result) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    println!("Timezone: {}", result.timezone);
                    if let Some(name) = &result.country_name {
                        println!("Country: {name}");
                    }
                    if let Some(alpha2) = &result.country_alpha2 {
                        println!("Alpha2: {alpha2}");
                    }
                }
            }
            None => {
                eprintln!("No timezone found for: {lat} {lon}");
            }
        },

        Commands::Simple { lat, lon } => match resolver.simple(lat, lon) {
            Some(timezone) => println!("{timezone}"),
            None => eprintln!("No timezone found for: {lat} {lon}"),
        },

        Commands::Stats => {
            let coarse = resolver.coarse_stats();
            let fine = resolver.fine_stats();
            println!("Coarse store ({}):", coarse_path.display());
            println!("  Zones: {}", coarse.zones);
            println!("  Rings: {}", coarse.rings);
            println!("  Vertices: {}", coarse.vertices);
            println!("Fine store ({}):", fine_path.display());
            println!("  Zones: {}", fine.zones);
            println!("  Rings: {}", fine.rings);
            println!("  Vertices: {}", fine.vertices);
        }
    }

    Ok(())
}
