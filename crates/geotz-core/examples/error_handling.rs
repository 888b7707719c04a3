//! Error handling example for geotz-rs
//!
//! This example demonstrates proper error handling and edge cases

use geotz_core::{
    GeoTzError, Point, TimeZoneResolver, Zone, ZoneStore, COARSE_RESOLUTION_DEG,
    FINE_RESOLUTION_DEG,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== GeoTZ-RS Error Handling Example ===\n");

    // Example 1: Opening stores that do not exist
    println!("--- Example 1: Opening missing store files ---");
    match TimeZoneResolver::open("no-such-coarse.bin", "no-such-fine.bin") {
        Ok(_) => println!("✓ Resolver opened"),
        Err(GeoTzError::OpenDatabase { role, source }) => {
            println!("✗ Could not open the {role} store: {source}");
        }
    }
    println!();

    // Example 2: The error names the store that failed
    println!("--- Example 2: Which store failed? ---");
    let dir = tempfile::tempdir()?;
    let coarse_path = dir.path().join(geotz_core::COARSE_FILE_NAME);
    let fine_path = dir.path().join(geotz_core::FINE_FILE_NAME);

    ZoneStore::new(COARSE_RESOLUTION_DEG, vec![]).save_as(&coarse_path)?;
    match TimeZoneResolver::open(&coarse_path, &fine_path) {
        Ok(_) => println!("✓ Resolver opened"),
        Err(GeoTzError::OpenDatabase { role, .. }) => {
            println!("✗ The {role} store is the one missing");
        }
    }
    println!();

    // Example 3: Queries never fail, they decline
    println!("--- Example 3: Queries with no answer ---");
    ZoneStore::new(FINE_RESOLUTION_DEG, vec![]).save_as(&fine_path)?;
    let resolver = TimeZoneResolver::open_dir(dir.path())?;
    for (lat, lon) in [(0.0, -40.0), (48.1, 11.5), (90.0, 0.0)] {
        match resolver.lookup(lat, lon) {
            Some(result) => println!("  ({lat}, {lon}) -> {}", result.timezone),
            None => println!("  ({lat}, {lon}) -> no result"),
        }
    }
    println!();

    // Example 4: Zones without timezone fields resolve to nothing
    println!("--- Example 4: Incomplete zone metadata ---");
    let unnamed = Zone::new(
        vec![vec![
            Point { lat: 0.0, lon: 0.0 },
            Point {
                lat: 0.0,
                lon: 10.0,
            },
            Point {
                lat: 10.0,
                lon: 10.0,
            },
            Point {
                lat: 10.0,
                lon: 0.0,
            },
        ]],
        vec![("CountryName".into(), "Atlantis".into())],
    );
    let resolver = TimeZoneResolver::from_sources(
        ZoneStore::new(COARSE_RESOLUTION_DEG, vec![unnamed]),
        ZoneStore::new(FINE_RESOLUTION_DEG, vec![]),
    );
    match resolver.lookup(5.0, 5.0) {
        Some(result) => println!("  Found: {}", result.timezone),
        None => println!("  Zone matched but carries no timezone fields"),
    }

    Ok(())
}
