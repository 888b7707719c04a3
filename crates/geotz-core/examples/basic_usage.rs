//! Basic usage example for geotz-rs
//!
//! This example demonstrates how to:
//! - Build zone stores and save them to disk
//! - Open a resolver over the store files
//! - Resolve coordinates with `lookup` and `simple`
//! - Read store statistics

use geotz_core::{
    Point, TimeZoneResolver, Zone, ZoneStore, COARSE_RESOLUTION_DEG, FINE_RESOLUTION_DEG,
};

fn square(lat0: f32, lon0: f32, lat1: f32, lon1: f32) -> Vec<Point> {
    vec![
        Point {
            lat: lat0,
            lon: lon0,
        },
        Point {
            lat: lat0,
            lon: lon1,
        },
        Point {
            lat: lat1,
            lon: lon1,
        },
        Point {
            lat: lat1,
            lon: lon0,
        },
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== GeoTZ-RS Basic Usage Example ===\n");

    // Build a toy pair of stores. Real deployments ship prebuilt files
    // covering the whole world at two resolutions.
    println!("Building zone stores...");
    let germany = Zone::new(
        vec![square(47.0, 6.0, 55.0, 15.0)],
        vec![
            ("TimezoneIdPrefix".into(), "Europe/".into()),
            ("TimezoneId".into(), "Berlin".into()),
            ("CountryName".into(), "Germany".into()),
            ("CountryAlpha2".into(), "DE".into()),
        ],
    );
    let coarse = ZoneStore::new(COARSE_RESOLUTION_DEG, vec![germany.clone()]);
    let fine = ZoneStore::new(FINE_RESOLUTION_DEG, vec![germany]);

    let dir = tempfile::tempdir()?;
    coarse.save_as(dir.path().join(geotz_core::COARSE_FILE_NAME))?;
    fine.save_as(dir.path().join(geotz_core::FINE_FILE_NAME))?;
    println!("✓ Stores written to {}\n", dir.path().display());

    // Example 1: open a resolver over the files
    println!("--- Example 1: Open the resolver ---");
    let resolver = TimeZoneResolver::open_dir(dir.path())?;
    println!("✓ Resolver ready\n");

    // Example 2: full lookup with country metadata
    println!("--- Example 2: Resolve Berlin ---");
    if let Some(result) = resolver.lookup(52.52, 13.405) {
        println!("Timezone: {}", result.timezone);
        println!("Country: {:?}", result.country_name);
        println!("Alpha2: {:?}", result.country_alpha2);
    }
    println!();

    // Example 3: a point with no zone
    println!("--- Example 3: Mid-Atlantic ---");
    match resolver.lookup(0.0, -40.0) {
        Some(result) => println!("Timezone: {}", result.timezone),
        None => println!("No zone contains this point"),
    }
    println!();

    // Example 4: `simple` tries harder near coastlines
    println!("--- Example 4: Just offshore ---");
    let offshore = (54.2, 5.95);
    println!("lookup: {:?}", resolver.lookup(offshore.0, offshore.1));
    println!("simple: {:?}", resolver.simple(offshore.0, offshore.1));
    println!();

    // Example 5: store statistics
    println!("--- Example 5: Store statistics ---");
    let stats = resolver.coarse_stats();
    println!("Coarse zones: {}", stats.zones);
    println!("Coarse rings: {}", stats.rings);
    println!("Coarse vertices: {}", stats.vertices);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
