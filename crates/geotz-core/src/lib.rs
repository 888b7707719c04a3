// crates/geotz-core/src/lib.rs

pub mod common;
pub mod error;
pub mod extract; // Field contract for custom sources
pub mod resolver; // The public entry point
pub mod source;
// Correction table and probe pattern behind `simple`
#[doc(hidden)]
pub mod overrides;
#[doc(hidden)]
pub mod spiral;

// Re-exports
pub use crate::common::LookupResult;
pub use crate::error::{DatabaseRole, GeoTzError, Result};
pub use crate::resolver::{
    TimeZoneResolver, COARSE_FILE_NAME, COARSE_RESOLUTION_DEG, FINE_FILE_NAME,
    FINE_RESOLUTION_DEG,
};
pub use crate::source::{FieldIter, SpatialHit, SpatialSource};
// Re-export the store types so callers need only one dependency
pub use geotz_spatial::{Point, QueryHit, SpatialError, StoreStats, Zone, ZoneStore};
