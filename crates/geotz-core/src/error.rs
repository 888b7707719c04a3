// crates/geotz-core/src/error.rs

use thiserror::Error;

/// Which of the two stores an operation was touching when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseRole {
    /// The low-resolution store queried first (cell size 0.0055 degrees).
    Coarse,
    /// The high-resolution store used for escalation (cell size 0.00017 degrees).
    Fine,
}

impl std::fmt::Display for DatabaseRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseRole::Coarse => write!(f, "coarse"),
            DatabaseRole::Fine => write!(f, "fine"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GeoTzError {
    /// One of the two store files could not be opened or decoded.
    /// `role` tells the caller which one.
    #[error("could not open {role} database: {source}")]
    OpenDatabase {
        role: DatabaseRole,
        source: geotz_spatial::SpatialError,
    },
}

pub type Result<T> = std::result::Result<T, GeoTzError>;
