// crates/geotz-spatial/src/store.rs

//! Store model and the physical layer (I/O, decompression, decoding).

use crate::error::{Result, SpatialError};
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Bump when the serialized layout changes incompatibly.
const FORMAT_VERSION: u16 = 1;

/// Decode limit guarding against corrupt or malicious length prefixes.
const MAX_STORE_BYTES: u64 = 256 * 1024 * 1024;

/// A vertex in degree coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f32,
    pub lon: f32,
}

/// A closed boundary ring; the last vertex connects back to the first.
pub type Ring = Vec<Point>;

/// One polygon entry: boundary rings plus the metadata fields attached
/// to the area they enclose.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Zone {
    /// Precomputed bounds over all rings: (min, max) corner points.
    bbox: (Point, Point),
    /// Even-odd ring set: outer boundaries, holes and disjoint parts are
    /// all plain rings.
    rings: Vec<Ring>,
    /// Ordered (name, value) metadata pairs, e.g. `("TimezoneId", "Berlin")`.
    fields: Vec<(String, String)>,
}

impl Zone {
    /// Builds a zone from its rings and metadata, computing the bounds.
    pub fn new(rings: Vec<Ring>, fields: Vec<(String, String)>) -> Self {
        let mut min = Point {
            lat: f32::INFINITY,
            lon: f32::INFINITY,
        };
        let mut max = Point {
            lat: f32::NEG_INFINITY,
            lon: f32::NEG_INFINITY,
        };
        for p in rings.iter().flatten() {
            min.lat = min.lat.min(p.lat);
            min.lon = min.lon.min(p.lon);
            max.lat = max.lat.max(p.lat);
            max.lon = max.lon.max(p.lon);
        }
        Zone {
            bbox: (min, max),
            rings,
            fields,
        }
    }

    pub(crate) fn bbox_contains(&self, p: Point) -> bool {
        let (min, max) = self.bbox;
        p.lat >= min.lat && p.lat <= max.lat && p.lon >= min.lon && p.lon <= max.lon
    }

    pub(crate) fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub(crate) fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// The polygon store: an immutable set of zones loaded once from a file
/// (or built in memory) and queried read-only for its whole lifetime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZoneStore {
    format_version: u16,
    /// Nominal cell size of the source data, in degrees. Informational;
    /// reported through [`ZoneStore::resolution`] and [`StoreStats`].
    resolution: f32,
    zones: Vec<Zone>,
}

/// Simple aggregate statistics for a store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoreStats {
    pub zones: usize,
    pub rings: usize,
    pub vertices: usize,
}

impl ZoneStore {
    /// Builds an in-memory store. Zone order is query precedence: the
    /// first containing zone wins.
    pub fn new(resolution: f32, zones: Vec<Zone>) -> Self {
        ZoneStore {
            format_version: FORMAT_VERSION,
            resolution,
            zones,
        }
    }

    /// Opens a store file. Fails with [`SpatialError::NotFound`] when the
    /// file is missing and with a decode error when it is malformed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = open_stream(path.as_ref())?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Reconstructs a store from its serialized bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let store: ZoneStore = bincode::DefaultOptions::new()
            .with_limit(MAX_STORE_BYTES)
            .allow_trailing_bytes()
            .deserialize(data)?;
        if store.format_version != FORMAT_VERSION {
            return Err(SpatialError::InvalidData(format!(
                "unsupported format version {} (expected {})",
                store.format_version, FORMAT_VERSION
            )));
        }
        Ok(store)
    }

    /// Serializes the store to `path`, gzip-wrapped when the `compact`
    /// feature is enabled (the same convention [`ZoneStore::open`] reads).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let writer = BufWriter::new(file);

        #[cfg(feature = "compact")]
        let mut encoder: Box<dyn Write> = Box::new(GzEncoder::new(writer, Compression::default()));
        #[cfg(not(feature = "compact"))]
        let mut encoder: Box<dyn Write> = Box::new(writer);

        bincode::DefaultOptions::new()
            .with_limit(MAX_STORE_BYTES)
            .serialize_into(&mut encoder, self)?;
        encoder.flush()?;
        Ok(())
    }

    /// Nominal resolution of the source data, in degrees.
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Aggregate statistics for the store.
    pub fn stats(&self) -> StoreStats {
        let mut rings = 0usize;
        let mut vertices = 0usize;
        for zone in &self.zones {
            rings += zone.rings.len();
            vertices += zone.rings.iter().map(Vec::len).sum::<usize>();
        }
        StoreStats {
            zones: self.zones.len(),
            rings,
            vertices,
        }
    }

    pub(crate) fn zones(&self) -> &[Zone] {
        &self.zones
    }
}

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
/// Returns a generic reader so the caller doesn't care about compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SpatialError::NotFound(format!("{}", path.display()))
        } else {
            SpatialError::Io(e)
        }
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Ok(Box::new(reader))
    }
}
