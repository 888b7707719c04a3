//! geotz-cli
//! ==========
//!
//! Command-line interface for the `geotz-core` timezone resolver.
//!
//! This crate primarily provides a binary (`geotz-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install geotz-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! geotz-cli --help
//! geotz-cli resolve 52.52 13.405
//! geotz-cli simple 54.2 5.95
//! geotz-cli stats
//! ```
//!
//! For programmatic access to the resolver and store APIs, use the
//! [`geotz-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/holg/geotz-rs>
//! - Core crate: <https://docs.rs/geotz-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
