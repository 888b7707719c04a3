/// A resolved timezone with the optional country metadata that came
/// along with it.
///
/// Returned by [`TimeZoneResolver::lookup`]; all strings are owned
/// copies, independent of the stores they were read from.
///
/// [`TimeZoneResolver::lookup`]: crate::TimeZoneResolver::lookup
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Full IANA identifier, e.g. `"Europe/Berlin"`.
    pub timezone: String,
    /// English country name, when the matched zone carries one.
    pub country_name: Option<String>,
    /// ISO 3166-1 alpha-2 code, when the matched zone carries one.
    pub country_alpha2: Option<String>,
}
