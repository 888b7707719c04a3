// crates/geotz-core/src/extract.rs

//! Turns a matched zone's raw metadata fields into a [`LookupResult`].

use crate::common::LookupResult;

/// Field carrying the IANA area prefix, e.g. `"Europe/"`.
pub const FIELD_TIMEZONE_PREFIX: &str = "TimezoneIdPrefix";
/// Field carrying the IANA location part, e.g. `"Berlin"`.
pub const FIELD_TIMEZONE_ID: &str = "TimezoneId";
/// Field carrying the English country name.
pub const FIELD_COUNTRY_NAME: &str = "CountryName";
/// Field carrying the ISO 3166-1 alpha-2 country code.
pub const FIELD_COUNTRY_ALPHA2: &str = "CountryAlpha2";

/// Assembles a [`LookupResult`] from ordered (name, value) pairs.
///
/// Field names are matched exactly, case-sensitively; unrecognized names
/// are skipped and a repeated name overwrites the earlier value. The
/// timezone identifier is the prefix and id concatenated, and both must
/// be present for there to be a result at all. Country fields are
/// optional on their own. Never fails, only declines.
pub fn extract<'a, I>(fields: I) -> Option<LookupResult>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut prefix = None;
    let mut id = None;
    let mut country_name = None;
    let mut country_alpha2 = None;

    for (name, value) in fields {
        match name {
            FIELD_TIMEZONE_PREFIX => prefix = Some(value),
            FIELD_TIMEZONE_ID => id = Some(value),
            FIELD_COUNTRY_NAME => country_name = Some(value),
            FIELD_COUNTRY_ALPHA2 => country_alpha2 = Some(value),
            _ => {}
        }
    }

    let (prefix, id) = (prefix?, id?);
    Some(LookupResult {
        timezone: format!("{prefix}{id}"),
        country_name: country_name.map(str::to_owned),
        country_alpha2: country_alpha2.map(str::to_owned),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_field_set() {
        let result = extract([
            ("TimezoneIdPrefix", "Europe/"),
            ("TimezoneId", "Berlin"),
            ("CountryName", "Germany"),
            ("CountryAlpha2", "DE"),
        ])
        .expect("all fields present");
        assert_eq!(result.timezone, "Europe/Berlin");
        assert_eq!(result.country_name.as_deref(), Some("Germany"));
        assert_eq!(result.country_alpha2.as_deref(), Some("DE"));
    }

    #[test]
    fn timezone_without_country_fields() {
        let result = extract([("TimezoneIdPrefix", "Etc/"), ("TimezoneId", "GMT")])
            .expect("timezone fields present");
        assert_eq!(result.timezone, "Etc/GMT");
        assert_eq!(result.country_name, None);
        assert_eq!(result.country_alpha2, None);
    }

    #[test]
    fn missing_prefix_yields_nothing() {
        assert_eq!(
            extract([("TimezoneId", "Berlin"), ("CountryName", "Germany")]),
            None
        );
    }

    #[test]
    fn missing_id_yields_nothing() {
        assert_eq!(
            extract([("TimezoneIdPrefix", "Europe/"), ("CountryAlpha2", "DE")]),
            None
        );
    }

    #[test]
    fn field_names_are_case_sensitive() {
        assert_eq!(
            extract([("timezoneidprefix", "Europe/"), ("TIMEZONEID", "Berlin")]),
            None
        );
    }

    #[test]
    fn unknown_fields_are_skipped() {
        let result = extract([
            ("Population", "3645000"),
            ("TimezoneIdPrefix", "Europe/"),
            ("TimezoneId", "Berlin"),
            ("Elevation", "34"),
        ])
        .expect("timezone fields present");
        assert_eq!(result.timezone, "Europe/Berlin");
    }

    #[test]
    fn repeated_field_keeps_the_last_value() {
        let result = extract([
            ("TimezoneIdPrefix", "Europe/"),
            ("TimezoneId", "Busingen"),
            ("TimezoneId", "Berlin"),
        ])
        .expect("timezone fields present");
        assert_eq!(result.timezone, "Europe/Berlin");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(extract(std::iter::empty()), None);
    }
}
