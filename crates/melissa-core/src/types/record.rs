use super::split_codes;
use crate::codes::{address_codes_for, GEO_CODES, RESULT_CODES};
use serde::{Deserialize, Serialize};

/// One verified address from a GlobalAddress response
///
/// The service always sends every field, so each one is a plain `String`.
/// An empty string means the service had no value; there is no separate
/// "missing" state. Fields absent from the JSON also decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Record {
    pub address_key: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: String,
    pub address_line4: String,
    pub address_line5: String,
    pub address_line6: String,
    pub address_line7: String,
    pub address_line8: String,

    /// Region-specific address type code, see
    /// [`address_type_description`](Self::address_type_description)
    pub address_type: String,
    pub administrative_area: String,
    pub building: String,

    #[serde(rename = "CountryISO3166_1_Alpha2")]
    pub country_iso3166_1_alpha2: String,
    #[serde(rename = "CountryISO3166_1_Alpha3")]
    pub country_iso3166_1_alpha3: String,
    #[serde(rename = "CountryISO3166_1_Numeric")]
    pub country_iso3166_1_numeric: String,
    pub country_name: String,

    pub dependent_locality: String,
    pub dependent_thoroughfare: String,
    pub dependent_thoroughfare_leading_type: String,
    pub dependent_thoroughfare_name: String,
    pub dependent_thoroughfare_post_direction: String,
    pub dependent_thoroughfare_pre_direction: String,
    pub dependent_thoroughfare_trailing_type: String,
    pub double_dependent_locality: String,
    pub formatted_address: String,

    /// Decimal degrees, string-encoded
    pub latitude: String,
    pub locality: String,
    /// Decimal degrees, string-encoded
    pub longitude: String,

    pub organization: String,
    pub post_box: String,
    pub postal_code: String,
    pub premises_number: String,
    pub premises_type: String,

    #[serde(rename = "RecordID")]
    pub record_id: String,

    /// Comma-joined result codes (`AE`, `AC`, `GS`, `GE`)
    pub results: String,

    pub sub_administrative_area: String,
    pub sub_national_area: String,
    pub sub_premises: String,
    pub sub_premises_number: String,
    pub sub_premises_type: String,
    pub thoroughfare: String,
    pub thoroughfare_leading_type: String,
    pub thoroughfare_name: String,
    pub thoroughfare_post_direction: String,
    pub thoroughfare_pre_direction: String,
    pub thoroughfare_trailing_type: String,
}

impl Record {
    /// Individual result codes
    pub fn result_codes(&self) -> impl Iterator<Item = &str> {
        split_codes(&self.results)
    }

    /// Result codes paired with their description
    ///
    /// Geocode status codes share the `Results` field, so a code missing
    /// from the result table is looked up in the geocode table.
    #[must_use]
    pub fn result_descriptions(&self) -> Vec<(&str, Option<&'static str>)> {
        self.result_codes()
            .map(|code| (code, RESULT_CODES.get(code).or_else(|| GEO_CODES.get(code))))
            .collect()
    }

    /// Returns true if any `AE` (error) code was reported
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.result_codes().any(|code| code.starts_with("AE"))
    }

    /// Non-empty address lines, in order
    pub fn address_lines(&self) -> impl Iterator<Item = &str> {
        [
            &self.address_line1,
            &self.address_line2,
            &self.address_line3,
            &self.address_line4,
            &self.address_line5,
            &self.address_line6,
            &self.address_line7,
            &self.address_line8,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|line| !line.is_empty())
    }

    /// Returns the coordinates as a tuple if both parse
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.trim().parse().ok()?;
        let lon = self.longitude.trim().parse().ok()?;
        Some((lat, lon))
    }

    /// Description of `AddressType`, using the table for the record's country
    ///
    /// Only US and Canadian records carry address type codes.
    #[must_use]
    pub fn address_type_description(&self) -> Option<&'static str> {
        address_codes_for(&self.country_iso3166_1_alpha2)?.get(&self.address_type)
    }
}
