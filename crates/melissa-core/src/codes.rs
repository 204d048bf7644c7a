//! Code tables for interpreting GlobalAddress response fields.
//!
//! Every table is a `const` slice, so lookups never allocate and the data
//! cannot change at runtime. An unknown code yields `None`.

/// Fixed mapping from a short service code to its description
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl CodeTable {
    /// Create a table from static entries
    #[must_use]
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Table name, used in diagnostics
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the description for a code
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, description)| *description)
    }

    /// Returns true if the code is present
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Number of codes in the table
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no codes
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(code, description)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.entries.iter().copied()
    }
}

/// Transmission codes: whether the request as a whole was processed
pub const TRANSMISSION_CODES: CodeTable = CodeTable::new(
    "transmission",
    &[
        ("SE01", "Internal Server Error"),
        ("GE01", "empty request structure"),
        ("GE02", "empty request record structure"),
        ("GE03", "records per request exceeded"),
        ("GE04", "empty CustomerID"),
        ("GE05", "invalid CustomerID"),
        ("GE06", "disabled CustomerID"),
        ("GE07", "Bad Request"),
        ("GE08", "invalid CustomerID for product"),
    ],
);

/// Result codes: per-record verification errors (`AE`) and changes (`AC`)
pub const RESULT_CODES: CodeTable = CodeTable::new(
    "result",
    &[
        ("AE01", "No Verification"),
        ("AE02", "Unknown Street"),
        ("AE03", "Component Error"),
        ("AE05", "Multiple Matches"),
        ("AE08", "SubPremises Number Invalid"),
        ("AE09", "SubPremises Number Missing"),
        ("AE10", "Premises Number Invalid"),
        ("AE11", "Premises Number Missing"),
        // Spelling matches the service documentation.
        ("AE12", "PO Box Number Invlalid"),
        ("AE13", "PO Box Number Missing"),
        ("AE14", "Private Mail Box Missing"),
        ("AE17", "SubPremises Not Required"),
        ("AC01", "PostalCode"),
        ("AC02", "Administrative Area"),
        ("AC03", "Locality"),
        ("AC09", "Dependent Locality"),
        ("AC10", "Thoroughfare Name"),
        ("AC11", "Thoroughfare Type"),
        ("AC12", "Thoroughfare Direction"),
        ("AC13", "SubPremises Type"),
        ("AC14", "SubPremises Number"),
        ("AC15", "DoubleDependent Locality"),
        ("AC16", "SubAdministrative Area"),
        ("AC17", "SubNational Area"),
    ],
);

/// Geocode codes: precision of the returned coordinates
pub const GEO_CODES: CodeTable = CodeTable::new(
    "geo",
    &[
        ("GS01", "Geocoded to ZIP+4 (U.S.) or 6-digit Postal Code (Canada) Centroid"),
        ("GS02", "Geocoded to ZIP+2 Centroid"),
        ("GS03", "Geocoded to 5-digit (U.S.) or 3-digit (Canada) ZIP Code Centroid"),
        ("GS05", "Geocoded to 11-digit Rooftop level"),
        ("GS06", "Geocoded to 11-digit Interpolated Rooftop level"),
        ("GE01", "Invalid ZIP Code entered"),
        ("GE02", "Zip Code not found"),
    ],
);

/// Address type codes for United States records
pub const ADDRESS_CODES_US: CodeTable = CodeTable::new(
    "address (US)",
    &[
        ("A", "Alias"),
        ("F", "Firm or Company"),
        ("G", "General Delivery"),
        ("H", "Highrise or Business Complex"),
        ("P", "PO Box"),
        ("R", "Rural Route"),
        ("S", "Street of Residential"),
    ],
);

/// Address type codes for Canadian records
pub const ADDRESS_CODES_CA: CodeTable = CodeTable::new(
    "address (CA)",
    &[
        ("1", "Street"),
        ("2", "Street Served by Route and GD"),
        ("3", "Lock Box"),
        ("4", "Route Service"),
        ("5", "General Delivery"),
        ("B", "LVR Street"),
        ("C", "Government Street"),
        ("D", "LVR Lock Box"),
        ("E", "Government Lock Box"),
        ("L", "LVR General Delivery"),
        ("K", "Building"),
    ],
);

/// Address table for an ISO 3166-1 alpha-2 country, if the service defines one
#[must_use]
pub fn address_codes_for(country_alpha2: &str) -> Option<CodeTable> {
    match country_alpha2.trim().to_ascii_uppercase().as_str() {
        "US" => Some(ADDRESS_CODES_US),
        "CA" => Some(ADDRESS_CODES_CA),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_table(table: CodeTable, expected: &[(&str, &str)]) {
        assert_eq!(table.len(), expected.len(), "{} table size", table.name());
        for (code, description) in expected {
            assert_eq!(table.get(code), Some(*description), "{} {code}", table.name());
        }
    }

    #[test]
    fn transmission_codes_exact() {
        assert_table(
            TRANSMISSION_CODES,
            &[
                ("SE01", "Internal Server Error"),
                ("GE01", "empty request structure"),
                ("GE02", "empty request record structure"),
                ("GE03", "records per request exceeded"),
                ("GE04", "empty CustomerID"),
                ("GE05", "invalid CustomerID"),
                ("GE06", "disabled CustomerID"),
                ("GE07", "Bad Request"),
                ("GE08", "invalid CustomerID for product"),
            ],
        );
    }

    #[test]
    fn result_codes_exact() {
        assert_table(
            RESULT_CODES,
            &[
                ("AE01", "No Verification"),
                ("AE02", "Unknown Street"),
                ("AE03", "Component Error"),
                ("AE05", "Multiple Matches"),
                ("AE08", "SubPremises Number Invalid"),
                ("AE09", "SubPremises Number Missing"),
                ("AE10", "Premises Number Invalid"),
                ("AE11", "Premises Number Missing"),
                ("AE12", "PO Box Number Invlalid"),
                ("AE13", "PO Box Number Missing"),
                ("AE14", "Private Mail Box Missing"),
                ("AE17", "SubPremises Not Required"),
                ("AC01", "PostalCode"),
                ("AC02", "Administrative Area"),
                ("AC03", "Locality"),
                ("AC09", "Dependent Locality"),
                ("AC10", "Thoroughfare Name"),
                ("AC11", "Thoroughfare Type"),
                ("AC12", "Thoroughfare Direction"),
                ("AC13", "SubPremises Type"),
                ("AC14", "SubPremises Number"),
                ("AC15", "DoubleDependent Locality"),
                ("AC16", "SubAdministrative Area"),
                ("AC17", "SubNational Area"),
            ],
        );
    }

    #[test]
    fn geo_codes_exact() {
        assert_table(
            GEO_CODES,
            &[
                ("GS01", "Geocoded to ZIP+4 (U.S.) or 6-digit Postal Code (Canada) Centroid"),
                ("GS02", "Geocoded to ZIP+2 Centroid"),
                ("GS03", "Geocoded to 5-digit (U.S.) or 3-digit (Canada) ZIP Code Centroid"),
                ("GS05", "Geocoded to 11-digit Rooftop level"),
                ("GS06", "Geocoded to 11-digit Interpolated Rooftop level"),
                ("GE01", "Invalid ZIP Code entered"),
                ("GE02", "Zip Code not found"),
            ],
        );
    }

    #[test]
    fn address_codes_exact() {
        assert_table(
            ADDRESS_CODES_US,
            &[
                ("A", "Alias"),
                ("F", "Firm or Company"),
                ("G", "General Delivery"),
                ("H", "Highrise or Business Complex"),
                ("P", "PO Box"),
                ("R", "Rural Route"),
                ("S", "Street of Residential"),
            ],
        );
        assert_table(
            ADDRESS_CODES_CA,
            &[
                ("1", "Street"),
                ("2", "Street Served by Route and GD"),
                ("3", "Lock Box"),
                ("4", "Route Service"),
                ("5", "General Delivery"),
                ("B", "LVR Street"),
                ("C", "Government Street"),
                ("D", "LVR Lock Box"),
                ("E", "Government Lock Box"),
                ("L", "LVR General Delivery"),
                ("K", "Building"),
            ],
        );
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(RESULT_CODES.get("AE04"), None);
        assert_eq!(GEO_CODES.get("GS04"), None);
        assert_eq!(ADDRESS_CODES_US.get(""), None);
        assert!(!TRANSMISSION_CODES.contains("ae01"));
    }

    #[test]
    fn codes_are_unique_per_table() {
        for table in [
            TRANSMISSION_CODES,
            RESULT_CODES,
            GEO_CODES,
            ADDRESS_CODES_US,
            ADDRESS_CODES_CA,
        ] {
            let unique: HashSet<_> = table.iter().map(|(code, _)| code).collect();
            assert_eq!(unique.len(), table.len(), "duplicate code in {}", table.name());
            assert!(!table.is_empty());
        }
    }

    #[test]
    fn same_code_differs_between_tables() {
        assert_eq!(TRANSMISSION_CODES.get("GE01"), Some("empty request structure"));
        assert_eq!(GEO_CODES.get("GE01"), Some("Invalid ZIP Code entered"));
    }

    #[test]
    fn address_table_by_country() {
        assert_eq!(address_codes_for("US").map(|t| t.name()), Some("address (US)"));
        assert_eq!(address_codes_for(" ca ").map(|t| t.name()), Some("address (CA)"));
        assert!(address_codes_for("DE").is_none());
    }
}
