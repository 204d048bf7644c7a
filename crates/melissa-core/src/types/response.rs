use super::{split_codes, Record};
use crate::codes::TRANSMISSION_CODES;
use serde::{Deserialize, Serialize};

/// Response envelope from the GlobalAddress service
///
/// Every scalar is string-encoded on the wire. `records.len()` should match
/// [`total_records`](Self::total_records) but nothing enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Response {
    /// Verified records, in request order
    pub records: Vec<Record>,

    /// Number of records, as a decimal string
    pub total_records: String,

    /// Echo of the caller's `t` parameter
    pub transmission_reference: String,

    /// Comma-joined transmission codes, empty when the request was accepted
    pub transmission_results: String,

    /// Service version
    pub version: String,
}

impl Response {
    /// Parse `TotalRecords`, if it is a valid count
    #[must_use]
    pub fn total_records_count(&self) -> Option<usize> {
        self.total_records.trim().parse().ok()
    }

    /// Returns true if `TotalRecords` parses and matches the number of records
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.total_records_count() == Some(self.records.len())
    }

    /// Individual transmission codes
    pub fn transmission_codes(&self) -> impl Iterator<Item = &str> {
        split_codes(&self.transmission_results)
    }

    /// Transmission codes paired with their description, `None` for unknown codes
    #[must_use]
    pub fn transmission_errors(&self) -> Vec<(&str, Option<&'static str>)> {
        self.transmission_codes()
            .map(|code| (code, TRANSMISSION_CODES.get(code)))
            .collect()
    }

    /// Returns true if the service reported no transmission codes
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.transmission_codes().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_body() {
        let body = r#"{"Records":[{"PostalCode":"90210"}],"TotalRecords":"1","Version":"3"}"#;
        let response: Response = serde_json::from_str(body).unwrap();

        assert_eq!(response.records.len(), 1);
        assert_eq!(response.records[0].postal_code, "90210");
        assert_eq!(response.total_records, "1");
        assert_eq!(response.version, "3");
        assert!(response.transmission_reference.is_empty());
        assert!(response.is_consistent());
        assert!(response.is_accepted());
    }

    #[test]
    fn count_mismatch_is_reported_not_rejected() {
        let body = r#"{"Records":[],"TotalRecords":"2"}"#;
        let response: Response = serde_json::from_str(body).unwrap();

        assert_eq!(response.total_records_count(), Some(2));
        assert!(!response.is_consistent());
    }

    #[test]
    fn unparseable_total() {
        let response = Response {
            total_records: "n/a".into(),
            ..Response::default()
        };
        assert_eq!(response.total_records_count(), None);
        assert!(!response.is_consistent());
    }

    #[test]
    fn transmission_codes_split_and_describe() {
        let response = Response {
            transmission_results: "GE05, XX99,".into(),
            ..Response::default()
        };

        assert_eq!(response.transmission_codes().collect::<Vec<_>>(), ["GE05", "XX99"]);
        assert_eq!(
            response.transmission_errors(),
            vec![("GE05", Some("invalid CustomerID")), ("XX99", None)]
        );
        assert!(!response.is_accepted());
    }

    #[test]
    fn wrong_shape_is_an_error() {
        let body = r#"{"Records":"none"}"#;
        assert!(serde_json::from_str::<Response>(body).is_err());
    }
}
