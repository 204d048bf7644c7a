use crate::error::MelissaError;

/// Name of the query parameter that carries the license key
pub const KEY_PARAM: &str = "id";

/// One of the eight free-form address lines the service accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressLine {
    Line1,
    Line2,
    Line3,
    Line4,
    Line5,
    Line6,
    Line7,
    Line8,
}

impl AddressLine {
    /// All lines, in order
    pub const ALL: [Self; 8] = [
        Self::Line1,
        Self::Line2,
        Self::Line3,
        Self::Line4,
        Self::Line5,
        Self::Line6,
        Self::Line7,
        Self::Line8,
    ];

    /// Query parameter name, `a1` to `a8`
    #[must_use]
    pub const fn param_name(self) -> &'static str {
        match self {
            Self::Line1 => "a1",
            Self::Line2 => "a2",
            Self::Line3 => "a3",
            Self::Line4 => "a4",
            Self::Line5 => "a5",
            Self::Line6 => "a6",
            Self::Line7 => "a7",
            Self::Line8 => "a8",
        }
    }
}

impl TryFrom<u8> for AddressLine {
    type Error = MelissaError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        n.checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)).copied())
            .ok_or_else(|| {
                MelissaError::InvalidQuery(format!("address line {n} is not in 1..=8"))
            })
    }
}

/// Query parameters for a GlobalAddress lookup
///
/// Parameters are sent in insertion order. Parameter names follow the
/// service's API; the setters below cover the common ones and
/// [`param`](Self::param) accepts anything else. The key parameter
/// ([`KEY_PARAM`]) is owned by the client and is dropped here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressQuery {
    params: Vec<(String, String)>,
}

impl AddressQuery {
    /// Create an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary parameter
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Add a parameter in place
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !name.eq_ignore_ascii_case(KEY_PARAM) {
            self.params.push((name, value.into()));
        }
    }

    /// Free-form address line, sent as `a1` to `a8`
    #[must_use]
    pub fn address_line(self, line: AddressLine, value: impl Into<String>) -> Self {
        self.param(line.param_name(), value)
    }

    /// City or town
    #[must_use]
    pub fn locality(self, value: impl Into<String>) -> Self {
        self.param("loc", value)
    }

    /// State, province or equivalent
    #[must_use]
    pub fn administrative_area(self, value: impl Into<String>) -> Self {
        self.param("admarea", value)
    }

    /// Sub-administrative area, such as a county
    #[must_use]
    pub fn sub_administrative_area(self, value: impl Into<String>) -> Self {
        self.param("subadmarea", value)
    }

    #[must_use]
    pub fn sub_national_area(self, value: impl Into<String>) -> Self {
        self.param("subnatarea", value)
    }

    #[must_use]
    pub fn dependent_locality(self, value: impl Into<String>) -> Self {
        self.param("deploc", value)
    }

    #[must_use]
    pub fn double_dependent_locality(self, value: impl Into<String>) -> Self {
        self.param("ddeploc", value)
    }

    /// Postal or ZIP code
    #[must_use]
    pub fn postal_code(self, value: impl Into<String>) -> Self {
        self.param("postal", value)
    }

    /// Country name or ISO code
    #[must_use]
    pub fn country(self, value: impl Into<String>) -> Self {
        self.param("ctry", value)
    }

    #[must_use]
    pub fn organization(self, value: impl Into<String>) -> Self {
        self.param("org", value)
    }

    /// Last line (locality, area and postal code in one field)
    #[must_use]
    pub fn last_line(self, value: impl Into<String>) -> Self {
        self.param("last", value)
    }

    /// Caller reference, echoed back as `TransmissionReference`
    #[must_use]
    pub fn transmission_reference(self, value: impl Into<String>) -> Self {
        self.param("t", value)
    }

    /// Service options, e.g. `DeliveryLines:ON`
    #[must_use]
    pub fn options(self, value: impl Into<String>) -> Self {
        self.param("opt", value)
    }

    /// Value of the first parameter with this name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if no parameters were set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AddressQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (name, value) in iter {
            query.push(name, value);
        }
        query
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for AddressQuery {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.push(name, value);
        }
    }
}
