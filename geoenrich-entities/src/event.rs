use std::fmt;

/// Identifier of an event as issued by the events listing.
///
/// Listings use either numeric or textual identifiers and
/// the original representation is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventId {
    Number(i64),
    Text(String),
    /// Any other identifier in its JSON notation
    Other(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) | Self::Other(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EventId {
    fn from(from: i64) -> Self {
        Self::Number(from)
    }
}

impl From<&str> for EventId {
    fn from(from: &str) -> Self {
        Self::Text(from.to_owned())
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id               : EventId,
    pub title            : String,
    pub location_address : Option<String>,
    pub area_address     : Option<String>,
}

impl Event {
    /// The address used for geocoding.
    ///
    /// The address of the location takes precedence over the
    /// address of the area. An empty location address is kept
    /// as is and does not fall back to the area.
    pub fn address(&self) -> &str {
        self.location_address
            .as_deref()
            .or(self.area_address.as_deref())
            .unwrap_or_default()
    }
}

/// Returns `true` if the address contains nothing but whitespace.
pub fn is_blank(address: &str) -> bool {
    address.trim().is_empty()
}
