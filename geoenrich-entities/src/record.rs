use crate::{event::EventId, geo::Coordinate};

/// What became of the address of a single event.
#[derive(Debug, Clone, PartialEq)]
pub enum Enrichment {
    /// The address has been resolved to a position.
    Located(Coordinate),
    /// Either there was no address or it could not be resolved.
    Unlocated,
    /// The geocoding service failed for this event.
    Failed { reason: String },
}

impl Enrichment {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::Located(c) => Some(*c),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

/// An event together with the outcome of resolving its address.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub id         : EventId,
    pub title      : String,
    pub address    : String,
    pub enrichment : Enrichment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let c = Coordinate::try_from_lat_lon_deg(1.0, 2.0).unwrap();
        assert_eq!(Some(c), Enrichment::Located(c).coordinate());
        assert_eq!(None, Enrichment::Located(c).error());
        assert_eq!(None, Enrichment::Unlocated.coordinate());
        let failed = Enrichment::Failed {
            reason: "timeout".into(),
        };
        assert_eq!(Some("timeout"), failed.error());
        assert_eq!(None, failed.coordinate());
    }
}
