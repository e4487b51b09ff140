use crate::entities::Coordinate;
use thiserror::Error;

/// The successful outcome of a geocoding request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geocoded {
    Resolved(Coordinate),
    /// The service answered but did not know the address.
    NotFound,
}

/// Failures of the geocoding service itself.
///
/// The messages never contain credentials.
#[derive(Debug, Error)]
pub enum GeoCodingError {
    #[error("geocoding request timed out")]
    Timeout,
    #[error("geocoding request failed: {0}")]
    Transport(String),
    #[error("geocoding service responded with HTTP status {0}")]
    Status(u16),
    #[error("malformed geocoding response: {0}")]
    MalformedResponse(String),
}

pub trait GeoCodingGateway {
    fn resolve_address(&self, address: &str) -> Result<Geocoded, GeoCodingError>;
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve_address(&self, address: &str) -> Result<Geocoded, GeoCodingError> {
        (**self).resolve_address(address)
    }
}
