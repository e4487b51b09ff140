use crate::entities::Event;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventGatewayError {
    #[error("unable to fetch events: {0}")]
    Transport(String),
    #[error("events API responded with HTTP status {0}")]
    Status(u16),
    #[error("unable to decode events: {0}")]
    Decode(String),
}

/// A listing of the events to be enriched.
pub trait EventGateway {
    fn fetch_events(&self) -> Result<Vec<Event>, EventGatewayError>;
}
