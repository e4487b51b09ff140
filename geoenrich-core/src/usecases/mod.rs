mod enrich_events;
mod error;

pub use self::{enrich_events::*, error::Error};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        cache::*,
        entities::*,
        gateways::geocode::*,
        rate_limit::*,
        sink::*,
    };
}
