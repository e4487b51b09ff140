//! # geoenrich-core
//!
//! Business logic of geoenrich: resolving event addresses to
//! coordinates without knowing how events are fetched, how
//! addresses are geocoded or where the results are stored.

pub mod cache;
pub mod gateways;
pub mod rate_limit;
pub mod sink;
pub mod usecases;

pub mod entities {
    pub use geoenrich_entities::{event::*, geo::*, record::*};
}
