#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # geoenrich-entities
//!
//! Reusable, agnostic domain entities for geoenrich.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod event;
pub mod geo;
pub mod record;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
