pub mod events;
pub mod geocode;
