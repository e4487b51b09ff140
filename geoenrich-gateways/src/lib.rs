pub mod events_api;
pub mod google;

pub use reqwest::Url;
