use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("geoenrich.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub events: Option<Events>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
    pub output: Option<Output>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Events {
    pub api_url: String,
    pub date: Option<String>,
    pub language: Option<String>,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for Events {
    fn default() -> Self {
        Config::default().events.expect("Events configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub requests_per_second: f64,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default().geocoding.expect("Geocoding configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Google,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub google: Option<Google>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Google {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub region: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Output {
    pub file: PathBuf,
}

impl Default for Output {
    fn default() -> Self {
        Config::default().output.expect("Output configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.events.is_some());
        assert!(cfg.geocoding.is_some());
        assert!(cfg.output.is_some());
        let google = cfg.gateway.unwrap().google.unwrap();
        assert!(google.api_key.is_none());
        assert_eq!(Some("se"), google.region.as_deref());
    }

    #[test]
    fn default_geocoding_config() {
        let cfg = Geocoding::default();
        assert!(matches!(cfg.gateway, Some(GeocodingGateway::Google)));
        assert_eq!(1.0, cfg.requests_per_second);
        assert_eq!(Duration::from_secs(10), cfg.timeout);
    }

    #[test]
    fn default_output_file() {
        assert_eq!(PathBuf::from("eventsWithCoords.json"), Output::default().file);
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/geoenrich.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        assert_eq!(Duration::from_secs(60), cfg.events.unwrap().timeout);
        assert_eq!(2.5, cfg.geocoding.unwrap().requests_per_second);
    }
}
