use anyhow::{anyhow, Context, Result};
use geoenrich_gateways::Url;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geoenrich.toml";

const ENV_NAME_GOOGLE_API_KEY: &str = "GOOGLE_GEOCODING_API_KEY";

pub struct Config {
    pub events: Events,
    pub geocoding: Geocoding,
    pub output: Output,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config: raw::Config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration in {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_key) = env::var(ENV_NAME_GOOGLE_API_KEY) {
            cfg.geocoding.set_api_key(api_key);
        }
        Ok(cfg)
    }
}

pub struct Events {
    pub api_url: Url,
    /// Query parameters of the listing request
    pub params: Vec<(String, String)>,
    pub timeout: Duration,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub requests_per_second: f64,
    pub timeout: Duration,
}

impl Geocoding {
    fn set_api_key(&mut self, key: String) {
        match &mut self.gateway {
            Some(GeocodingGateway::Google { api_key, .. }) => {
                *api_key = Some(key);
            }
            None => {
                log::warn!("Ignoring {ENV_NAME_GOOGLE_API_KEY}: no geocoding gateway configured");
            }
        }
    }
}

pub enum GeocodingGateway {
    Google {
        api_url: Url,
        api_key: Option<String>,
        region: Option<String>,
    },
}

pub struct Output {
    pub file: PathBuf,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            events,
            geocoding,
            gateway,
            output,
        } = from;

        let raw::Events {
            api_url,
            date,
            language,
            timeout,
        } = events.unwrap_or_default();
        let api_url = api_url
            .parse()
            .with_context(|| format!("Invalid events API URL '{api_url}'"))?;
        let params = [("date", date), ("language", language)]
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
            .collect();
        let events = Events {
            api_url,
            params,
            timeout,
        };

        let raw::Geocoding {
            gateway: gateway_name,
            requests_per_second,
            timeout,
        } = geocoding.unwrap_or_default();

        let geo_gateway = match gateway_name {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::Google => {
                        let toml_name = "google";
                        let raw::Google {
                            api_url,
                            api_key,
                            region,
                        } = gateway.google.ok_or_else(|| {
                            anyhow!("Missing '{toml_name}' gateway configuration")
                        })?;
                        let api_url = api_url
                            .as_deref()
                            .unwrap_or(geoenrich_gateways::google::DEFAULT_API_URL)
                            .parse()
                            .context("Invalid Google geocoding API URL")?;
                        log::info!("Use Google geocoding gateway");
                        GeocodingGateway::Google {
                            api_url,
                            api_key,
                            region,
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
            requests_per_second,
            timeout,
        };

        let raw::Output { file } = output.unwrap_or_default();
        let output = Output { file };

        Ok(Self {
            events,
            geocoding,
            output,
        })
    }
}
