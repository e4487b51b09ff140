use crate::config::{self, GeocodingGateway};
use anyhow::Result;
use geoenrich_core::gateways::geocode::{GeoCodingError, GeoCodingGateway, Geocoded};
use geoenrich_gateways::{events_api::EventsApi, google::GoogleGeocoding};

pub fn event_gateway(cfg: &config::Events) -> Result<EventsApi> {
    let params = cfg.params.iter().map(|(k, v)| (k.as_str(), v.as_str()));
    let gw = EventsApi::try_new(cfg.api_url.clone(), params, cfg.timeout)?;
    Ok(gw)
}

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<Box<dyn GeoCodingGateway>> {
    match &cfg.gateway {
        Some(GeocodingGateway::Google {
            api_url,
            api_key,
            region,
        }) => {
            if api_key.is_none() {
                log::warn!("No Google geocoding API key found: addresses cannot be resolved");
            }
            let gw = GoogleGeocoding::try_new(
                api_url.clone(),
                api_key.clone(),
                region.clone(),
                cfg.timeout,
            )?;
            Ok(Box::new(gw))
        }
        None => {
            log::warn!("No geocoding gateway configured");
            Ok(Box::new(DummyGeoCodingGw))
        }
    }
}

struct DummyGeoCodingGw;

impl GeoCodingGateway for DummyGeoCodingGw {
    fn resolve_address(&self, address: &str) -> Result<Geocoded, GeoCodingError> {
        log::debug!("Cannot resolve '{address}' because no geocoding gateway was configured");
        Ok(Geocoded::NotFound)
    }
}
