use geoenrich_core::{
    entities::{is_blank, Coordinate},
    gateways::geocode::{GeoCodingError, GeoCodingGateway, Geocoded},
};
use reqwest::{blocking::Client, Url};
use serde::Deserialize;
use std::{error::Error as StdError, fmt, time::Duration};

pub const DEFAULT_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

const STATUS_OK: &str = "OK";
const HIDDEN_API_KEY: &str = "API_KEY_HIDDEN";

/// A geocoding gateway based on the Google Geocoding API.
pub struct GoogleGeocoding {
    client: Client,
    api_url: Url,
    api_key: Option<String>,
    region: Option<String>,
}

// The API key must never show up in any log output.
impl fmt::Debug for GoogleGeocoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GoogleGeocoding")
            .field("api_url", &self.api_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| HIDDEN_API_KEY))
            .field("region", &self.region)
            .finish()
    }
}

impl GoogleGeocoding {
    pub fn try_new(
        api_url: Url,
        api_key: Option<String>,
        region: Option<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url,
            api_key,
            region,
        })
    }

    fn request_url(&self, address: &str, api_key: &str) -> Url {
        let mut url = self.api_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("address", address);
            query.append_pair("key", api_key);
            if let Some(region) = &self.region {
                query.append_pair("region", region);
            }
        }
        url
    }
}

impl GeoCodingGateway for GoogleGeocoding {
    fn resolve_address(&self, address: &str) -> Result<Geocoded, GeoCodingError> {
        if is_blank(address) {
            return Ok(Geocoded::NotFound);
        }
        let Some(api_key) = self.api_key.as_deref() else {
            log::error!("Missing Google geocoding API key: cannot resolve '{address}'");
            return Ok(Geocoded::NotFound);
        };
        log::debug!(
            "Google geocoding request: {}",
            self.request_url(address, HIDDEN_API_KEY)
        );
        let response = self
            .client
            .get(self.request_url(address, api_key))
            .send()
            .map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeoCodingError::Status(status.as_u16()));
        }
        let response: GeocodeResponse = response.json().map_err(request_error)?;
        geocoded_from_response(address, response).inspect_err(|err| {
            log::error!("Google geocoding failed for '{address}': {err}");
        })
    }
}

fn request_error(err: reqwest::Error) -> GeoCodingError {
    if err.is_timeout() {
        return GeoCodingError::Timeout;
    }
    // The URL contains the API key
    let err = err.without_url();
    let msg = error_chain(&err);
    if err.is_decode() {
        GeoCodingError::MalformedResponse(msg)
    } else {
        GeoCodingError::Transport(msg)
    }
}

// reqwest only renders the outermost message, the causes are chained.
fn error_chain(err: &dyn StdError) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

fn geocoded_from_response(
    address: &str,
    response: GeocodeResponse,
) -> Result<Geocoded, GeoCodingError> {
    let GeocodeResponse {
        status,
        results,
        error_message,
    } = response;
    log::debug!(
        "Google response: {status}, {} results for '{address}'",
        results.len()
    );
    if status == STATUS_OK {
        if let Some(first) = results.first() {
            let LatLng { lat, lng } = first.geometry.location;
            let pos = Coordinate::try_from_lat_lon_deg(lat, lng)
                .map_err(|err| GeoCodingError::MalformedResponse(err.to_string()))?;
            log::debug!("Google: found coordinates for '{address}'");
            return Ok(Geocoded::Resolved(pos));
        }
    }
    match error_message {
        Some(msg) => log::warn!("Google: {status} - no coordinate found for '{address}': {msg}"),
        None => log::warn!("Google: {status} - no coordinate found for '{address}'"),
    }
    Ok(Geocoded::NotFound)
}
