use geoenrich_boundary as json;
use geoenrich_core::{
    entities::Event,
    gateways::events::{EventGateway, EventGatewayError},
};
use reqwest::{blocking::Client, Url};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://event.stockholmpride.org/api/events";

/// Fetches the events to be enriched from a JSON listing API.
#[derive(Debug, Clone)]
pub struct EventsApi {
    client: Client,
    url: Url,
}

impl EventsApi {
    pub fn try_new<'a>(
        api_url: Url,
        params: impl IntoIterator<Item = (&'a str, &'a str)>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let mut url = api_url;
        let params: Vec<_> = params.into_iter().collect();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl EventGateway for EventsApi {
    fn fetch_events(&self) -> Result<Vec<Event>, EventGatewayError> {
        log::info!("Fetching events from {}", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .map_err(|err| EventGatewayError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(EventGatewayError::Status(status.as_u16()));
        }
        let events: Vec<json::Event> = response
            .json()
            .map_err(|err| EventGatewayError::Decode(err.to_string()))?;
        log::info!("Fetched {} events", events.len());
        Ok(events.into_iter().map(Event::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parameters_are_appended() {
        let api = EventsApi::try_new(
            DEFAULT_API_URL.parse().unwrap(),
            [("date", "upcoming"), ("language", "sv")],
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(
            "https://event.stockholmpride.org/api/events?date=upcoming&language=sv",
            api.url().as_str()
        );
    }

    #[test]
    fn no_query_without_parameters() {
        let api = EventsApi::try_new(
            DEFAULT_API_URL.parse().unwrap(),
            [],
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(DEFAULT_API_URL, api.url().as_str());
    }
}
