use crate::{
    config::{self, Config},
    enrich, gateways,
};
use anyhow::{Context, Result};
use clap::Parser;
use geoenrich_core::{gateways::events::EventGateway, rate_limit::RateLimiter};
use std::path::PathBuf;

/// Enrich event listings with the coordinates of their addresses.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON file to write the enriched events to
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum number of geocoding requests per second
    #[arg(long, value_name = "REQUESTS_PER_SECOND")]
    rate: Option<f64>,
}

pub fn run() -> Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            log::warn!("Could not load .env file: {err}");
        }
    }
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(file) = args.output {
        cfg.output.file = file;
    }
    if let Some(rate) = args.rate {
        cfg.geocoding.requests_per_second = rate;
    }
    let limiter = rate_limiter(&cfg.geocoding)?;

    let events_gw = gateways::event_gateway(&cfg.events)?;
    let geo_gw = gateways::geocoding_gateway(&cfg.geocoding)?;

    let events = events_gw
        .fetch_events()
        .context("Unable to fetch events")?;
    let enriched = enrich::enrich_events_into_file(&geo_gw, limiter, events, &cfg.output.file)?;
    log::info!(
        "{} events saved -> {}",
        enriched.records.len(),
        cfg.output.file.display()
    );
    Ok(())
}

fn rate_limiter(cfg: &config::Geocoding) -> Result<RateLimiter> {
    let limiter = RateLimiter::try_from_requests_per_second(cfg.requests_per_second)?;
    log::debug!("Geocoding requests are spaced by {:?}", limiter.interval());
    Ok(limiter)
}
