use anyhow::{Context, Result};
use geoenrich_core::{
    cache::CoordinateCache,
    entities::Event,
    gateways::geocode::GeoCodingGateway,
    rate_limit::RateLimiter,
    usecases::{self, EnrichedEvents},
};
use geoenrich_db_json::JsonFile;
use std::path::Path;

/// Enriches the events and streams the results into `output`.
///
/// Coordinates found in an existing `output` file are reused
/// before the file is overwritten.
pub fn enrich_events_into_file<G>(
    geo_gw: &G,
    mut limiter: RateLimiter,
    events: Vec<Event>,
    output: &Path,
) -> Result<EnrichedEvents>
where
    G: GeoCodingGateway + ?Sized,
{
    let file = JsonFile::new(output);
    let mut cache = CoordinateCache::load(&file);
    let mut writer = file
        .create_writer()
        .with_context(|| format!("Unable to create {}", output.display()))?;

    let enriched =
        usecases::enrich_events(geo_gw, &mut limiter, &mut cache, &mut writer, events)?;

    let stats = &enriched.stats;
    log::info!(
        "Summary: {} succeeded, {} failed of {} in total",
        stats.success,
        stats.error,
        stats.total()
    );
    log::info!(
        "Cache: {} unique addresses stored, {} cache hits",
        stats.cache_size,
        stats.cache_hits
    );
    Ok(enriched)
}
