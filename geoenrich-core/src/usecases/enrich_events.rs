use super::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStatistics {
    pub success: usize,
    pub error: usize,
    pub cache_hits: usize,
    /// Number of distinct addresses known at the end of the run.
    pub cache_size: usize,
}

impl RunStatistics {
    pub fn total(&self) -> usize {
        self.success + self.error
    }
}

#[derive(Debug)]
pub struct EnrichedEvents {
    /// All records in the order of the input events.
    pub records: Vec<EnrichedRecord>,
    pub stats: RunStatistics,
}

/// Resolves the addresses of all events and passes the
/// enriched records to the sink.
///
/// Events are processed strictly one after another. Each distinct
/// address is geocoded at most once per run, unless the geocoding
/// service failed for it. Failures of the service are recorded in
/// the affected record only, whereas a failing sink aborts the run.
pub fn enrich_events<G, S>(
    geo_gw: &G,
    limiter: &mut RateLimiter,
    cache: &mut CoordinateCache,
    sink: &mut S,
    events: Vec<Event>,
) -> Result<EnrichedEvents>
where
    G: GeoCodingGateway + ?Sized,
    S: RecordSink + ?Sized,
{
    let total = events.len();
    let mut stats = RunStatistics::default();
    let mut records = Vec::with_capacity(total);

    for (index, event) in events.into_iter().enumerate() {
        let nr = index + 1;
        let address = event.address().to_owned();
        let enrichment = enrich_address(geo_gw, limiter, cache, &address, &mut stats);
        let Event { id, title, .. } = event;

        match &enrichment {
            Enrichment::Located(pos) => {
                log::info!("Event {nr}/{total}: {title} {pos}");
                stats.success += 1;
            }
            Enrichment::Unlocated if is_blank(&address) => {
                log::info!("Event {nr}/{total}: {title} - no address given");
                stats.success += 1;
            }
            Enrichment::Unlocated => {
                log::warn!("Event {nr}/{total}: {title} - no coordinate found for '{address}'");
                stats.error += 1;
            }
            Enrichment::Failed { reason } => {
                log::error!("Event {nr}/{total}: {title} - {reason}");
                stats.error += 1;
            }
        }

        let record = EnrichedRecord {
            id,
            title,
            address,
            enrichment,
        };
        sink.append_record(&record, index == 0)?;
        records.push(record);
    }
    sink.close()?;

    stats.cache_size = cache.len();
    Ok(EnrichedEvents { records, stats })
}

fn enrich_address<G>(
    geo_gw: &G,
    limiter: &mut RateLimiter,
    cache: &mut CoordinateCache,
    address: &str,
    stats: &mut RunStatistics,
) -> Enrichment
where
    G: GeoCodingGateway + ?Sized,
{
    if is_blank(address) {
        return Enrichment::Unlocated;
    }
    if let Some(cached) = cache.get(address) {
        log::info!("Cache hit for '{address}'");
        stats.cache_hits += 1;
        return cached.map_or(Enrichment::Unlocated, Enrichment::Located);
    }
    limiter.wait();
    match geo_gw.resolve_address(address) {
        Ok(Geocoded::Resolved(pos)) => {
            cache.insert(address.to_owned(), Some(pos));
            Enrichment::Located(pos)
        }
        Ok(Geocoded::NotFound) => {
            cache.insert(address.to_owned(), None);
            Enrichment::Unlocated
        }
        Err(err) => Enrichment::Failed {
            reason: err.to_string(),
        },
    }
}
