use std::{collections::HashMap, io::Write, time::Duration};

use crate::{
    configuration::Settings,
    dal::CsvSink,
    domain::{DedupState, InclusionPolicy, SearchQuery, SkipReason},
};

use super::{resolve_place_detail, search_places, PlacesApi, RateLimiter};

#[derive(Debug, Clone)]
pub struct HarvestOptions {
    pub max_results: usize,
    pub inclusion: InclusionPolicy,
    pub pagination_delay: Duration,
    pub detail_delay: Duration,
    pub search_delay: Duration,
}

impl From<&Settings> for HarvestOptions {
    fn from(settings: &Settings) -> Self {
        HarvestOptions {
            max_results: settings.max_results_per_search,
            inclusion: settings.inclusion_policy(),
            pagination_delay: settings.pagination_delay,
            detail_delay: settings.detail_delay,
            search_delay: settings.search_delay,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    pub searches: usize,
    pub candidates: usize,
    pub detail_lookups: usize,
    pub empty_details: usize,
    pub rows_written: usize,
    skipped: HashMap<SkipReason, usize>,
}

impl RunSummary {
    fn record_skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason).or_insert(0) += 1;
    }

    pub fn skipped(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }
}

/// Runs every industry for every city, in order, writing accepted records to `sink`.
/// The sink is flushed after each city. Only a sink failure aborts the run.
pub async fn harvest<A: PlacesApi + ?Sized, W: Write>(
    api: &A,
    options: &HarvestOptions,
    cities: &[&str],
    industries: &[&str],
    sink: &mut CsvSink<W>,
) -> anyhow::Result<RunSummary> {
    let mut dedup = DedupState::new();
    let mut summary = RunSummary::default();
    let mut search_pacer = RateLimiter::new(options.search_delay);
    let mut detail_pacer = RateLimiter::new(options.detail_delay);

    for city in cities {
        for industry in industries {
            let query = SearchQuery::new(industry, city);
            log::info!("Searching '{}' in {}...", query.industry, query.city);

            search_pacer.until_ready().await;
            let candidates =
                search_places(api, &query, options.max_results, options.pagination_delay).await;
            summary.searches += 1;

            for candidate in candidates.iter() {
                summary.candidates += 1;

                let place_id = match dedup.screen(candidate) {
                    Ok(place_id) => place_id,
                    Err(reason) => {
                        summary.record_skip(reason);
                        continue;
                    }
                };

                detail_pacer.until_ready().await;
                let detail = resolve_place_detail(api, place_id).await;
                detail_pacer.mark();
                summary.detail_lookups += 1;
                if detail.is_empty() {
                    summary.empty_details += 1;
                }

                match dedup.admit(place_id, candidate, detail, &query, options.inclusion) {
                    Ok(record) => {
                        sink.append(&record)?;
                        summary.rows_written += 1;
                        log::debug!("Accepted {} ({})", record.business_name, place_id);
                    }
                    Err(reason) => {
                        log::trace!("Skipped place_id={}: {:?}", place_id, reason);
                        summary.record_skip(reason);
                    }
                }
            }

            search_pacer.mark();
        }

        sink.flush()?;
        log::info!("Completed city {}. Total places: {}", city, dedup.accepted());
    }

    log::info!(
        "Finished {} searches: {} candidates, {} detail lookups ({} empty), {} rows written",
        summary.searches,
        summary.candidates,
        summary.detail_lookups,
        summary.empty_details,
        summary.rows_written
    );
    log::info!(
        "Skipped: {} duplicate places, {} without name, {} without website, {} duplicate name+city, {} without place_id",
        summary.skipped(SkipReason::DuplicatePlace),
        summary.skipped(SkipReason::MissingName),
        summary.skipped(SkipReason::MissingWebsite),
        summary.skipped(SkipReason::DuplicateNameCity),
        summary.skipped(SkipReason::MissingPlaceId),
    );

    Ok(summary)
}
