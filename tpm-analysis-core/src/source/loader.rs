use crate::aggregate::aggregate;
use crate::extract::extract_with_stats;
use crate::model::{Profile, SourceProfiles, Variant};
use crate::source::{LogFetcher, SourceLoadError};
use futures_util::future::join_all;
use std::collections::BTreeMap;

/// Outcome of one load cycle, keyed by source id.
///
/// Completion order of the individual loads has no effect on the content.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: BTreeMap<String, SourceProfiles>,
    pub failed: BTreeMap<String, SourceLoadError>,
}

impl LoadReport {
    fn record(&mut self, source: String, result: Result<SourceProfiles, SourceLoadError>) {
        match result {
            Ok(profiles) => {
                tracing::info!(
                    source = %source,
                    enabled_points = profiles.enabled.point_count(),
                    disabled_points = profiles.disabled.point_count(),
                    "source loaded"
                );
                self.loaded.insert(source, profiles);
            }
            Err(err) => {
                tracing::warn!(source = %source, error = %err, "source failed to load; skipping");
                self.failed.insert(source, err);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

/// Loads both variants of one source.
///
/// Either retrieval failing fails the whole source.
pub async fn load_source<F>(fetcher: &F, source: &str) -> Result<SourceProfiles, SourceLoadError>
where
    F: LogFetcher + ?Sized,
{
    let (enabled, disabled) = tokio::try_join!(
        fetch_variant(fetcher, source, Variant::Enabled),
        fetch_variant(fetcher, source, Variant::Disabled),
    )?;

    Ok(SourceProfiles {
        enabled: build_profile(source, Variant::Enabled, &enabled),
        disabled: build_profile(source, Variant::Disabled, &disabled),
    })
}

/// Loads every source concurrently and collects the tagged results.
pub async fn load_sources<F>(fetcher: &F, sources: &[String]) -> LoadReport
where
    F: LogFetcher + ?Sized,
{
    let loads = sources.iter().map(|source| async move {
        let result = load_source(fetcher, source).await;
        (source.clone(), result)
    });

    join_all(loads)
        .await
        .into_iter()
        .fold(LoadReport::default(), |mut report, (source, result)| {
            report.record(source, result);
            report
        })
}

async fn fetch_variant<F>(
    fetcher: &F,
    source: &str,
    variant: Variant,
) -> Result<String, SourceLoadError>
where
    F: LogFetcher + ?Sized,
{
    fetcher
        .fetch(source, variant)
        .await
        .map_err(|e| SourceLoadError {
            source_id: source.to_string(),
            variant,
            source: e,
        })
}

fn build_profile(source: &str, variant: Variant, raw: &str) -> Profile {
    let (samples, stats) = extract_with_stats(raw);
    if stats.unattributed > 0 {
        tracing::debug!(
            source,
            %variant,
            dropped = stats.unattributed,
            "measurements before any section marker dropped"
        );
    }

    aggregate(samples)
}
