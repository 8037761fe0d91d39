use std::time::Duration;

use anyhow::Context;
use tracing::{debug, info};

use ucs_core::{CourseCatalog, ScheduleFeed};

use crate::config::Config;

/// Fetch the courses feed and materialize the in-memory catalog.
///
/// Runs once at startup; any network or decode failure here is fatal to the
/// process. There is no retry or refresh.
pub async fn load_catalog(config: &Config) -> anyhow::Result<CourseCatalog> {
    debug!(url = %config.courses_url, "fetching course feed");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .build()
        .context("failed to build HTTP client")?;

    let payload = client
        .get(&config.courses_url)
        .send()
        .await
        .context("course feed request failed")?
        .error_for_status()
        .context("course feed returned an error status")?
        .text()
        .await
        .context("failed to read course feed body")?;

    let feed = ScheduleFeed::from_json(&payload).context("failed to decode course feed JSON")?;
    let sections = feed.class_schedules.into_sections()?;
    info!(sections = sections.len(), "materialized course feed");

    Ok(CourseCatalog::new(sections))
}
