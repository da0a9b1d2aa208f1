use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::{
    configuration::Settings,
    domain::section::build_sections,
    services::scrape_section,
};

#[derive(Debug, Default)]
pub struct RunSummary {
    pub sections_scraped: usize,
    pub sections_failed: usize,
    pub rows_total: usize,
}

/// Scrapes every configured section, one at a time. Sections are independent:
/// a failed or empty section never stops the next one.
pub async fn run(settings: &Settings) -> anyhow::Result<RunSummary> {
    let base_url = Url::parse(&settings.base_url)?;
    let sections = build_sections(&base_url, &settings.url_paths);

    if sections.is_empty() {
        log::info!("No sections configured, nothing to scrape");
        return Ok(RunSummary::default());
    }

    let client = reqwest::Client::builder()
        .read_timeout(Duration::from_secs(30))
        .build()?;
    let output_dir = Path::new(&settings.output_dir);

    let mut summary = RunSummary::default();
    for section in &sections {
        let report =
            scrape_section(&client, section, &settings.session_cookie, output_dir).await;

        log::info!(
            "Section {} done: {} pages fetched, {} rows",
            section.url,
            report.pages_fetched,
            report.rows
        );
        summary.sections_scraped += 1;
        summary.rows_total += report.rows;
        if report.failed {
            summary.sections_failed += 1;
        }
    }

    log::info!(
        "Run finished: {} sections, {} rows, {} failed",
        summary.sections_scraped,
        summary.rows_total,
        summary.sections_failed
    );

    Ok(summary)
}
