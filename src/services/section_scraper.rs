use std::path::Path;

use url::Url;

use crate::domain::section::Section;
use crate::domain::table::Dataset;

use super::{extract_first_table, fetch_page, persist_dataset};

/// Result of fetching one page, tagged so that "no table" (the normal end of
/// pagination) is never confused with a transport failure.
pub enum PageOutcome {
    Rows(Dataset),
    EndOfPagination,
    Failure(anyhow::Error),
}

pub struct SectionReport {
    pub pages_fetched: u32,
    pub rows: usize,
    pub failed: bool,
}

async fn fetch_page_outcome(
    client: &reqwest::Client,
    url: &Url,
    page_number: u32,
    session_cookie: &str,
) -> PageOutcome {
    let html = match fetch_page(client, url, page_number, session_cookie).await {
        Ok(html) => html,
        Err(e) => return PageOutcome::Failure(e.into()),
    };

    match extract_first_table(&html) {
        Some(table) => PageOutcome::Rows(table),
        None => PageOutcome::EndOfPagination,
    }
}

/// Scrapes every page of one section, starting at page 1 and stopping on the
/// first page without a table or on the first request failure. Whatever was
/// accumulated up to that point is persisted.
pub async fn scrape_section(
    client: &reqwest::Client,
    section: &Section,
    session_cookie: &str,
    output_dir: &Path,
) -> SectionReport {
    log::info!("Scraping section {}", section.url);

    let mut page_number: u32 = 1;
    let mut dataset = Dataset::new();
    let mut failed = false;

    loop {
        match fetch_page_outcome(client, &section.url, page_number, session_cookie).await {
            PageOutcome::Rows(table) => {
                log::info!(
                    "Found {} rows on page {} of {}",
                    table.row_count(),
                    page_number,
                    section.url
                );
                dataset.append(table);
                page_number += 1;
            }
            PageOutcome::EndOfPagination => {
                log::info!(
                    "No table on page {} of {}, pagination finished",
                    page_number,
                    section.url
                );
                break;
            }
            PageOutcome::Failure(e) => {
                log::error!(
                    "Request for page {} of {} failed, stopping this section: {:?}",
                    page_number,
                    section.url,
                    e
                );
                failed = true;
                break;
            }
        }
    }

    let rows = dataset.row_count();
    if dataset.is_empty() {
        log::warn!("No data retrieved for {}, nothing to write", section.url);
    } else {
        match persist_dataset(output_dir, &section.output_file_name, &dataset) {
            Ok(path) => log::info!("Saved {} rows to {}", rows, path.display()),
            Err(e) => {
                log::error!("Failed to write {}: {:?}", section.output_file_name, e);
                failed = true;
            }
        }
    }

    SectionReport {
        pages_fetched: page_number,
        rows,
        failed,
    }
}
