use reqwest::header::COOKIE;
use url::Url;

/// Fetches one page of a section listing. Non-2xx statuses come back as
/// errors; there is no retry, the caller decides what a failure means.
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &Url,
    page_number: u32,
    session_cookie: &str,
) -> Result<String, reqwest::Error> {
    let response = client
        .get(url.clone())
        .query(&[("page", page_number)])
        .header(COOKIE, format!("retropartidas_session={}", session_cookie))
        .send()
        .await?
        .error_for_status()?;

    response.text().await
}
