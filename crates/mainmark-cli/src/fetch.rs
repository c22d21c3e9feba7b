//! HTTP retrieval of the page to convert.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use url::Url;

/// Parse `raw` and reject anything that is not an http(s) URL
pub fn parse_page_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid URL: {raw}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => bail!("Unsupported URL scheme '{scheme}' (expected http or https)"),
    }
}

/// Fetch the page body, failing on any non-success status
pub fn fetch_html(url: &Url, timeout: Duration) -> Result<String> {
    tracing::debug!(%url, ?timeout, "fetching page");

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url.clone())
        .send()
        .with_context(|| format!("Request failed: {url}"))?
        .error_for_status()
        .with_context(|| format!("Server returned an error for {url}"))?;

    let body = response
        .text()
        .with_context(|| format!("Failed to read response body: {url}"))?;

    tracing::debug!(bytes = body.len(), "fetched page");
    Ok(body)
}

/// Fetch a page and convert its main content to Markdown
pub fn scrape(url: &Url, timeout: Duration) -> Result<String> {
    let html = fetch_html(url, timeout)?;
    mainmark::html_to_markdown(&html).with_context(|| format!("Failed to convert {url}"))
}
