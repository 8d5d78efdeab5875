// src/core/net.rs
// Blocking HTTP GET; one shared client for all workers.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::config::consts::USER_AGENT;
use crate::error::{Result, ScrapeError};

/// Build the client every worker shares. Connection pooling and TLS setup happen once.
pub fn client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(ScrapeError::Client)
}

/// GET `url` and return the body. Non-2xx statuses are failures.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    // `url` is already in the error; keep it out of the source's message
    let fail = |source: reqwest::Error| ScrapeError::Fetch { url: s!(url), source: source.without_url() };

    let resp = client.get(url).send().map_err(fail)?;
    let resp = resp.error_for_status().map_err(fail)?;
    resp.text().map_err(fail)
}

/// GET `url` and parse it into a queryable document.
pub fn fetch(client: &Client, url: &str) -> Result<Html> {
    let body = http_get(client, url)?;
    log::debug!("fetched {url} ({} bytes)", body.len());
    Ok(Html::parse_document(&body))
}
