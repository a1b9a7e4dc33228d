/// Synchronous client for the **BLS Public Data API (v2)**.
///
/// This module issues a single JSON POST to the `timeseries/data` endpoint
/// and hands back the raw body together with the HTTP status. Parsing is
/// left to [`crate::models::ApiResponse::parse`] so the caller can decide
/// whether the body is worth decoding.
///
/// ### Notes
/// - One request per call; there is no retry, pagination, or batching.
/// - Network timeouts use a sane default (30s) and can be adjusted by
///   editing the client builder.
///
/// Typical usage:
/// ```no_run
/// # use bls_rs::{Client, Payload};
/// let client = Client::default();
/// let payload = Payload::new("key".into(), vec!["SMU18000000000000001".into()], 2023, 2025);
/// let reply = client.send(&payload)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
use crate::models::Payload;
use anyhow::{Context, Result};
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Raw outcome of one POST: the HTTP status plus the body text, read
/// regardless of status so the connection is released deterministically.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct Client {
    pub endpoint: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("bls_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            endpoint: "https://api.bls.gov/publicAPI/v2/timeseries/data/".into(),
            http,
        }
    }
}

impl Client {
    /// Send the payload as a JSON POST.
    ///
    /// Returns the status and body for any HTTP outcome, success or not;
    /// only transport failures (DNS, connect, timeout) are `Err`.
    pub fn send(&self, payload: &Payload) -> Result<ApiReply> {
        debug!(
            "POST {} ({} series, {}-{})",
            self.endpoint,
            payload.seriesid.len(),
            payload.startyear,
            payload.endyear
        );
        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .with_context(|| format!("POST {}", self.endpoint))?;
        let status = response.status();
        let body = response.text().context("read response body")?;
        debug!("HTTP {} ({} bytes)", status, body.len());
        Ok(ApiReply { status, body })
    }
}
