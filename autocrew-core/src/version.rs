//! Best-effort version check
//!
//! Fetches the published manifest once at startup and compares its version
//! line against the running binary. Every failure here is reported by the
//! caller and swallowed; this must never stop a run.

use autocrew_error::{Error, Result};
use reqwest::Client;
use std::time::Duration;

/// The running tool version.
pub const AUTOCREW_VERSION: &str = env!("CARGO_PKG_VERSION");

const LATEST_VERSION_URL: &str =
    "https://raw.githubusercontent.com/autocrew-rs/autocrew/main/Cargo.toml";

/// Fetch the latest published version. Returns `Some(version)` only when it
/// is newer than the running one.
pub async fn check_latest_version() -> Result<Option<String>> {
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client");

    let response = client
        .get(LATEST_VERSION_URL)
        .send()
        .await
        .map_err(|e| {
            Error::network_failed(e.to_string())
                .with_operation("version::check")
                .set_source(e)
        })?;

    if !response.status().is_success() {
        return Err(Error::network_failed("version endpoint returned an error")
            .with_operation("version::check")
            .with_context("status", response.status().as_u16().to_string()));
    }

    let body = response.text().await.map_err(|e| {
        Error::network_failed(e.to_string())
            .with_operation("version::check")
            .set_source(e)
    })?;

    let latest = extract_version_line(&body).ok_or_else(|| {
        Error::parse_failed("no version line in manifest").with_operation("version::check")
    })?;

    if is_newer(&latest, AUTOCREW_VERSION) {
        Ok(Some(latest))
    } else {
        Ok(None)
    }
}

/// Pull the version out of the first `version = "..."` manifest line.
fn extract_version_line(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find(|line| line.starts_with("version = "))
        .and_then(|line| line.split('=').nth(1))
        .map(|v| v.trim().trim_matches('"').to_string())
}

fn parse_version(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|part| part.trim().parse().unwrap_or(0))
        .collect()
}

/// Numeric component-wise comparison; missing components count as zero.
fn is_newer(candidate: &str, current: &str) -> bool {
    let a = parse_version(candidate);
    let b = parse_version(current);
    let len = a.len().max(b.len());

    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        if x != y {
            return x > y;
        }
    }
    false
}
