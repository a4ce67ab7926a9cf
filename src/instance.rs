//! Single-instance detection and browser launch.
//!
//! A second launch finds the first one through its health check and only
//! opens the browser on it.

use std::time::Duration;

use reqwest::StatusCode;

const HEALTH_TIMEOUT: Duration = Duration::from_secs(1);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    #[error("server did not become healthy within {0:?}")]
    NotHealthy(Duration),
    #[error("failed to open browser: {0}")]
    Browser(#[from] std::io::Error),
}

/// `true` when a server at `base_url` answers `HEAD /health` with 200.
pub async fn is_healthy(client: &reqwest::Client, base_url: &str) -> bool {
    match client.head(format!("{base_url}/health")).timeout(HEALTH_TIMEOUT).send().await {
        Ok(response) => response.status() == StatusCode::OK,
        Err(_) => false,
    }
}

/// Poll the health check until it answers or `timeout` elapses.
///
/// # Errors
///
/// Returns [`InstanceError::NotHealthy`] on timeout.
pub async fn wait_until_healthy(client: &reqwest::Client, base_url: &str, timeout: Duration) -> Result<(), InstanceError> {
    let poll = async {
        while !is_healthy(client, base_url).await {
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    };
    tokio::time::timeout(timeout, poll).await.map_err(|_| InstanceError::NotHealthy(timeout))
}

/// Open `url` in the default browser.
///
/// # Errors
///
/// Returns [`InstanceError::Browser`] when no opener could be started.
pub fn open_browser(url: &str) -> Result<(), InstanceError> {
    tracing::info!(%url, "opening browser");
    open::that(url)?;
    Ok(())
}

#[cfg(test)]
#[path = "instance_test.rs"]
mod tests;
