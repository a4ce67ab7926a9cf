mod config;
mod instance;
mod routes;
mod session;

use std::time::Duration;

use session::HostState;

const STARTUP_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let base_url = format!("http://{}", config.listen_addr);
    let client = reqwest::Client::new();

    if instance::is_healthy(&client, &base_url).await {
        tracing::info!(%base_url, "already running");
        launch(&config, &format!("{base_url}/"));
        return;
    }

    let host = HostState::new(session::generate_token());
    let app = match routes::app(&config, host.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to assemble router");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.listen_addr, "gw2am listening");
    let server = tokio::spawn({
        let host = host.clone();
        async move { axum::serve(listener, app).with_graceful_shutdown(shutdown_signal(host)).await }
    });

    if let Err(e) = instance::wait_until_healthy(&client, &base_url, STARTUP_TIMEOUT).await {
        tracing::error!(error = %e, "server failed to start");
        std::process::exit(1);
    }
    launch(&config, &format!("{base_url}/auth/{}", host.token()));

    match server.await {
        Ok(result) => result.expect("server failed"),
        Err(e) => tracing::error!(error = %e, "server task panicked"),
    }
}

/// Open `url` in the browser, or just log it when launching is disabled or
/// fails.
fn launch(config: &config::ServerConfig, url: &str) {
    if !config.open_browser {
        tracing::info!(%url, "open this address in a browser");
        return;
    }
    if let Err(e) = instance::open_browser(url) {
        tracing::warn!(error = %e, %url, "open this address in a browser");
    }
}

async fn shutdown_signal(host: HostState) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "failed to install CTRL+C handler");
            }
        }
        () = host.shutdown_requested() => {}
    }
    tracing::info!("shutting down");
}
