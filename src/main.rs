use tokio::net::TcpListener;

use waittime_proxy::config::validation::validate_config;
use waittime_proxy::config::ProxyConfig;
use waittime_proxy::http::HttpServer;
use waittime_proxy::observability::{logging, metrics};
use waittime_proxy::upstream::WaitTimeClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fixed service contract; there is no flag or env-var config surface.
    let config = ProxyConfig::default();

    logging::init(&format!(
        "waittime_proxy={0},tower_http={0}",
        config.observability.log_level
    ));

    tracing::info!("waittime-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(errors) = validate_config(&config) {
        for e in &errors {
            tracing::error!(error = %e, "Invalid configuration");
        }
        return Err("configuration validation failed".into());
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        connect_timeout_secs = config.upstream.connect_timeout_secs,
        request_timeout_secs = config.upstream.request_timeout_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let client = WaitTimeClient::new(&config.upstream)?;
    let server = HttpServer::new(config, client);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
