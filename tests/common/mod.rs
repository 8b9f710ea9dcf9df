//! Shared utilities for integration tests.

use std::net::SocketAddr;

use serde_json::{json, Value};
use tokio::net::TcpListener;

use waittime_proxy::config::ProxyConfig;
use waittime_proxy::http::HttpServer;
use waittime_proxy::upstream::WaitTimeClient;

/// Build a config pointing the upstream client at a mock server.
pub fn test_config(upstream_url: &str) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.upstream.base_url = upstream_url.to_string();
    config
}

/// Spawn the proxy on an ephemeral port and return its address.
#[allow(dead_code)]
pub async fn spawn_proxy(config: ProxyConfig) -> SocketAddr {
    let client = WaitTimeClient::new(&config.upstream).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, client);
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    addr
}

/// A well-formed upstream attraction record.
#[allow(dead_code)]
pub fn attraction_record(id: &str, wait_time: i64) -> Value {
    json!({
        "id": id,
        "waitTime": wait_time,
        "status": "Operating",
        "active": true,
        "lastUpdate": "2024-06-01T12:00:00Z",
        "name": format!("Attraction {}", id),
        "fastPass": false,
        "meta": {
            "type": "ATTRACTION",
            "longitude": -81.578,
            "latitude": 28.419,
            "entityId": format!("ent-{}", id),
            "singleRider": false,
            "returnTime": {
                "state": "NONE",
                "returnEnd": null,
                "returnStart": ""
            }
        }
    })
}
