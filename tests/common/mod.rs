use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use flux_relay_service::{AppConfig, FluxClient, build_router};

pub struct TestApp {
    pub address: String,
}

/// Spawns the relay on a random port, pointed at the given upstream URL
/// (normally a wiremock server), and returns the base address.
pub async fn spawn_app(token: &str, upstream: &str) -> TestApp {
    spawn_app_with(token, upstream, Duration::from_secs(5), PathBuf::from("views")).await
}

pub async fn spawn_app_with(
    token: &str,
    upstream: &str,
    timeout: Duration,
    asset_dir: PathBuf,
) -> TestApp {
    let config = Arc::new(AppConfig {
        listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
        hf_token: token.to_string(),
        asset_dir,
    });
    let flux = FluxClient::with_endpoint(upstream.to_string(), token, timeout);
    let router = build_router(config, flux);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    TestApp {
        address: format!("http://{addr}"),
    }
}
