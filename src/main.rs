use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flux_relay_service::{AppConfig, FluxClient, build_router, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Arc::new(AppConfig::from_env());
    let flux = FluxClient::new(&config.hf_token);
    let router = build_router(config.clone(), flux);

    tracing::info!(model = server::MODEL_NAME, api = server::API_NAME, "Flux image generator server");
    if config.token_configured() {
        tracing::info!("HuggingFace token configured, ready to generate images");
    } else {
        tracing::warn!(
            "HuggingFace token not configured! Set HF_TOKEN in the environment or a .env file; \
             get a token from https://huggingface.co/settings/tokens and make sure it has \
             access to FLUX.1-dev"
        );
    }

    let listener = TcpListener::bind(config.listen_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "server ready");

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,hyper=warn,axum::rejection=trace".into());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
