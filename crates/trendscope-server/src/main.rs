mod api;
mod cache;
mod middleware;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use trendscope_gtrends::GtrendsClient;
use trendscope_youtube::YoutubeClient;

use crate::api::{build_app, AppState};
use crate::cache::SwapCache;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = trendscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // A missing YouTube credential must not prevent startup; the affected
    // endpoints report a configuration error instead.
    let youtube = match &config.youtube_api_key {
        Some(key) => match YoutubeClient::new(key, config.request_timeout_secs) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!(error = %e, "failed to build YouTube client, disabling it");
                None
            }
        },
        None => {
            tracing::warn!("YOUTUBE_API_KEY not set; YouTube endpoints will report a configuration error");
            None
        }
    };

    let gtrends = Arc::new(GtrendsClient::new(config.request_timeout_secs)?);
    let trends_cache = SwapCache::new(Duration::from_secs(config.trends_cache_ttl_secs));

    let app = build_app(AppState {
        youtube,
        gtrends,
        trends_cache,
    });

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting trendscope server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
