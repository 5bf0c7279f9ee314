use std::{net::SocketAddr, sync::Arc};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;
mod prompts;
mod provider;

use app_state::AppState;
use config::load_settings;
use provider::{ChatCompletionRewriter, Rewriter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    let rewriter: Option<Arc<dyn Rewriter>> = match &settings.api_key {
        Some(api_key) => Some(Arc::new(ChatCompletionRewriter::new(
            &settings.provider_base_url,
            api_key.clone(),
            settings.model.clone(),
        )?)),
        None => {
            warn!("no provider API key configured (GROQ_API_KEY); /api/convert will fail");
            None
        }
    };

    let app = api::build_router(Arc::new(AppState { rewriter }), &settings);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(
        %addr,
        model = %settings.model,
        static_dir = ?settings.static_dir,
        "server listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
