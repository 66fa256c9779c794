use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leave_summary::api::{AppState, create_router};
use leave_summary::client::SuccessFactorsClient;
use leave_summary::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with conditional JSON/text output
    let use_json = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()) == "json";

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,leave_summary=debug,tower_http=info".into());

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let config = ConfigLoader::from_env().map_err(|e| {
        tracing::error!("Configuration error: {}", e);
        e
    })?;

    let backend = SuccessFactorsClient::from_config(&config)?;
    tracing::info!(
        api_base_url = %config.backend.api_base_url,
        token_url = %config.credentials.token_url,
        "Backend client configured"
    );

    let app = create_router(AppState::new(backend));

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
