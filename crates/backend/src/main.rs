pub mod api;
pub mod dashboards;
pub mod routes;
pub mod shared;

use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let (config, config_source) = shared::config::load_config()?;

    // Создаем директорию для логов
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    tracing::info!("Configuration loaded from {}", config_source);

    let state = Arc::new(routes::AppState {
        registry: dashboards::d402_seller_performance::PolicyRegistry::new(),
        default_policies: config.analysis.policy_selection(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(state).layer(cors);

    let addr = config.socket_addr()?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
