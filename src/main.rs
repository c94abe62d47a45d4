use paypal_checkout_backend::app::config::Config;
use paypal_checkout_backend::app::state::AppState;
use paypal_checkout_backend::app::build_router;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    info!(
        "Starting PayPal checkout backend on port {} (API base: {})",
        config.server_port, config.api_base
    );

    let state = AppState::new(&config);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
