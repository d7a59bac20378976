mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_http_client()?;

    let state = AppState::new(
        db,
        http_client,
        config.core_base_url.clone(),
        config.identity_base_url.clone(),
    );

    let app = router::router().with_state(state);

    tracing::info!("Starting server on {}", config.server_address);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
