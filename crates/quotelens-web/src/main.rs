mod error;
mod routes;
mod state;

use std::sync::Arc;

use tower_http::cors::CorsLayer;

use quotelens_core::QuotelensConfig;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = QuotelensConfig::from_env();
    let offline = std::env::var("QUOTELENS_OFFLINE").is_ok_and(|value| value == "1");
    let state = Arc::new(AppState::from_config(&config, offline)?);

    let app = routes::router(state).layer(CorsLayer::permissive());

    let bind = std::env::var("QUOTELENS_BIND").unwrap_or_else(|_| String::from("0.0.0.0:8080"));
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    println!("quotelens-web listening on {bind}");
    axum::serve(listener, app).await?;

    Ok(())
}
