//! AssetDesk host: server-renders the dashboard shell and serves the WASM bundle.
//!
//! The asset API itself is remote; this process holds no business data.

mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let app = routes::app().expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "assetdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
