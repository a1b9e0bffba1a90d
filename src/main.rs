use dotenvy::dotenv;
use tracing::info;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,moviedb_backend=debug,sqlx=warn".to_string()),
        )
        .init();

    info!("Starting server...");

    let config = config::settings::AppConfig::new()?;
    let db = infrastructure::db::pool::connect_to_db(&config.database_url).await?;

    let state = state::AppState::new(config, db);
    let addr = format!("0.0.0.0:{}", state.config.server_port);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
