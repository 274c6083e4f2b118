// src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use qwb_dashboard::config::AppConfig;
use qwb_dashboard::session::SessionRegistry;
use qwb_dashboard::state::AppState;
use qwb_dashboard::store::{OrderStore, PgOrderStore};
use qwb_dashboard::web;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting qwb-dashboard server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the order store.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the order store.");
      panic!("Database connection error: {}", e);
    }
  };

  let store: Arc<dyn OrderStore> = Arc::new(PgOrderStore::new(db_pool));
  let sessions = Arc::new(SessionRegistry::new());

  let app_state = AppState {
    store,
    sessions,
    config: app_config.clone(),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
