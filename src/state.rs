// src/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::session::SessionRegistry;
use crate::store::OrderStore;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn OrderStore>,
  pub sessions: Arc<SessionRegistry>,
  pub config: Arc<AppConfig>,
}
