// src/session.rs

//! Roles and the in-memory session registry.
//!
//! The registry is the identity collaborator's session half: an explicit
//! object owned by [`crate::state::AppState`] instead of ambient global
//! state. It starts empty, hands out opaque bearer tokens on login, and can
//! be torn down wholesale with [`SessionRegistry::clear`].

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Closed set of operator roles.
///
/// The partner sees their 30% share as the headline revenue figure and no
/// split breakdown; standard and privileged operators see the owner view;
/// only privileged operators may submit orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Standard,
  Partner,
  Privileged,
}

impl Role {
  pub fn is_partner(self) -> bool {
    matches!(self, Role::Partner)
  }

  pub fn is_privileged(self) -> bool {
    matches!(self, Role::Privileged)
  }
}

/// The signed-in operator as exposed to handlers.
#[derive(Debug, Clone)]
pub struct SessionUser {
  pub email: String,
  pub full_name: String,
  pub role: Role,
}

/// A live session: an opaque token bound to an operator.
#[derive(Debug, Clone)]
pub struct Session {
  pub token: String,
  pub user: SessionUser,
  pub issued_at: DateTime<Utc>,
}

/// Token-to-session map behind a lock. Sessions live for the lifetime of
/// the process; there is no expiry in this scope.
#[derive(Default)]
pub struct SessionRegistry {
  sessions: RwLock<HashMap<String, Session>>,
}

impl SessionRegistry {
  /// An empty registry (the load-or-empty init; nothing is persisted).
  pub fn new() -> Self {
    Self::default()
  }

  /// Issues a fresh session for `user` and returns it.
  pub fn issue(&self, user: SessionUser) -> Session {
    let session = Session {
      token: Uuid::new_v4().to_string(),
      user,
      issued_at: Utc::now(),
    };
    self
      .sessions
      .write()
      .insert(session.token.clone(), session.clone());
    tracing::debug!(email = %session.user.email, "Session issued");
    session
  }

  /// Looks up a session by token.
  pub fn resolve(&self, token: &str) -> Option<Session> {
    self.sessions.read().get(token).cloned()
  }

  /// Revokes a single session. Returns whether the token was known.
  pub fn revoke(&self, token: &str) -> bool {
    self.sessions.write().remove(token).is_some()
  }

  /// Drops every session (teardown).
  pub fn clear(&self) {
    self.sessions.write().clear();
  }
}
