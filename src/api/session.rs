//! Cookie-token sessions.
//!
//! Sessions are opaque server-side entries addressed by an `sid`
//! cookie. A session carries at most two facts: which player the caller
//! owns and whether the admin key has been presented. There is no
//! expiry, no rate limiting, and no CSRF protection; this is a minimal
//! gate, not hardened auth.

use std::collections::HashMap;
use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::ApiError;

pub const SESSION_COOKIE: &str = "sid";

/// Per-caller session flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    /// The player this session registered as, if any
    pub player_id: Option<i64>,

    /// Whether the admin key has been presented
    pub is_admin: bool,
}

/// Shared in-memory session map.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.inner.read().await.get(&id).copied()
    }

    pub async fn set(&self, id: Uuid, session: Session) {
        self.inner.write().await.insert(id, session);
    }

    pub async fn remove(&self, id: Uuid) {
        self.inner.write().await.remove(&id);
    }
}

/// The caller's session, resolved from the `sid` cookie or freshly
/// minted. New sessions are only written to the store once a handler
/// binds a player or grants admin.
pub struct SessionHandle {
    pub id: Uuid,
    pub session: Session,
    store: SessionStore,
}

impl SessionHandle {
    pub async fn bind_player(&mut self, player_id: i64) {
        self.session.player_id = Some(player_id);
        self.store.set(self.id, self.session).await;
    }

    pub async fn grant_admin(&mut self) {
        self.session.is_admin = true;
        self.store.set(self.id, self.session).await;
    }

    /// End the session server-side.
    pub async fn clear(&self) {
        self.store.remove(self.id).await;
    }

    /// `Set-Cookie` value carrying this session's token.
    pub fn cookie(&self) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, self.id
        )
    }

    /// `Set-Cookie` value that drops the token client-side.
    pub fn expired_cookie() -> String {
        format!("{}=; Path=/; Max-Age=0", SESSION_COOKIE)
    }
}

fn cookie_token(parts: &Parts) -> Option<Uuid> {
    let header = parts.headers.get(COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            Uuid::parse_str(value.trim()).ok()
        } else {
            None
        }
    })
}

#[async_trait]
impl FromRequestParts<AppState> for SessionHandle {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(id) = cookie_token(parts) {
            if let Some(session) = state.sessions.get(id).await {
                return Ok(Self {
                    id,
                    session,
                    store: state.sessions.clone(),
                });
            }
        }
        Ok(Self {
            id: Uuid::new_v4(),
            session: Session::default(),
            store: state.sessions.clone(),
        })
    }
}

/// Gate for routes that require a session-bound player.
pub struct PlayerSession {
    pub handle: SessionHandle,
    pub player_id: i64,
}

#[async_trait]
impl FromRequestParts<AppState> for PlayerSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let handle = SessionHandle::from_request_parts(parts, state).await?;
        match handle.session.player_id {
            Some(player_id) => Ok(Self { handle, player_id }),
            None => Err(ApiError::Forbidden("No player session".to_string())),
        }
    }
}

/// Gate for admin-only routes.
pub struct AdminSession(pub SessionHandle);

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let handle = SessionHandle::from_request_parts(parts, state).await?;
        if handle.session.is_admin {
            Ok(Self(handle))
        } else {
            Err(ApiError::Forbidden("Admin access required".to_string()))
        }
    }
}
