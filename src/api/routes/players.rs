//! Player lifecycle: registration, self-service profile, and admin
//! curation of the market.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::api::session::{AdminSession, PlayerSession, SessionHandle};
use crate::api::state::AppState;
use crate::api::{redirect_with_error, ApiError};
use crate::models::{Player, ProfileUpdate, StatSheet};
use crate::storage::GatewayError;

use super::{finish, parse_count};

// ── Self-service ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,

    #[serde(default)]
    pub discord: String,

    #[serde(default)]
    pub bio: String,

    #[serde(default, rename = "cardImage")]
    pub card_image: String,
}

/// Register a new (unverified) player and bind it to the caller's
/// session.
pub async fn register(
    State(state): State<AppState>,
    mut session: SessionHandle,
    Form(form): Form<RegisterForm>,
) -> Result<Response, ApiError> {
    let name = form.name.trim().to_string();
    if name.is_empty() {
        return Ok(redirect_with_error("/market", "Name is required").into_response());
    }

    let player = Player::new(name)
        .with_discord(form.discord)
        .with_bio(form.bio)
        .with_card_image(form.card_image);

    match state.store.mutate(|doc| doc.register_player(player)).await {
        Ok(id) => {
            session.bind_player(id).await;
            Ok((
                AppendHeaders([(SET_COOKIE, session.cookie())]),
                Redirect::to("/market"),
            )
                .into_response())
        }
        Err(GatewayError::Rejected(e)) => {
            Ok(redirect_with_error("/market", &e.to_string()).into_response())
        }
        Err(GatewayError::Storage(e)) => Err(ApiError::Internal(e.to_string())),
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub name: String,

    #[serde(default)]
    pub discord: String,

    #[serde(default)]
    pub bio: String,

    #[serde(default, rename = "cardImage")]
    pub card_image: String,
}

/// Overwrite the caller's own profile fields.
pub async fn update_profile(
    State(state): State<AppState>,
    session: PlayerSession,
    Form(form): Form<ProfileForm>,
) -> Result<Redirect, ApiError> {
    let update = ProfileUpdate {
        name: form.name,
        discord: form.discord,
        bio: form.bio,
        card_image: form.card_image,
    };
    finish(
        state
            .store
            .mutate(|doc| {
                doc.update_profile(session.player_id, update);
                Ok(())
            })
            .await,
        "/profile",
        "/profile",
    )
}

/// Delete the caller's own player and end the session.
pub async fn delete_profile(
    State(state): State<AppState>,
    session: PlayerSession,
) -> Result<Response, ApiError> {
    state
        .store
        .mutate(|doc| {
            doc.delete_player(session.player_id);
            Ok(())
        })
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    session.handle.clear().await;
    Ok((
        AppendHeaders([(SET_COOKIE, SessionHandle::expired_cookie())]),
        Redirect::to("/"),
    )
        .into_response())
}

// ── Admin curation ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PlayerIdForm {
    #[serde(rename = "playerId")]
    pub player_id: i64,
}

/// Approve a registered player into the market.
pub async fn approve_player(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<PlayerIdForm>,
) -> Result<Redirect, ApiError> {
    finish(
        state
            .store
            .mutate(|doc| {
                doc.approve_player(form.player_id);
                Ok(())
            })
            .await,
        "/admin",
        "/admin",
    )
}

/// Remove a player entirely.
pub async fn delete_player(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<PlayerIdForm>,
) -> Result<Redirect, ApiError> {
    finish(
        state
            .store
            .mutate(|doc| {
                doc.delete_player(form.player_id);
                Ok(())
            })
            .await,
        "/admin",
        "/admin",
    )
}

#[derive(Debug, Deserialize)]
pub struct MarketPlayerForm {
    pub name: String,

    #[serde(default)]
    pub goals: String,

    #[serde(default)]
    pub assists: String,

    #[serde(default)]
    pub saves: String,

    #[serde(default)]
    pub mvps: String,

    #[serde(default)]
    pub bio: String,
}

/// Overwrite a market player's stat sheet. The player is addressed by
/// exact name.
pub async fn update_market_player(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<MarketPlayerForm>,
) -> Result<Redirect, ApiError> {
    let sheet = StatSheet {
        goals: parse_count(&form.goals),
        assists: parse_count(&form.assists),
        saves: parse_count(&form.saves),
        mvps: parse_count(&form.mvps),
        bio: form.bio,
    };
    finish(
        state
            .store
            .mutate(|doc| doc.update_player_stats(&form.name, sheet))
            .await,
        "/admin",
        "/admin",
    )
}
