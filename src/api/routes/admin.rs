//! Admin console: login, live stream link, matches, records, groups,
//! teams, rosters, and leaderboards.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::api::session::{AdminSession, SessionHandle};
use crate::api::state::AppState;
use crate::api::{redirect_with_error, ApiError};
use crate::models::{Match, Record, StatCategory, TeamUpdate};

use super::{finish, parse_count, parse_index};

// ── Login ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub key: String,
}

/// Grant the admin flag when the shared key matches.
pub async fn login(
    State(state): State<AppState>,
    mut session: SessionHandle,
    Form(form): Form<LoginForm>,
) -> Response {
    if form.key == *state.admin_key {
        session.grant_admin().await;
        (
            AppendHeaders([(SET_COOKIE, session.cookie())]),
            Redirect::to("/admin"),
        )
            .into_response()
    } else {
        redirect_with_error("/admin-login", "WRONG KEY!").into_response()
    }
}

// ── Live link ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LiveForm {
    pub link: String,
}

pub async fn set_live_link(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<LiveForm>,
) -> Result<Redirect, ApiError> {
    finish(
        state
            .store
            .mutate(|doc| {
                doc.set_live_link(&form.link);
                Ok(())
            })
            .await,
        "/admin",
        "/admin",
    )
}

// ── Matches and records ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchForm {
    pub home: String,
    pub away: String,

    #[serde(default)]
    pub kickoff: String,

    #[serde(default)]
    pub competition: String,
}

pub async fn add_match(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<MatchForm>,
) -> Result<Redirect, ApiError> {
    let m = Match::new(form.home, form.away)
        .with_kickoff(form.kickoff)
        .with_competition(form.competition);
    finish(
        state
            .store
            .mutate(|doc| {
                doc.add_match(m);
                Ok(())
            })
            .await,
        "/admin",
        "/admin",
    )
}

#[derive(Debug, Deserialize)]
pub struct RecordForm {
    pub title: String,

    #[serde(default)]
    pub holder: String,

    #[serde(default)]
    pub detail: String,
}

pub async fn add_record(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<RecordForm>,
) -> Result<Redirect, ApiError> {
    let record = Record::new(form.title)
        .with_holder(form.holder)
        .with_detail(form.detail);
    finish(
        state
            .store
            .mutate(|doc| {
                doc.add_record(record);
                Ok(())
            })
            .await,
        "/admin",
        "/admin",
    )
}

#[derive(Debug, Deserialize)]
pub struct IdForm {
    pub id: i64,
}

pub async fn delete_record(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<IdForm>,
) -> Result<Redirect, ApiError> {
    finish(
        state
            .store
            .mutate(|doc| {
                doc.delete_record(form.id);
                Ok(())
            })
            .await,
        "/admin",
        "/admin",
    )
}

// ── Groups, teams, rosters ───────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GroupForm {
    pub name: String,
}

pub async fn add_group(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<GroupForm>,
) -> Result<Redirect, ApiError> {
    finish(
        state
            .store
            .mutate(|doc| {
                doc.add_group(form.name);
                Ok(())
            })
            .await,
        "/admin",
        "/admin",
    )
}

#[derive(Debug, Deserialize)]
pub struct GroupIdForm {
    #[serde(rename = "groupId")]
    pub group_id: i64,
}

pub async fn delete_group(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<GroupIdForm>,
) -> Result<Redirect, ApiError> {
    finish(
        state
            .store
            .mutate(|doc| {
                doc.delete_group(form.group_id);
                Ok(())
            })
            .await,
        "/admin",
        "/admin",
    )
}

/// The team form doubles as "update standings" (valid `teamIndex`) and
/// "append new team" (blank index + non-empty `teamName`). Numeric
/// fields are coerced best-effort, defaulting to zero.
#[derive(Debug, Deserialize)]
pub struct TeamForm {
    #[serde(rename = "groupId")]
    pub group_id: i64,

    #[serde(default, rename = "teamIndex")]
    pub team_index: String,

    #[serde(default, rename = "teamName")]
    pub team_name: String,

    #[serde(default)]
    pub logo: String,

    #[serde(default)]
    pub mp: String,

    #[serde(default)]
    pub wins: String,

    #[serde(default)]
    pub loses: String,

    #[serde(default)]
    pub pts: String,
}

pub async fn update_team(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<TeamForm>,
) -> Result<Redirect, ApiError> {
    let team_index = parse_index(&form.team_index);
    let update = TeamUpdate {
        team_name: form.team_name,
        logo: form.logo,
        mp: parse_count(&form.mp),
        wins: parse_count(&form.wins),
        loses: parse_count(&form.loses),
        pts: parse_count(&form.pts),
    };
    finish(
        state
            .store
            .mutate(|doc| {
                doc.update_team(form.group_id, team_index, update);
                Ok(())
            })
            .await,
        "/admin",
        "/admin",
    )
}

#[derive(Debug, Deserialize)]
pub struct RosterAddForm {
    #[serde(rename = "groupId")]
    pub group_id: i64,

    #[serde(default, rename = "teamIndex")]
    pub team_index: String,

    #[serde(rename = "playerName")]
    pub player_name: String,

    #[serde(default, rename = "isManager")]
    pub is_manager: Option<String>,
}

pub async fn add_to_roster(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<RosterAddForm>,
) -> Result<Redirect, ApiError> {
    let team_index = parse_index(&form.team_index);
    let is_manager = matches!(form.is_manager.as_deref(), Some("on" | "true" | "1"));
    finish(
        state
            .store
            .mutate(|doc| doc.add_to_roster(form.group_id, team_index, &form.player_name, is_manager))
            .await,
        "/admin",
        "/admin",
    )
}

#[derive(Debug, Deserialize)]
pub struct RosterDeleteForm {
    #[serde(rename = "groupId")]
    pub group_id: i64,

    #[serde(default, rename = "teamIndex")]
    pub team_index: String,

    #[serde(default, rename = "playerIndex")]
    pub player_index: String,
}

pub async fn delete_from_roster(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<RosterDeleteForm>,
) -> Result<Redirect, ApiError> {
    let (Some(team_index), Some(player_index)) =
        (parse_index(&form.team_index), parse_index(&form.player_index))
    else {
        return Ok(Redirect::to("/admin"));
    };
    finish(
        state
            .store
            .mutate(|doc| {
                doc.delete_from_roster(form.group_id, team_index, player_index);
                Ok(())
            })
            .await,
        "/admin",
        "/admin",
    )
}

// ── Leaderboards ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatForm {
    pub category: String,

    #[serde(default, rename = "statIndex")]
    pub stat_index: String,

    #[serde(rename = "playerName")]
    pub player_name: String,

    #[serde(default)]
    pub value: String,
}

pub async fn update_stat(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<StatForm>,
) -> Result<Redirect, ApiError> {
    // Unknown categories no-op.
    let Some(category) = StatCategory::parse(&form.category) else {
        return Ok(Redirect::to("/admin"));
    };
    let index = parse_index(&form.stat_index);
    let value = parse_count(&form.value);
    finish(
        state
            .store
            .mutate(|doc| {
                doc.update_stat(category, index, form.player_name, value);
                Ok(())
            })
            .await,
        "/admin",
        "/admin",
    )
}

#[derive(Debug, Deserialize)]
pub struct StatDeleteForm {
    pub category: String,

    #[serde(default, rename = "statIndex")]
    pub stat_index: String,
}

pub async fn delete_stat(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<StatDeleteForm>,
) -> Result<Redirect, ApiError> {
    let (Some(category), Some(index)) =
        (StatCategory::parse(&form.category), parse_index(&form.stat_index))
    else {
        return Ok(Redirect::to("/admin"));
    };
    finish(
        state
            .store
            .mutate(|doc| {
                doc.delete_stat(category, index);
                Ok(())
            })
            .await,
        "/admin",
        "/admin",
    )
}
