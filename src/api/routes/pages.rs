//! Read-only views rendered from the current document state.
//!
//! Every handler re-reads the store so views never serve a cached
//! document. Views that are redirect targets echo the `error` query
//! parameter so the page can surface it.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::session::{AdminSession, PlayerSession};
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{LeagueDoc, Leaderboards, Match, Player, Record, Team};

#[derive(Debug, Default, Deserialize)]
pub struct ViewParams {
    pub error: Option<String>,
}

// ── Public pages ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GroupSummary {
    pub id: i64,
    pub name: String,
    pub team_count: usize,
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub live_link: String,
    pub matches: Vec<Match>,
    pub groups: Vec<GroupSummary>,
}

pub async fn home(State(state): State<AppState>) -> Json<HomeView> {
    let doc = state.store.load();
    Json(HomeView {
        groups: doc
            .groups
            .iter()
            .map(|g| GroupSummary {
                id: g.id,
                name: g.name.clone(),
                team_count: g.teams.len(),
            })
            .collect(),
        live_link: doc.live_link,
        matches: doc.matches,
    })
}

#[derive(Debug, Serialize)]
pub struct MarketView {
    pub players: Vec<Player>,
    pub error: Option<String>,
}

/// The public market lists verified players only.
pub async fn market(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Json<MarketView> {
    let doc = state.store.load();
    Json(MarketView {
        players: doc.market_players().cloned().collect(),
        error: params.error,
    })
}

#[derive(Debug, Serialize)]
pub struct MatchesView {
    pub matches: Vec<Match>,
}

pub async fn matches(State(state): State<AppState>) -> Json<MatchesView> {
    let doc = state.store.load();
    Json(MatchesView {
        matches: doc.matches,
    })
}

#[derive(Debug, Serialize)]
pub struct MetricsView {
    pub leaderboards: Leaderboards,
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsView> {
    let doc = state.store.load();
    Json(MetricsView {
        leaderboards: doc.leaderboards,
    })
}

#[derive(Debug, Serialize)]
pub struct RecordsView {
    pub records: Vec<Record>,
}

pub async fn league_records(State(state): State<AppState>) -> Json<RecordsView> {
    let doc = state.store.load();
    Json(RecordsView {
        records: doc.records,
    })
}

#[derive(Debug, Serialize)]
pub struct TeamView {
    pub group_id: i64,
    pub group_name: String,
    pub team_index: usize,
    pub team: Team,
}

pub async fn team(
    State(state): State<AppState>,
    Path((group_id, team_index)): Path<(i64, usize)>,
) -> Result<Json<TeamView>, ApiError> {
    let doc = state.store.load();
    let group = doc
        .find_group(group_id)
        .ok_or_else(|| ApiError::NotFound(format!("Group {}", group_id)))?;
    let team = group
        .teams
        .get(team_index)
        .ok_or_else(|| ApiError::NotFound(format!("Team {} in group {}", team_index, group_id)))?;
    Ok(Json(TeamView {
        group_id,
        group_name: group.name.clone(),
        team_index,
        team: team.clone(),
    }))
}

// ── Session-gated pages ──────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LoginView {
    pub error: Option<String>,
}

pub async fn admin_login(Query(params): Query<ViewParams>) -> Json<LoginView> {
    Json(LoginView {
        error: params.error,
    })
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub player: Player,
    pub error: Option<String>,
}

/// The caller's own profile.
pub async fn profile(
    State(state): State<AppState>,
    session: PlayerSession,
    Query(params): Query<ViewParams>,
) -> Result<Json<ProfileView>, ApiError> {
    let doc = state.store.load();
    let player = doc
        .find_player(session.player_id)
        .ok_or_else(|| ApiError::NotFound(format!("Player {}", session.player_id)))?;
    Ok(Json(ProfileView {
        player: player.clone(),
        error: params.error,
    }))
}

#[derive(Debug, Serialize)]
pub struct AdminView {
    pub document: LeagueDoc,
    pub error: Option<String>,
}

/// The admin console sees the whole document.
pub async fn admin(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(params): Query<ViewParams>,
) -> Json<AdminView> {
    Json(AdminView {
        document: state.store.load(),
        error: params.error,
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::super::testutil::{admin_cookie, get_json, post_form, test_app};

    #[tokio::test]
    async fn test_home_renders_empty_document() {
        let app = test_app();
        let (status, json) = get_json(app.router(), "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["live_link"], "");
        assert!(json["matches"].as_array().unwrap().is_empty());
        assert!(json["groups"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_metrics_and_records_render_empty_lists() {
        let app = test_app();

        let (status, json) = get_json(app.router(), "/metrics", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["leaderboards"]["scorers"].as_array().unwrap().is_empty());

        let (status, json) = get_json(app.router(), "/league-records", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["records"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_admin_login_echoes_error_param() {
        let app = test_app();
        let (status, json) =
            get_json(app.router(), "/admin-login?error=WRONG+KEY%21", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["error"], "WRONG KEY!");
    }

    #[tokio::test]
    async fn test_profile_requires_player_session() {
        let app = test_app();
        let (status, _) = get_json(app.router(), "/profile", None).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_page_requires_admin_session() {
        let app = test_app();

        let (status, json) = get_json(app.router(), "/admin", None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["error"]["code"], "FORBIDDEN");

        let cookie = admin_cookie(&app).await;
        let (status, json) = get_json(app.router(), "/admin", Some(&cookie)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["document"]["players"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_team_view_and_not_found() {
        let app = test_app();
        let admin = admin_cookie(&app).await;
        post_form(app.router(), "/admin/add-group", "name=Group+A", Some(&admin)).await;

        let (_, json) = get_json(app.router(), "/admin", Some(&admin)).await;
        let group_id = json["document"]["groups"][0]["id"].as_i64().unwrap();

        post_form(
            app.router(),
            "/admin/update-team",
            &format!("groupId={}&teamIndex=&teamName=Reds&logo=", group_id),
            Some(&admin),
        )
        .await;

        let uri = format!("/team/{}/0", group_id);
        let (status, json) = get_json(app.router(), &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["group_name"], "Group A");
        assert_eq!(json["team"]["name"], "Reds");

        let uri = format!("/team/{}/5", group_id);
        let (status, _) = get_json(app.router(), &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get_json(app.router(), "/team/404/0", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
