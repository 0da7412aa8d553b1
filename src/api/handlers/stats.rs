use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use serde::Serialize;
use std::sync::Arc;

use super::AppState;
use crate::domain::{FilterParams, GroupId, PlayerId, SeasonId, StatsFilter};
use crate::services::{ReportService, StatsReport};

/// Loads the group's report and renders one view of it
///
/// A missing group, or a view that fails with a not-found message, answers 404.
fn with_report<T, F>(state: &AppState, group_id: GroupId, filter: StatsFilter, view: F) -> Response
where
    T: Serialize,
    F: FnOnce(&StatsReport) -> Result<T, String>,
{
    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let service = ReportService::new(state.config.stats.clone());
    let report = match service.report(&conn, group_id, filter) {
        Ok(Some(report)) => report,
        Ok(None) => return (StatusCode::NOT_FOUND, format!("Group {} not found", group_id)).into_response(),
        Err(e) => {
            error!("Report for group {} failed: {:?}", group_id, e);
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response();
        }
    };

    match view(&report) {
        Ok(body) => Json(body).into_response(),
        Err(message) => (StatusCode::NOT_FOUND, message).into_response(),
    }
}

pub async fn get_players(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<GroupId>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    with_report(&state, group_id, params.parse(), |report| Ok(report.players()))
}

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<GroupId>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    with_report(&state, group_id, params.parse(), |report| Ok(report.leaderboard()))
}

pub async fn get_nights(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<GroupId>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    with_report(&state, group_id, params.parse(), |report| Ok(report.nights()))
}

pub async fn get_seasons(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<GroupId>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    with_report(&state, group_id, params.parse(), |report| Ok(report.seasons()))
}

pub async fn get_season_detail(
    State(state): State<Arc<AppState>>,
    Path((group_id, season_id)): Path<(GroupId, SeasonId)>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    let filter = StatsFilter {
        season_id: Some(season_id),
        ..params.parse()
    };
    with_report(&state, group_id, filter, |report| {
        report
            .season_detail(season_id)
            .ok_or_else(|| format!("Season {} not found", season_id))
    })
}

pub async fn get_ratings(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<GroupId>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    with_report(&state, group_id, params.parse(), |report| Ok(report.ratings()))
}

pub async fn get_heaters(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<GroupId>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    with_report(&state, group_id, params.parse(), |report| Ok(report.heaters()))
}

pub async fn get_awards(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<GroupId>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    with_report(&state, group_id, params.parse(), |report| Ok(report.awards()))
}

pub async fn get_rolling(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<GroupId>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    with_report(&state, group_id, params.parse(), |report| Ok(report.rolling()))
}

pub async fn get_trend(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<GroupId>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    with_report(&state, group_id, params.parse(), |report| Ok(report.trend()))
}

pub async fn get_player_profile(
    State(state): State<Arc<AppState>>,
    Path((group_id, player_id)): Path<(GroupId, PlayerId)>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    with_report(&state, group_id, params.parse(), |report| {
        report
            .player_profile(player_id)
            .ok_or_else(|| format!("Player {} not found", player_id))
    })
}
