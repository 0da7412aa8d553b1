use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    stats::{
        get_awards, get_heaters, get_leaderboard, get_nights, get_player_profile, get_players, get_ratings,
        get_rolling, get_season_detail, get_seasons, get_trend,
    },
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/groups/:group_id/players", get(get_players))
        .route("/api/groups/:group_id/players/:player_id", get(get_player_profile))
        .route("/api/groups/:group_id/leaderboard", get(get_leaderboard))
        .route("/api/groups/:group_id/nights", get(get_nights))
        .route("/api/groups/:group_id/seasons", get(get_seasons))
        .route("/api/groups/:group_id/seasons/:season_id", get(get_season_detail))
        .route("/api/groups/:group_id/ratings", get(get_ratings))
        .route("/api/groups/:group_id/heaters", get(get_heaters))
        .route("/api/groups/:group_id/awards", get(get_awards))
        .route("/api/groups/:group_id/rolling", get(get_rolling))
        .route("/api/groups/:group_id/trend", get(get_trend))
        .with_state(state)
}
