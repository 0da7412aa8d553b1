use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::{NightId, NightStatus, PlayerId, SeasonId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    pub player_id: PlayerId,
    pub name: String,
    pub total_buy_in_cents: i64,
    pub total_profit_cents: i64,
    pub roi: Option<f64>,
    pub nights_won: u32,
    pub podium_points: u32,
    pub win_rate: f64,
    pub nights_in_profit: u32,
    pub total_games: u32,
    pub consistency: f64,
    pub season_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NightRow {
    pub game_id: NightId,
    pub date: NaiveDateTime,
    pub status: NightStatus,
    pub pot_cents: i64,
    pub players_count: usize,
    pub biggest_winner_name: Option<String>,
    pub biggest_winner_profit_cents: Option<i64>,
    pub biggest_loser_name: Option<String>,
    pub biggest_loser_loss_cents: Option<i64>,
    pub rebuys_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRow {
    pub season_id: SeasonId,
    pub name: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
    pub nights: usize,
    pub total_pot_cents: i64,
    pub avg_pot_cents: i64,
    pub players_participated: usize,
    pub most_profitable_player_name: Option<String>,
    pub most_profitable_profit_cents: Option<i64>,
    pub best_roi_player_name: Option<String>,
    pub best_roi: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDetail {
    pub season: SeasonRow,
    pub total_games: u32,
    pub total_buy_in_cents: i64,
    pub total_cash_out_cents: i64,
    pub total_profit_cents: i64,
    pub top_winner: Option<PlayerRow>,
    pub best_roi: Option<PlayerRow>,
    pub best_performer: Option<PlayerRow>,
    pub players: Vec<PlayerRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRow {
    pub player_id: PlayerId,
    pub name: String,
    pub rating: f64,
    pub change_last_n: f64,
    pub nights_rated: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaterRow {
    pub player_id: PlayerId,
    pub name: String,
    pub heater_night_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPointRow {
    pub game_id: NightId,
    pub date: NaiveDateTime,
    pub cumulative_profit_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeriesRow {
    pub player_id: PlayerId,
    pub name: String,
    pub points: Vec<TrendPointRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerNightRow {
    pub game_id: NightId,
    pub date: NaiveDateTime,
    pub profit_cents: i64,
    pub rank: usize,
    pub night_score: f64,
    pub podium_points: u32,
    pub is_podium: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonRow {
    pub season_id: SeasonId,
    pub season_name: String,
    pub stats: PlayerRow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub player: PlayerRow,
    pub rolling_nights: usize,
    pub rolling_form: PlayerRow,
    pub rating: Option<RatingRow>,
    pub heater_night_count: u32,
    pub seasons: Vec<PlayerSeasonRow>,
    pub nights: Vec<PlayerNightRow>,
}
