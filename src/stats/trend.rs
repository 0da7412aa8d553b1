use std::collections::HashMap;

use chrono::NaiveDateTime;

use super::types::{NightResult, PlayerPeriodStats};
use crate::domain::{Night, NightId, PlayerId};

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub night_id: NightId,
    pub scheduled_at: NaiveDateTime,
    pub cumulative_profit_cents: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub player_id: PlayerId,
    pub points: Vec<TrendPoint>,
}

/// Cumulative profit curves for the first `top_n` leaders
///
/// `nights` must be chronological; every series gets one point per night,
/// flat where the player sat out.
pub fn profit_trend(
    nights: &[Night],
    results: &[NightResult],
    leaders: &[PlayerPeriodStats],
    top_n: usize,
) -> Vec<TrendSeries> {
    let profits: HashMap<(NightId, PlayerId), i64> = results
        .iter()
        .map(|r| ((r.night_id, r.player_id), r.profit_cents))
        .collect();

    leaders
        .iter()
        .take(top_n)
        .map(|leader| {
            let mut running = 0;
            let points = nights
                .iter()
                .map(|night| {
                    running += profits.get(&(night.id, leader.player_id)).copied().unwrap_or(0);
                    TrendPoint {
                        night_id: night.id,
                        scheduled_at: night.scheduled_at,
                        cumulative_profit_cents: running,
                    }
                })
                .collect();
            TrendSeries {
                player_id: leader.player_id,
                points,
            }
        })
        .collect()
}
