use chrono::NaiveDateTime;
use serde::Serialize;

use super::night::performance_score;
use crate::domain::{NightId, PlayerId, SeasonId};

/// One player's evaluated outcome at one night
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NightResult {
    pub night_id: NightId,
    pub season_id: Option<SeasonId>,
    pub scheduled_at: NaiveDateTime,
    pub player_id: PlayerId,
    pub buy_in_cents: i64,
    pub cash_out_cents: i64,
    pub profit_cents: i64,
    pub rank: usize,
    pub night_score: f64,
    pub podium_points: u32,
}

impl NightResult {
    pub fn is_podium(&self) -> bool {
        self.podium_points > 0
    }

    pub fn roi(&self) -> Option<f64> {
        ratio(self.profit_cents, self.buy_in_cents)
    }
}

/// Running totals for one player over one scope (all-time, season, window)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerPeriodStats {
    pub player_id: PlayerId,
    pub total_games: u32,
    pub total_buy_in_cents: i64,
    pub total_cash_out_cents: i64,
    pub total_profit_cents: i64,
    pub nights_won: u32,
    pub podium_points: u32,
    pub nights_in_profit: u32,
}

impl PlayerPeriodStats {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    pub fn record(&mut self, result: &NightResult) {
        self.total_games += 1;
        self.total_buy_in_cents += result.buy_in_cents;
        self.total_cash_out_cents += result.cash_out_cents;
        self.total_profit_cents += result.profit_cents;
        self.podium_points += result.podium_points;
        if result.rank == 1 {
            self.nights_won += 1;
        }
        if result.profit_cents > 0 {
            self.nights_in_profit += 1;
        }
    }

    pub fn has_played(&self) -> bool {
        self.total_games > 0
    }

    /// `None` when nothing was ever bought in
    pub fn roi(&self) -> Option<f64> {
        if self.total_buy_in_cents > 0 {
            ratio(self.total_profit_cents, self.total_buy_in_cents)
        } else {
            None
        }
    }

    pub fn win_rate(&self) -> f64 {
        share(self.nights_won, self.total_games)
    }

    pub fn consistency(&self) -> f64 {
        share(self.nights_in_profit, self.total_games)
    }

    pub fn season_score(&self) -> f64 {
        performance_score(self.total_profit_cents, self.total_buy_in_cents)
    }
}

fn ratio(numerator: i64, denominator: i64) -> Option<f64> {
    if denominator > 0 {
        Some(numerator as f64 / denominator as f64)
    } else {
        None
    }
}

fn share(count: u32, total: u32) -> f64 {
    if total > 0 {
        count as f64 / total as f64
    } else {
        0.0
    }
}
