use super::aggregation::aggregate;
use super::eligibility::EligibilityThresholds;
use super::leader_by;
use super::types::{NightResult, PlayerPeriodStats};
use crate::domain::{Ledger, Season};

/// Everything known about one season within the current scope
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonSummary {
    pub season: Season,
    pub nights: usize,
    /// Participations across all nights of the season
    pub total_games: u32,
    pub total_buy_in_cents: i64,
    pub total_cash_out_cents: i64,
    pub total_profit_cents: i64,
    pub players_participated: usize,
    /// Eligible players who played the season, in player id order
    pub players: Vec<PlayerPeriodStats>,
    pub top_winner: Option<PlayerPeriodStats>,
    pub best_roi: Option<PlayerPeriodStats>,
    pub best_performer: Option<PlayerPeriodStats>,
}

impl SeasonSummary {
    pub fn total_pot_cents(&self) -> i64 {
        self.total_buy_in_cents
    }

    pub fn avg_pot_cents(&self) -> i64 {
        if self.nights > 0 {
            self.total_pot_cents() / self.nights as i64
        } else {
            0
        }
    }
}

pub fn summarize_season(
    ledger: &Ledger,
    season: &Season,
    results: &[NightResult],
    thresholds: &EligibilityThresholds,
) -> SeasonSummary {
    let nights = ledger
        .nights
        .iter()
        .filter(|n| n.season_id == Some(season.id))
        .count();

    let participants: Vec<PlayerPeriodStats> = aggregate(
        &ledger.players,
        results.iter().filter(|r| r.season_id == Some(season.id)),
    )
    .into_iter()
    .filter(PlayerPeriodStats::has_played)
    .collect();

    let total_games = participants.iter().map(|p| p.total_games).sum();
    let total_buy_in_cents = participants.iter().map(|p| p.total_buy_in_cents).sum();
    let total_cash_out_cents = participants.iter().map(|p| p.total_cash_out_cents).sum();
    let total_profit_cents = participants.iter().map(|p| p.total_profit_cents).sum();
    let players_participated = participants.len();

    let players = thresholds.apply(participants);

    let top_winner = leader_by(players.iter(), |p| p.total_profit_cents).cloned();
    let best_roi = leader_by(
        players.iter().filter_map(|p| p.roi().map(|roi| (p, roi))),
        |(_, roi)| *roi,
    )
    .map(|(p, _)| p.clone());
    let best_performer = leader_by(
        players.iter().filter(|p| p.total_buy_in_cents > 0),
        |p| p.season_score(),
    )
    .cloned();

    SeasonSummary {
        season: season.clone(),
        nights,
        total_games,
        total_buy_in_cents,
        total_cash_out_cents,
        total_profit_cents,
        players_participated,
        players,
        top_winner,
        best_roi,
        best_performer,
    }
}

/// One summary per season in the ledger, empty seasons included
pub fn summarize_seasons(
    ledger: &Ledger,
    results: &[NightResult],
    thresholds: &EligibilityThresholds,
) -> Vec<SeasonSummary> {
    ledger
        .seasons
        .iter()
        .map(|season| summarize_season(ledger, season, results, thresholds))
        .collect()
}
