pub mod aggregation;
pub mod awards;
pub mod eligibility;
pub mod heater;
pub mod night;
pub mod nights;
pub mod rolling;
pub mod seasons;
pub mod trend;
pub mod types;

pub use aggregation::{aggregate, aggregate_player, sort_by_profit};
pub use awards::{Awards, calculate_awards};
pub use eligibility::EligibilityThresholds;
pub use heater::{HeaterCount, heater_index};
pub use night::{evaluate_ledger, evaluate_night, performance_score};
pub use nights::{NightSummary, summarize_nights};
pub use rolling::{player_window, rolling_form};
pub use seasons::{SeasonSummary, summarize_season, summarize_seasons};
pub use trend::{TrendSeries, profit_trend};
pub use types::{NightResult, PlayerPeriodStats};

/// First candidate holding the maximum key
///
/// Later candidates with an equal key never displace an earlier one, so the
/// caller's iteration order is the tie-break.
pub(crate) fn leader_by<T, K, F>(candidates: impl IntoIterator<Item = T>, key: F) -> Option<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut best: Option<(T, K)> = None;
    for candidate in candidates {
        let candidate_key = key(&candidate);
        match &best {
            Some((_, best_key)) if candidate_key <= *best_key => {}
            _ => best = Some((candidate, candidate_key)),
        }
    }
    best.map(|(candidate, _)| candidate)
}
