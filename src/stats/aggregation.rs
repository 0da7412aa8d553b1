use std::collections::HashMap;

use super::types::{NightResult, PlayerPeriodStats};
use crate::domain::{Player, PlayerId};

/// Folds night results into one row per roster player
///
/// Rows follow roster order and every roster player gets one, even without a
/// single night in scope. Results for players outside the roster are ignored.
pub fn aggregate<'a, I>(roster: &[Player], results: I) -> Vec<PlayerPeriodStats>
where
    I: IntoIterator<Item = &'a NightResult>,
{
    let mut rows: Vec<PlayerPeriodStats> = roster.iter().map(|p| PlayerPeriodStats::new(p.id)).collect();
    let index: HashMap<PlayerId, usize> = roster
        .iter()
        .enumerate()
        .map(|(idx, p)| (p.id, idx))
        .collect();

    for result in results {
        if let Some(&idx) = index.get(&result.player_id) {
            rows[idx].record(result);
        }
    }

    rows
}

/// Folds the given results of a single player
pub fn aggregate_player<'a, I>(player_id: PlayerId, results: I) -> PlayerPeriodStats
where
    I: IntoIterator<Item = &'a NightResult>,
{
    results
        .into_iter()
        .filter(|r| r.player_id == player_id)
        .fold(PlayerPeriodStats::new(player_id), |mut stats, result| {
            stats.record(result);
            stats
        })
}

/// Orders rows for leaderboard display: profit first, then id
pub fn sort_by_profit(rows: &mut [PlayerPeriodStats]) {
    rows.sort_by(|a, b| {
        b.total_profit_cents
            .cmp(&a.total_profit_cents)
            .then(a.player_id.cmp(&b.player_id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::night::podium_points;
    use chrono::NaiveDateTime;

    fn player(id: PlayerId) -> Player {
        Player {
            id,
            name: format!("Player {}", id),
            is_guest: false,
        }
    }

    fn result(night_id: i64, player_id: PlayerId, buy_in: i64, profit: i64, rank: usize) -> NightResult {
        NightResult {
            night_id,
            season_id: None,
            scheduled_at: NaiveDateTime::default(),
            player_id,
            buy_in_cents: buy_in,
            cash_out_cents: buy_in + profit,
            profit_cents: profit,
            rank,
            night_score: 0.0,
            podium_points: podium_points(rank),
        }
    }

    #[test]
    fn test_totals_and_derived_ratios() {
        let results = vec![
            result(1, 1, 2000, 2000, 1),
            result(2, 1, 2000, -500, 2),
            result(3, 1, 1000, 0, 4),
            result(3, 2, 1000, 300, 1),
        ];
        let rows = aggregate(&[player(1), player(2)], &results);

        let first = &rows[0];
        assert_eq!(first.total_games, 3);
        assert_eq!(first.total_buy_in_cents, 5000);
        assert_eq!(first.total_cash_out_cents, 6500);
        assert_eq!(first.total_profit_cents, 1500);
        assert_eq!(first.nights_won, 1);
        assert_eq!(first.podium_points, 5);
        assert_eq!(first.nights_in_profit, 1);
        assert_eq!(first.roi(), Some(0.3));
        assert!((first.win_rate() - 1.0 / 3.0).abs() < 1e-12);
        assert!((first.consistency() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(rows[1].nights_won, 1);
    }

    #[test]
    fn test_roster_players_without_nights_get_zero_rows() {
        let rows = aggregate(&[player(1), player(2), player(3)], &[result(1, 2, 1000, 100, 1)]);

        assert_eq!(rows.len(), 3);
        let idle = &rows[2];
        assert_eq!(idle.player_id, 3);
        assert!(!idle.has_played());
        assert_eq!(idle.roi(), None);
        assert_eq!(idle.win_rate(), 0.0);
        assert_eq!(idle.consistency(), 0.0);
        assert_eq!(idle.season_score(), 0.0);
    }

    #[test]
    fn test_roi_is_none_only_without_buy_in() {
        let rows = aggregate(&[player(1)], &[result(1, 1, 0, 800, 1), result(2, 1, 0, -200, 2)]);
        assert_eq!(rows[0].total_buy_in_cents, 0);
        assert_eq!(rows[0].roi(), None);
        assert_eq!(rows[0].total_games, 2);
    }

    #[test]
    fn test_single_player_fold_matches_roster_fold() {
        let results = vec![result(1, 1, 2000, 2000, 1), result(1, 2, 2000, -2000, 2), result(2, 1, 500, -100, 3)];
        let rows = aggregate(&[player(1), player(2)], &results);
        assert_eq!(aggregate_player(1, &results), rows[0]);
    }

    #[test]
    fn test_sort_by_profit_breaks_ties_by_id() {
        let mut rows = aggregate(
            &[player(3), player(1), player(2)],
            &[result(1, 3, 100, 50, 1), result(1, 1, 100, 50, 2), result(1, 2, 100, 90, 3)],
        );
        sort_by_profit(&mut rows);
        let order: Vec<PlayerId> = rows.iter().map(|r| r.player_id).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }
}
