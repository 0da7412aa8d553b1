use super::types::PlayerPeriodStats;
use crate::domain::{Group, StatsFilter};

/// Minimums a player must reach before showing up on a leaderboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EligibilityThresholds {
    pub min_nights_played: u32,
    pub min_total_buy_in_cents: i64,
}

impl EligibilityThresholds {
    /// Request values win over group defaults; unset at both levels means no minimum
    pub fn resolve(filter: &StatsFilter, group: &Group) -> Self {
        Self {
            min_nights_played: filter
                .min_nights_played
                .or(group.min_nights_played)
                .unwrap_or(0),
            min_total_buy_in_cents: filter
                .min_total_buy_in_cents
                .or(group.min_total_buy_in_cents)
                .unwrap_or(0),
        }
    }

    pub fn admits(&self, stats: &PlayerPeriodStats) -> bool {
        stats.total_games >= self.min_nights_played
            && stats.total_buy_in_cents >= self.min_total_buy_in_cents
    }

    pub fn apply(&self, rows: Vec<PlayerPeriodStats>) -> Vec<PlayerPeriodStats> {
        rows.into_iter().filter(|row| self.admits(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(min_nights: Option<u32>, min_buy_in: Option<i64>) -> Group {
        Group {
            id: 1,
            name: "Home game".to_string(),
            min_nights_played: min_nights,
            min_total_buy_in_cents: min_buy_in,
        }
    }

    fn row(player_id: i64, games: u32, buy_in: i64) -> PlayerPeriodStats {
        PlayerPeriodStats {
            total_games: games,
            total_buy_in_cents: buy_in,
            ..PlayerPeriodStats::new(player_id)
        }
    }

    #[test]
    fn test_request_overrides_group_default() {
        let filter = StatsFilter {
            min_nights_played: Some(2),
            ..StatsFilter::default()
        };
        let thresholds = EligibilityThresholds::resolve(&filter, &group(Some(10), Some(5000)));
        assert_eq!(thresholds.min_nights_played, 2);
        assert_eq!(thresholds.min_total_buy_in_cents, 5000);
    }

    #[test]
    fn test_unset_everywhere_means_no_filtering() {
        let thresholds = EligibilityThresholds::resolve(&StatsFilter::default(), &group(None, None));
        assert_eq!(thresholds, EligibilityThresholds::default());
        assert!(thresholds.admits(&row(1, 0, 0)));
    }

    #[test]
    fn test_both_thresholds_apply_independently() {
        let thresholds = EligibilityThresholds {
            min_nights_played: 3,
            min_total_buy_in_cents: 6000,
        };
        let kept = thresholds.apply(vec![row(1, 3, 6000), row(2, 2, 9000), row(3, 5, 5999), row(4, 8, 20000)]);
        let ids: Vec<i64> = kept.iter().map(|r| r.player_id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let thresholds = EligibilityThresholds {
            min_nights_played: 2,
            min_total_buy_in_cents: 1000,
        };
        let rows = vec![row(1, 1, 5000), row(2, 2, 1000), row(3, 4, 500), row(4, 6, 7000)];
        let once = thresholds.apply(rows);
        let twice = thresholds.apply(once.clone());
        assert_eq!(once, twice);
    }
}
