use log::debug;

use super::types::NightResult;
use crate::domain::{Ledger, Night, Participation};

/// Podium points for 1st, 2nd and 3rd place
const PODIUM_POINTS: [u32; 3] = [3, 2, 1];

/// ROI weighted by the square root of the stake in dollars
///
/// Puts big-stake moderate-ROI nights and small-stake huge-ROI nights on a
/// comparable scale. Zero when nothing was bought in.
pub fn performance_score(profit_cents: i64, buy_in_cents: i64) -> f64 {
    if buy_in_cents <= 0 {
        return 0.0;
    }
    let profit_dollars = profit_cents as f64 / 100.0;
    let buy_in_dollars = buy_in_cents as f64 / 100.0;
    let roi = profit_dollars / buy_in_dollars;
    roi * buy_in_dollars.sqrt()
}

pub fn podium_points(rank: usize) -> u32 {
    rank.checked_sub(1)
        .and_then(|idx| PODIUM_POINTS.get(idx))
        .copied()
        .unwrap_or(0)
}

/// Ranks every participant of one night by profit
///
/// Equal profits are ordered by ascending player id, so ranks always form
/// exactly `1..=k`.
pub fn evaluate_night(night: &Night, participations: &[&Participation]) -> Vec<NightResult> {
    let mut seats: Vec<(&Participation, i64)> = participations
        .iter()
        .map(|p| (*p, p.profit_cents()))
        .collect();

    seats.sort_by(|(a, a_profit), (b, b_profit)| {
        b_profit.cmp(a_profit).then(a.player_id.cmp(&b.player_id))
    });

    seats
        .into_iter()
        .enumerate()
        .map(|(idx, (participation, profit_cents))| {
            let rank = idx + 1;
            NightResult {
                night_id: night.id,
                season_id: night.season_id,
                scheduled_at: night.scheduled_at,
                player_id: participation.player_id,
                buy_in_cents: participation.buy_in_cents,
                cash_out_cents: participation.cash_out_or_zero(),
                profit_cents,
                rank,
                night_score: performance_score(profit_cents, participation.buy_in_cents),
                podium_points: podium_points(rank),
            }
        })
        .collect()
}

/// Evaluates every night of the ledger, oldest night first
pub fn evaluate_ledger(ledger: &Ledger) -> Vec<NightResult> {
    let by_night = ledger.participations_by_night();

    let results: Vec<NightResult> = ledger
        .nights
        .iter()
        .filter_map(|night| by_night.get(&night.id).map(|seats| evaluate_night(night, seats)))
        .flatten()
        .collect();

    debug!(
        "Evaluated {} nights into {} results",
        ledger.nights.len(),
        results.len()
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NightStatus, PlayerId};
    use chrono::NaiveDateTime;

    fn night() -> Night {
        Night {
            id: 1,
            name: "Opening night".to_string(),
            scheduled_at: NaiveDateTime::parse_from_str("2024-01-05 19:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
            status: NightStatus::Closed,
            season_id: None,
        }
    }

    fn seat(player_id: PlayerId, buy_in: i64, cash_out: Option<i64>) -> Participation {
        Participation {
            night_id: 1,
            player_id,
            buy_in_cents: buy_in,
            buy_in_count: 1,
            cash_out_cents: cash_out,
            adjustment_cents: 0,
        }
    }

    fn evaluate(seats: &[Participation]) -> Vec<NightResult> {
        let refs: Vec<&Participation> = seats.iter().collect();
        evaluate_night(&night(), &refs)
    }

    #[test]
    fn test_two_player_night() {
        let results = evaluate(&[seat(2, 2000, Some(0)), seat(1, 2000, Some(4000))]);

        let a = &results[0];
        assert_eq!(a.player_id, 1);
        assert_eq!(a.profit_cents, 2000);
        assert_eq!(a.rank, 1);
        assert_eq!(a.podium_points, 3);
        assert_eq!(a.roi(), Some(1.0));
        assert!((a.night_score - 20f64.sqrt()).abs() < 1e-9);

        let b = &results[1];
        assert_eq!(b.player_id, 2);
        assert_eq!(b.profit_cents, -2000);
        assert_eq!(b.rank, 2);
        assert_eq!(b.podium_points, 2);
    }

    #[test]
    fn test_ranks_cover_one_to_k_and_podium_is_capped() {
        let seats: Vec<Participation> = (1..=7)
            .map(|id| seat(id, 1000 * id, Some(1000 * (8 - id))))
            .collect();
        let results = evaluate(&seats);

        let mut ranks: Vec<usize> = results.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=7).collect::<Vec<_>>());

        let podium: u32 = results.iter().map(|r| r.podium_points).sum();
        assert_eq!(podium, 6);
        assert_eq!(results.iter().filter(|r| r.is_podium()).count(), 3);
    }

    #[test]
    fn test_equal_profit_ties_break_by_player_id() {
        let results = evaluate(&[seat(9, 1000, Some(1500)), seat(3, 1000, Some(1500)), seat(5, 1000, Some(0))]);
        let order: Vec<PlayerId> = results.iter().map(|r| r.player_id).collect();
        assert_eq!(order, vec![3, 9, 5]);
        assert_eq!(results[0].rank, 1);
        assert_eq!(results[1].rank, 2);
    }

    #[test]
    fn test_score_is_zero_without_buy_in() {
        assert_eq!(performance_score(5000, 0), 0.0);
        assert_eq!(performance_score(-5000, -100), 0.0);

        let results = evaluate(&[seat(1, 0, Some(500))]);
        assert_eq!(results[0].night_score, 0.0);
        assert_eq!(results[0].roi(), None);
    }

    #[test]
    fn test_podium_points_by_rank() {
        assert_eq!(podium_points(1), 3);
        assert_eq!(podium_points(2), 2);
        assert_eq!(podium_points(3), 1);
        assert_eq!(podium_points(4), 0);
        assert_eq!(podium_points(0), 0);
    }
}
