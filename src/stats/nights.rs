use std::collections::HashMap;

use super::types::NightResult;
use crate::domain::{Ledger, Night, NightId, PlayerId};

/// The player behind a night's extreme result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standout {
    pub player_id: PlayerId,
    pub amount_cents: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NightSummary {
    pub night: Night,
    pub pot_cents: i64,
    pub players_count: usize,
    pub biggest_winner: Option<Standout>,
    /// Loss reported as a positive amount
    pub biggest_loser: Option<Standout>,
    pub rebuys_count: u32,
}

/// One summary per night in the ledger, newest night first
pub fn summarize_nights(ledger: &Ledger, results: &[NightResult]) -> Vec<NightSummary> {
    let mut results_by_night: HashMap<NightId, Vec<&NightResult>> = HashMap::new();
    for result in results {
        results_by_night.entry(result.night_id).or_default().push(result);
    }
    let participations = ledger.participations_by_night();

    ledger
        .nights
        .iter()
        .rev()
        .map(|night| {
            let night_results = results_by_night.get(&night.id).map(Vec::as_slice).unwrap_or(&[]);
            let seats = participations.get(&night.id).map(Vec::as_slice).unwrap_or(&[]);

            NightSummary {
                night: night.clone(),
                pot_cents: seats.iter().map(|p| p.buy_in_cents).sum(),
                players_count: seats.len(),
                biggest_winner: biggest_winner(night_results),
                biggest_loser: biggest_loser(night_results),
                rebuys_count: seats.iter().map(|p| p.rebuys()).sum(),
            }
        })
        .collect()
}

fn biggest_winner(results: &[&NightResult]) -> Option<Standout> {
    results
        .iter()
        .filter(|r| r.profit_cents > 0)
        .min_by_key(|r| (-r.profit_cents, r.player_id))
        .map(|r| Standout {
            player_id: r.player_id,
            amount_cents: r.profit_cents,
        })
}

fn biggest_loser(results: &[&NightResult]) -> Option<Standout> {
    results
        .iter()
        .filter(|r| r.profit_cents < 0)
        .min_by_key(|r| (r.profit_cents, r.player_id))
        .map(|r| Standout {
            player_id: r.player_id,
            amount_cents: -r.profit_cents,
        })
}
