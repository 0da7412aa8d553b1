use std::collections::{BTreeMap, HashMap};

use log::debug;

use super::types::{Outcome, PlayerRating, RatingMap, RatingValue};
use crate::config::StatsSettings;
use crate::domain::{NightId, PlayerId};
use crate::stats::NightResult;

/// Standard Elo expectation of `rating` scoring against `other`
pub fn expected_score(rating: RatingValue, other: RatingValue) -> f64 {
    1.0 / (1.0 + 10f64.powf((other - rating) / 400.0))
}

/// Applies one night's pairwise comparisons to a rating map
///
/// Every pair is scored against the ratings as they stood before the night,
/// and all deltas land together, so seat order within a night is irrelevant.
/// Unknown players enter at the baseline rating.
pub fn replay_night(ratings: &RatingMap, night: &[&NightResult], settings: &StatsSettings) -> RatingMap {
    let current = |id: PlayerId| ratings.get(&id).copied().unwrap_or(settings.baseline_rating);
    let mut deltas: HashMap<PlayerId, f64> = night.iter().map(|r| (r.player_id, 0.0)).collect();

    for (idx, a) in night.iter().enumerate() {
        for b in &night[idx + 1..] {
            let (rating_a, rating_b) = (current(a.player_id), current(b.player_id));
            let outcome_a = Outcome::from_profits(a.profit_cents, b.profit_cents);
            let outcome_b = Outcome::from_profits(b.profit_cents, a.profit_cents);

            *deltas.entry(a.player_id).or_insert(0.0) +=
                settings.k_factor * (outcome_a.score() - expected_score(rating_a, rating_b));
            *deltas.entry(b.player_id).or_insert(0.0) +=
                settings.k_factor * (outcome_b.score() - expected_score(rating_b, rating_a));
        }
    }

    let mut next = ratings.clone();
    for (player_id, delta) in deltas {
        next.insert(player_id, current(player_id) + delta);
    }
    next
}

/// Replays every night with at least two players, oldest first
///
/// `change_last_n` compares the final map with a snapshot taken before the
/// last `last_n` processed nights. Players who never sat in a processed night
/// are left out. Highest rating first, ties by player id.
pub fn calculate_ratings(results: &[NightResult], last_n: usize, settings: &StatsSettings) -> Vec<PlayerRating> {
    let nights = chronological_nights(results);
    debug!("Replaying {} rated nights", nights.len());

    let (earlier, recent) = nights.split_at(nights.len().saturating_sub(last_n));
    let before = earlier
        .iter()
        .fold(RatingMap::new(), |ratings, night| replay_night(&ratings, night, settings));
    let after = recent
        .iter()
        .fold(before.clone(), |ratings, night| replay_night(&ratings, night, settings));

    let mut nights_rated: HashMap<PlayerId, u32> = HashMap::new();
    for result in nights.iter().flatten() {
        *nights_rated.entry(result.player_id).or_insert(0) += 1;
    }

    let mut ratings: Vec<PlayerRating> = after
        .iter()
        .map(|(&player_id, &rating)| PlayerRating {
            player_id,
            rating,
            change_last_n: rating - before.get(&player_id).copied().unwrap_or(settings.baseline_rating),
            nights_rated: nights_rated.get(&player_id).copied().unwrap_or(0),
        })
        .collect();

    ratings.sort_by(|a, b| b.rating.total_cmp(&a.rating).then(a.player_id.cmp(&b.player_id)));
    ratings
}

fn chronological_nights(results: &[NightResult]) -> Vec<Vec<&NightResult>> {
    let mut by_night: BTreeMap<(chrono::NaiveDateTime, NightId), Vec<&NightResult>> = BTreeMap::new();
    for result in results {
        by_night
            .entry((result.scheduled_at, result.night_id))
            .or_default()
            .push(result);
    }

    by_night
        .into_values()
        .filter(|seats| seats.len() >= 2)
        .collect()
}
