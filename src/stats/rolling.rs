use super::aggregation::aggregate_player;
use super::types::{NightResult, PlayerPeriodStats};
use crate::domain::{Player, PlayerId};

/// Aggregates the player's `window` most recent nights
pub fn player_window(player_id: PlayerId, results: &[NightResult], window: usize) -> PlayerPeriodStats {
    let mut played: Vec<&NightResult> = results.iter().filter(|r| r.player_id == player_id).collect();
    played.sort_by(|a, b| {
        b.scheduled_at
            .cmp(&a.scheduled_at)
            .then(b.night_id.cmp(&a.night_id))
    });

    aggregate_player(player_id, played.into_iter().take(window))
}

/// Rolling form for every roster player, in roster order
pub fn rolling_form(roster: &[Player], results: &[NightResult], window: usize) -> Vec<PlayerPeriodStats> {
    roster
        .iter()
        .map(|player| player_window(player.id, results, window))
        .collect()
}
