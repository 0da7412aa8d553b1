use std::collections::BTreeMap;

use super::types::NightResult;
use crate::config::StatsSettings;
use crate::domain::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaterCount {
    pub player_id: PlayerId,
    pub heater_night_count: u32,
}

/// A big-return night at low stakes
pub fn is_heater_night(result: &NightResult, settings: &StatsSettings) -> bool {
    result.buy_in_cents <= settings.heater_max_buy_in_cents
        && result.roi().is_some_and(|roi| roi > settings.heater_min_roi)
}

/// Heater night counts per player, most heaters first; players without any are left out
pub fn heater_index(results: &[NightResult], settings: &StatsSettings) -> Vec<HeaterCount> {
    let mut counts: BTreeMap<PlayerId, u32> = BTreeMap::new();
    for result in results.iter().filter(|r| is_heater_night(r, settings)) {
        *counts.entry(result.player_id).or_insert(0) += 1;
    }

    let mut index: Vec<HeaterCount> = counts
        .into_iter()
        .map(|(player_id, heater_night_count)| HeaterCount {
            player_id,
            heater_night_count,
        })
        .collect();
    index.sort_by(|a, b| b.heater_night_count.cmp(&a.heater_night_count));
    index
}
