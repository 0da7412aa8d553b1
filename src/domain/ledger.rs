use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;

use super::filter::StatsFilter;
use super::models::{Group, Night, NightId, Participation, Player, PlayerId, Season, SeasonId};

/// Fully materialised ledger of one group
///
/// Players are kept ordered by id, nights and seasons chronologically, so
/// every fold over a ledger sees the same order.
#[derive(Debug, Clone)]
pub struct Ledger {
    pub group: Group,
    pub players: Vec<Player>,
    pub nights: Vec<Night>,
    pub participations: Vec<Participation>,
    pub seasons: Vec<Season>,
}

impl Ledger {
    pub fn new(
        group: Group,
        mut players: Vec<Player>,
        mut nights: Vec<Night>,
        participations: Vec<Participation>,
        mut seasons: Vec<Season>,
    ) -> Self {
        players.sort_by_key(|p| p.id);
        nights.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at).then(a.id.cmp(&b.id)));
        seasons.sort_by(|a, b| a.starts_at.cmp(&b.starts_at).then(a.id.cmp(&b.id)));

        Self {
            group,
            players,
            nights,
            participations,
            seasons,
        }
    }

    /// Restricts the ledger to what the filter lets through
    ///
    /// Draft nights, nights outside the date range or season, and (optionally)
    /// guest players are dropped along with their participations. The roster
    /// itself survives intact apart from excluded guests.
    pub fn scoped(&self, filter: &StatsFilter, now: NaiveDateTime) -> Ledger {
        let players: Vec<Player> = self
            .players
            .iter()
            .filter(|p| filter.include_guest_players || !p.is_guest)
            .cloned()
            .collect();

        let nights: Vec<Night> = self
            .nights
            .iter()
            .filter(|n| n.is_closed() || filter.include_draft_nights)
            .filter(|n| filter.date_range.contains(n.scheduled_at, now))
            .filter(|n| filter.season_id.is_none() || n.season_id == filter.season_id)
            .cloned()
            .collect();

        let seasons: Vec<Season> = self
            .seasons
            .iter()
            .filter(|s| filter.season_id.is_none_or(|id| s.id == id))
            .cloned()
            .collect();

        let player_ids: HashSet<PlayerId> = players.iter().map(|p| p.id).collect();
        let night_ids: HashSet<NightId> = nights.iter().map(|n| n.id).collect();

        let participations = self
            .participations
            .iter()
            .filter(|p| night_ids.contains(&p.night_id) && player_ids.contains(&p.player_id))
            .cloned()
            .collect();

        Ledger {
            group: self.group.clone(),
            players,
            nights,
            participations,
            seasons,
        }
    }

    pub fn find_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn find_season(&self, id: SeasonId) -> Option<&Season> {
        self.seasons.iter().find(|s| s.id == id)
    }

    pub fn player_name(&self, id: PlayerId) -> String {
        self.find_player(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Unknown Player".to_string())
    }

    pub fn participations_by_night(&self) -> HashMap<NightId, Vec<&Participation>> {
        let mut by_night: HashMap<NightId, Vec<&Participation>> = HashMap::new();
        for participation in &self.participations {
            by_night.entry(participation.night_id).or_default().push(participation);
        }
        by_night
    }
}
