use serde::Serialize;

use super::leader_by;
use super::seasons::SeasonSummary;
use super::types::PlayerPeriodStats;
use crate::config::StatsSettings;
use crate::domain::{Ledger, PlayerId, SeasonId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitAward {
    pub player_id: PlayerId,
    pub name: String,
    pub total_profit_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionAward {
    pub player_id: PlayerId,
    pub name: String,
    pub total_buy_in_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodiumAward {
    pub player_id: PlayerId,
    pub name: String,
    pub podium_points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NightsWonAward {
    pub player_id: PlayerId,
    pub name: String,
    pub nights_won: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinRateAward {
    pub player_id: PlayerId,
    pub name: String,
    pub win_rate: f64,
    pub total_games: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRoiAward {
    pub player_id: PlayerId,
    pub name: String,
    pub season_id: SeasonId,
    pub season_name: String,
    pub roi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonScoreAward {
    pub player_id: PlayerId,
    pub name: String,
    pub season_id: SeasonId,
    pub season_name: String,
    pub season_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonAward {
    pub season_id: SeasonId,
    pub name: String,
    pub total_profit_cents: i64,
}

/// Single best entry per category; `None` when nobody qualifies
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Awards {
    pub top_winner: Option<ProfitAward>,
    pub most_action: Option<ActionAward>,
    pub podium_king: Option<PodiumAward>,
    pub nights_won_leader: Option<NightsWonAward>,
    pub win_rate_leader: Option<WinRateAward>,
    pub best_player: Option<SeasonRoiAward>,
    pub best_performer: Option<SeasonScoreAward>,
    pub best_season: Option<SeasonAward>,
}

/// Picks the award winners among `players` and the given seasons
///
/// Only players with at least one night are candidates. Equal metrics go to
/// the lowest player id; across seasons, the earlier season wins.
pub fn calculate_awards(
    ledger: &Ledger,
    players: &[PlayerPeriodStats],
    seasons: &[SeasonSummary],
    settings: &StatsSettings,
) -> Awards {
    let mut candidates: Vec<&PlayerPeriodStats> = players.iter().filter(|p| p.has_played()).collect();
    candidates.sort_by_key(|p| p.player_id);
    let name = |id: PlayerId| ledger.player_name(id);

    let top_winner = leader_by(candidates.iter(), |p| p.total_profit_cents).map(|p| ProfitAward {
        player_id: p.player_id,
        name: name(p.player_id),
        total_profit_cents: p.total_profit_cents,
    });

    let most_action = leader_by(candidates.iter(), |p| p.total_buy_in_cents).map(|p| ActionAward {
        player_id: p.player_id,
        name: name(p.player_id),
        total_buy_in_cents: p.total_buy_in_cents,
    });

    let podium_king = leader_by(candidates.iter(), |p| p.podium_points).map(|p| PodiumAward {
        player_id: p.player_id,
        name: name(p.player_id),
        podium_points: p.podium_points,
    });

    let nights_won_leader = leader_by(candidates.iter(), |p| p.nights_won).map(|p| NightsWonAward {
        player_id: p.player_id,
        name: name(p.player_id),
        nights_won: p.nights_won,
    });

    let win_rate_leader = leader_by(
        candidates
            .iter()
            .filter(|p| p.total_games >= settings.win_rate_min_games),
        |p| p.win_rate(),
    )
    .map(|p| WinRateAward {
        player_id: p.player_id,
        name: name(p.player_id),
        win_rate: p.win_rate(),
        total_games: p.total_games,
    });

    let season_entries = || {
        seasons
            .iter()
            .flat_map(|s| s.players.iter().map(move |p| (s, p)))
    };

    let best_player = leader_by(
        season_entries().filter_map(|(s, p)| p.roi().map(|roi| (s, p, roi))),
        |(_, _, roi)| *roi,
    )
    .map(|(s, p, roi)| SeasonRoiAward {
        player_id: p.player_id,
        name: name(p.player_id),
        season_id: s.season.id,
        season_name: s.season.name.clone(),
        roi,
    });

    let best_performer = leader_by(
        season_entries().filter(|(_, p)| p.total_buy_in_cents > 0),
        |(_, p)| p.season_score(),
    )
    .map(|(s, p)| SeasonScoreAward {
        player_id: p.player_id,
        name: name(p.player_id),
        season_id: s.season.id,
        season_name: s.season.name.clone(),
        season_score: p.season_score(),
    });

    let best_season = leader_by(
        seasons.iter().filter(|s| s.players_participated > 0),
        |s| s.total_profit_cents,
    )
    .map(|s| SeasonAward {
        season_id: s.season.id,
        name: s.season.name.clone(),
        total_profit_cents: s.total_profit_cents,
    });

    Awards {
        top_winner,
        most_action,
        podium_king,
        nights_won_leader,
        win_rate_leader,
        best_player,
        best_performer,
        best_season,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Group, Player, Season};
    use chrono::NaiveDateTime;

    fn ledger() -> Ledger {
        let group = Group {
            id: 1,
            name: "Regulars".to_string(),
            min_nights_played: None,
            min_total_buy_in_cents: None,
        };
        let players = ["Ann", "Ben", "Cat", "Dan"]
            .iter()
            .enumerate()
            .map(|(idx, name)| Player {
                id: idx as PlayerId + 1,
                name: name.to_string(),
                is_guest: false,
            })
            .collect();
        Ledger::new(group, players, vec![], vec![], vec![])
    }

    fn stats(player_id: PlayerId, games: u32, won: u32, buy_in: i64, profit: i64, podium: u32) -> PlayerPeriodStats {
        PlayerPeriodStats {
            player_id,
            total_games: games,
            total_buy_in_cents: buy_in,
            total_cash_out_cents: buy_in + profit,
            total_profit_cents: profit,
            nights_won: won,
            podium_points: podium,
            nights_in_profit: won,
        }
    }

    fn season(id: SeasonId, name: &str, players: Vec<PlayerPeriodStats>) -> SeasonSummary {
        let total_profit_cents = players.iter().map(|p| p.total_profit_cents).sum();
        SeasonSummary {
            season: Season {
                id,
                name: name.to_string(),
                starts_at: NaiveDateTime::default(),
                ends_at: None,
            },
            nights: if players.is_empty() { 0 } else { 1 },
            total_games: players.iter().map(|p| p.total_games).sum(),
            total_buy_in_cents: players.iter().map(|p| p.total_buy_in_cents).sum(),
            total_cash_out_cents: players.iter().map(|p| p.total_cash_out_cents).sum(),
            total_profit_cents,
            players_participated: players.len(),
            players,
            top_winner: None,
            best_roi: None,
            best_performer: None,
        }
    }

    #[test]
    fn test_player_categories() {
        let players = vec![
            stats(1, 6, 3, 12000, 4000, 12),
            stats(2, 5, 1, 30000, -2000, 8),
            stats(3, 6, 2, 9000, 4000, 14),
            stats(4, 0, 0, 0, 0, 0),
        ];
        let awards = calculate_awards(&ledger(), &players, &[], &StatsSettings::default());

        let top = awards.top_winner.unwrap();
        assert_eq!((top.player_id, top.name.as_str()), (1, "Ann"));
        assert_eq!(awards.most_action.unwrap().player_id, 2);
        assert_eq!(awards.podium_king.unwrap().player_id, 3);
        assert_eq!(awards.nights_won_leader.unwrap().nights_won, 3);
        assert_eq!(awards.win_rate_leader.unwrap().player_id, 1);
        assert!(awards.best_player.is_none());
        assert!(awards.best_season.is_none());
    }

    #[test]
    fn test_win_rate_leader_needs_five_games() {
        let players = vec![stats(1, 4, 4, 8000, 6000, 12), stats(2, 5, 1, 10000, 100, 6)];
        let awards = calculate_awards(&ledger(), &players, &[], &StatsSettings::default());

        let leader = awards.win_rate_leader.unwrap();
        assert_eq!(leader.player_id, 2);
        assert_eq!(leader.win_rate, 0.2);
    }

    #[test]
    fn test_no_candidates_yields_empty_awards() {
        let players = vec![stats(1, 0, 0, 0, 0, 0)];
        let awards = calculate_awards(&ledger(), &players, &[], &StatsSettings::default());
        assert_eq!(awards, Awards::default());
    }

    #[test]
    fn test_ties_go_to_lowest_player_id() {
        let players = vec![stats(3, 2, 1, 5000, 700, 4), stats(2, 2, 1, 5000, 700, 4)];
        let awards = calculate_awards(&ledger(), &players, &[], &StatsSettings::default());
        assert_eq!(awards.top_winner.unwrap().player_id, 2);
        assert_eq!(awards.most_action.unwrap().player_id, 2);
    }

    #[test]
    fn test_season_categories_carry_season_name() {
        let seasons = vec![
            season(1, "Winter", vec![stats(1, 3, 1, 6000, 1200, 5), stats(2, 3, 2, 3000, 1500, 7)]),
            season(2, "Summer", vec![stats(3, 4, 3, 40000, 12000, 10), stats(4, 4, 0, 1000, -900, 2)]),
            season(3, "Autumn", vec![]),
        ];
        let awards = calculate_awards(&ledger(), &[], &seasons, &StatsSettings::default());

        let best_player = awards.best_player.unwrap();
        assert_eq!(best_player.player_id, 2);
        assert_eq!(best_player.season_name, "Winter");
        assert_eq!(best_player.roi, 0.5);

        // 0.3 * sqrt(400) = 6.0 beats 0.5 * sqrt(30)
        let best_performer = awards.best_performer.unwrap();
        assert_eq!(best_performer.player_id, 3);
        assert_eq!(best_performer.season_name, "Summer");

        let best_season = awards.best_season.unwrap();
        assert_eq!(best_season.season_id, 2);
        assert_eq!(best_season.total_profit_cents, 11100);
    }
}
