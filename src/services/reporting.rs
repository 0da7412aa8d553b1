use std::collections::HashSet;

use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use log::info;
use rusqlite::Connection;

use crate::api::models::{
    HeaterRow, NightRow, PlayerNightRow, PlayerProfile, PlayerRow, PlayerSeasonRow, RatingRow, SeasonDetail,
    SeasonRow, TrendPointRow, TrendSeriesRow,
};
use crate::config::StatsSettings;
use crate::database;
use crate::domain::{GroupId, Ledger, Player, PlayerId, SeasonId, StatsFilter};
use crate::rating::{self, PlayerRating};
use crate::stats::{
    self, Awards, EligibilityThresholds, NightResult, NightSummary, PlayerPeriodStats, SeasonSummary,
};

/// Loads ledgers and turns them into reports
pub struct ReportService {
    settings: StatsSettings,
}

impl ReportService {
    pub fn new(settings: StatsSettings) -> Self {
        Self { settings }
    }

    pub fn report(&self, conn: &Connection, group_id: GroupId, filter: StatsFilter) -> Result<Option<StatsReport>> {
        self.report_at(conn, group_id, filter, Utc::now().naive_utc())
    }

    /// `None` when the group does not exist
    pub fn report_at(
        &self,
        conn: &Connection,
        group_id: GroupId,
        filter: StatsFilter,
        now: NaiveDateTime,
    ) -> Result<Option<StatsReport>> {
        let Some(ledger) = database::load_ledger(conn, group_id)? else {
            info!("Group {} not found", group_id);
            return Ok(None);
        };
        Ok(Some(StatsReport::build(&ledger, filter, &self.settings, now)))
    }
}

/// One request's worth of derived statistics
///
/// Built from a scoped copy of the ledger and discarded with the response.
/// The unscoped roster is kept so filtered-out players still resolve.
pub struct StatsReport {
    ledger: Ledger,
    roster: Vec<Player>,
    filter: StatsFilter,
    thresholds: EligibilityThresholds,
    settings: StatsSettings,
    results: Vec<NightResult>,
}

impl StatsReport {
    pub fn build(ledger: &Ledger, filter: StatsFilter, settings: &StatsSettings, now: NaiveDateTime) -> Self {
        let scoped = ledger.scoped(&filter, now);
        let thresholds = EligibilityThresholds::resolve(&filter, &scoped.group);
        let results = stats::evaluate_ledger(&scoped);

        info!(
            "Built report for group {}: {} nights, {} results in scope",
            scoped.group.id,
            scoped.nights.len(),
            results.len()
        );

        Self {
            ledger: scoped,
            roster: ledger.players.clone(),
            filter,
            thresholds,
            settings: settings.clone(),
            results,
        }
    }

    /// Every roster player, eligible or not, in player id order
    pub fn players(&self) -> Vec<PlayerRow> {
        self.all_time()
            .iter()
            .map(|stats| self.player_row(stats, self.filter.season_id.is_some()))
            .collect()
    }

    /// Eligible players, most profitable first
    pub fn leaderboard(&self) -> Vec<PlayerRow> {
        self.eligible()
            .iter()
            .map(|stats| self.player_row(stats, self.filter.season_id.is_some()))
            .collect()
    }

    pub fn nights(&self) -> Vec<NightRow> {
        stats::summarize_nights(&self.ledger, &self.results)
            .iter()
            .map(|summary| self.night_row(summary))
            .collect()
    }

    pub fn seasons(&self) -> Vec<SeasonRow> {
        self.season_summaries()
            .iter()
            .map(|summary| self.season_row(summary))
            .collect()
    }

    pub fn season_detail(&self, season_id: SeasonId) -> Option<SeasonDetail> {
        let season = self.ledger.find_season(season_id)?;
        let summary = stats::summarize_season(&self.ledger, season, &self.results, &self.thresholds);

        let mut players = summary.players.clone();
        stats::sort_by_profit(&mut players);

        Some(SeasonDetail {
            season: self.season_row(&summary),
            total_games: summary.total_games,
            total_buy_in_cents: summary.total_buy_in_cents,
            total_cash_out_cents: summary.total_cash_out_cents,
            total_profit_cents: summary.total_profit_cents,
            top_winner: summary.top_winner.as_ref().map(|p| self.player_row(p, true)),
            best_roi: summary.best_roi.as_ref().map(|p| self.player_row(p, true)),
            best_performer: summary.best_performer.as_ref().map(|p| self.player_row(p, true)),
            players: players.iter().map(|p| self.player_row(p, true)).collect(),
        })
    }

    pub fn ratings(&self) -> Vec<RatingRow> {
        self.player_ratings()
            .iter()
            .map(|rating| self.rating_row(rating))
            .collect()
    }

    pub fn heaters(&self) -> Vec<HeaterRow> {
        stats::heater_index(&self.results, &self.settings)
            .into_iter()
            .map(|heater| HeaterRow {
                player_id: heater.player_id,
                name: self.player_name(heater.player_id),
                heater_night_count: heater.heater_night_count,
            })
            .collect()
    }

    pub fn awards(&self) -> Awards {
        stats::calculate_awards(&self.ledger, &self.eligible(), &self.season_summaries(), &self.settings)
    }

    /// Rolling form of eligible players over the requested window, best form first
    pub fn rolling(&self) -> Vec<PlayerRow> {
        let eligible: HashSet<PlayerId> = self.eligible().iter().map(|p| p.player_id).collect();
        let mut rows: Vec<PlayerPeriodStats> =
            stats::rolling_form(&self.ledger.players, &self.results, self.filter.rolling_nights)
                .into_iter()
                .filter(|p| p.has_played() && eligible.contains(&p.player_id))
                .collect();
        stats::sort_by_profit(&mut rows);

        rows.iter().map(|stats| self.player_row(stats, false)).collect()
    }

    pub fn trend(&self) -> Vec<TrendSeriesRow> {
        let leaders: Vec<PlayerPeriodStats> = self.eligible().into_iter().filter(|p| p.has_played()).collect();

        stats::profit_trend(&self.ledger.nights, &self.results, &leaders, self.filter.top_n)
            .into_iter()
            .map(|series| TrendSeriesRow {
                player_id: series.player_id,
                name: self.player_name(series.player_id),
                points: series
                    .points
                    .into_iter()
                    .map(|point| TrendPointRow {
                        game_id: point.night_id,
                        date: point.scheduled_at,
                        cumulative_profit_cents: point.cumulative_profit_cents,
                    })
                    .collect(),
            })
            .collect()
    }

    /// `None` only for players unknown to the group
    ///
    /// A player the filter leaves out (a guest, say) gets a profile with
    /// empty totals and no nights.
    pub fn player_profile(&self, player_id: PlayerId) -> Option<PlayerProfile> {
        self.roster.iter().find(|p| p.id == player_id)?;

        let all_time = stats::aggregate_player(player_id, &self.results);
        let window = stats::player_window(player_id, &self.results, self.filter.rolling_nights);
        let rating = self
            .player_ratings()
            .into_iter()
            .find(|r| r.player_id == player_id)
            .map(|r| self.rating_row(&r));
        let heater_night_count = stats::heater_index(&self.results, &self.settings)
            .into_iter()
            .find(|h| h.player_id == player_id)
            .map(|h| h.heater_night_count)
            .unwrap_or(0);

        let seasons = self
            .ledger
            .seasons
            .iter()
            .filter_map(|season| {
                let stats = stats::aggregate_player(
                    player_id,
                    self.results.iter().filter(|r| r.season_id == Some(season.id)),
                );
                stats.has_played().then(|| PlayerSeasonRow {
                    season_id: season.id,
                    season_name: season.name.clone(),
                    stats: self.player_row(&stats, true),
                })
            })
            .collect();

        let nights = self
            .results
            .iter()
            .rev()
            .filter(|r| r.player_id == player_id)
            .map(|r| PlayerNightRow {
                game_id: r.night_id,
                date: r.scheduled_at,
                profit_cents: r.profit_cents,
                rank: r.rank,
                night_score: r.night_score,
                podium_points: r.podium_points,
                is_podium: r.is_podium(),
            })
            .collect();

        Some(PlayerProfile {
            player: self.player_row(&all_time, self.filter.season_id.is_some()),
            rolling_nights: self.filter.rolling_nights,
            rolling_form: self.player_row(&window, false),
            rating,
            heater_night_count,
            seasons,
            nights,
        })
    }

    fn player_name(&self, player_id: PlayerId) -> String {
        self.roster
            .iter()
            .find(|p| p.id == player_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| self.ledger.player_name(player_id))
    }

    fn all_time(&self) -> Vec<PlayerPeriodStats> {
        stats::aggregate(&self.ledger.players, &self.results)
    }

    fn eligible(&self) -> Vec<PlayerPeriodStats> {
        let mut rows = self.thresholds.apply(self.all_time());
        stats::sort_by_profit(&mut rows);
        rows
    }

    fn season_summaries(&self) -> Vec<SeasonSummary> {
        stats::summarize_seasons(&self.ledger, &self.results, &self.thresholds)
    }

    fn player_ratings(&self) -> Vec<PlayerRating> {
        rating::calculate_ratings(&self.results, self.filter.rolling_nights, &self.settings)
    }

    fn player_row(&self, stats: &PlayerPeriodStats, season_scope: bool) -> PlayerRow {
        PlayerRow {
            player_id: stats.player_id,
            name: self.player_name(stats.player_id),
            total_buy_in_cents: stats.total_buy_in_cents,
            total_profit_cents: stats.total_profit_cents,
            roi: stats.roi(),
            nights_won: stats.nights_won,
            podium_points: stats.podium_points,
            win_rate: stats.win_rate(),
            nights_in_profit: stats.nights_in_profit,
            total_games: stats.total_games,
            consistency: stats.consistency(),
            season_score: season_scope.then(|| stats.season_score()),
        }
    }

    fn night_row(&self, summary: &NightSummary) -> NightRow {
        NightRow {
            game_id: summary.night.id,
            date: summary.night.scheduled_at,
            status: summary.night.status,
            pot_cents: summary.pot_cents,
            players_count: summary.players_count,
            biggest_winner_name: summary.biggest_winner.map(|w| self.player_name(w.player_id)),
            biggest_winner_profit_cents: summary.biggest_winner.map(|w| w.amount_cents),
            biggest_loser_name: summary.biggest_loser.map(|l| self.player_name(l.player_id)),
            biggest_loser_loss_cents: summary.biggest_loser.map(|l| l.amount_cents),
            rebuys_count: summary.rebuys_count,
        }
    }

    fn season_row(&self, summary: &SeasonSummary) -> SeasonRow {
        SeasonRow {
            season_id: summary.season.id,
            name: summary.season.name.clone(),
            starts_at: summary.season.starts_at,
            ends_at: summary.season.ends_at,
            nights: summary.nights,
            total_pot_cents: summary.total_pot_cents(),
            avg_pot_cents: summary.avg_pot_cents(),
            players_participated: summary.players_participated,
            most_profitable_player_name: summary.top_winner.as_ref().map(|p| self.player_name(p.player_id)),
            most_profitable_profit_cents: summary.top_winner.as_ref().map(|p| p.total_profit_cents),
            best_roi_player_name: summary.best_roi.as_ref().map(|p| self.player_name(p.player_id)),
            best_roi: summary.best_roi.as_ref().and_then(PlayerPeriodStats::roi),
        }
    }

    fn rating_row(&self, rating: &PlayerRating) -> RatingRow {
        RatingRow {
            player_id: rating.player_id,
            name: self.player_name(rating.player_id),
            rating: rating.rating,
            change_last_n: rating.change_last_n,
            nights_rated: rating.nights_rated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Group, Night, NightStatus, Participation, Player, Season};

    fn at(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} 20:00:00", value), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn seat(night_id: i64, player_id: PlayerId, buy_in: i64, cash_out: Option<i64>) -> Participation {
        Participation {
            night_id,
            player_id,
            buy_in_cents: buy_in,
            buy_in_count: 1,
            cash_out_cents: cash_out,
            adjustment_cents: 0,
        }
    }

    fn night(id: i64, date: &str, status: NightStatus, season_id: Option<SeasonId>) -> Night {
        Night {
            id,
            name: format!("Night {}", id),
            scheduled_at: at(date),
            status,
            season_id,
        }
    }

    fn ledger() -> Ledger {
        let group = Group {
            id: 1,
            name: "Tuesday Club".to_string(),
            min_nights_played: Some(2),
            min_total_buy_in_cents: None,
        };
        let players = vec![
            Player { id: 1, name: "Ana".to_string(), is_guest: false },
            Player { id: 2, name: "Bo".to_string(), is_guest: false },
            Player { id: 3, name: "Cy".to_string(), is_guest: true },
            Player { id: 4, name: "Dee".to_string(), is_guest: false },
        ];
        let nights = vec![
            night(1, "2024-01-09", NightStatus::Closed, Some(1)),
            night(2, "2024-01-16", NightStatus::Closed, Some(1)),
            night(3, "2024-01-23", NightStatus::Open, Some(1)),
        ];
        let participations = vec![
            seat(1, 1, 2000, Some(4000)),
            seat(1, 2, 2000, Some(0)),
            seat(1, 3, 1500, Some(3000)),
            seat(2, 1, 2000, Some(1000)),
            seat(2, 2, 2000, Some(3000)),
            seat(3, 1, 2000, None),
        ];
        let seasons = vec![
            Season { id: 1, name: "Winter".to_string(), starts_at: at("2024-01-01"), ends_at: None },
            Season { id: 2, name: "Summer".to_string(), starts_at: at("2024-06-01"), ends_at: None },
        ];
        Ledger::new(group, players, nights, participations, seasons)
    }

    fn report(filter: StatsFilter) -> StatsReport {
        StatsReport::build(&ledger(), filter, &StatsSettings::default(), at("2024-02-01"))
    }

    #[test]
    fn test_players_listing_is_complete_and_leaderboard_is_filtered() {
        let report = report(StatsFilter::default());

        let players = report.players();
        assert_eq!(players.len(), 4);
        let dee = &players[3];
        assert_eq!(dee.total_games, 0);
        assert_eq!(dee.roi, None);
        assert_eq!(dee.season_score, None);

        // group default demands two nights
        let leaderboard = report.leaderboard();
        let ids: Vec<PlayerId> = leaderboard.iter().map(|r| r.player_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_request_threshold_overrides_group_default() {
        let report = report(StatsFilter {
            min_nights_played: Some(0),
            ..StatsFilter::default()
        });
        assert_eq!(report.leaderboard().len(), 4);
    }

    #[test]
    fn test_night_rows_skip_open_nights_by_default() {
        let rows = report(StatsFilter::default()).nights();
        assert_eq!(rows.iter().map(|r| r.game_id).collect::<Vec<_>>(), vec![2, 1]);

        let opener = &rows[1];
        assert_eq!(opener.pot_cents, 5500);
        assert_eq!(opener.biggest_winner_name.as_deref(), Some("Ana"));
        assert_eq!(opener.biggest_loser_loss_cents, Some(2000));

        let with_drafts = report(StatsFilter {
            include_draft_nights: true,
            ..StatsFilter::default()
        })
        .nights();
        assert_eq!(with_drafts.len(), 3);
        assert_eq!(with_drafts[0].status, NightStatus::Open);
    }

    #[test]
    fn test_season_rows_and_detail() {
        let report = report(StatsFilter::default());
        let seasons = report.seasons();
        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].nights, 2);
        assert_eq!(seasons[1].nights, 0);
        assert_eq!(seasons[1].best_roi, None);

        let detail = report.season_detail(1).unwrap();
        assert_eq!(detail.total_games, 5);
        assert!(detail.players.iter().all(|p| p.season_score.is_some()));
        assert!(report.season_detail(99).is_none());
    }

    #[test]
    fn test_excluded_guest_leaves_views_but_keeps_profile() {
        let report = report(StatsFilter {
            include_guest_players: false,
            ..StatsFilter::default()
        });
        assert!(report.players().iter().all(|p| p.player_id != 3));
        assert!(report.heaters().iter().all(|h| h.player_id != 3));

        // still known to the group, just outside the scope
        let profile = report.player_profile(3).unwrap();
        assert_eq!(profile.player.name, "Cy");
        assert_eq!(profile.player.total_games, 0);
        assert_eq!(profile.player.roi, None);
        assert_eq!(profile.rating, None);
        assert_eq!(profile.heater_night_count, 0);
        assert!(profile.seasons.is_empty());
        assert!(profile.nights.is_empty());
    }

    #[test]
    fn test_heaters_and_ratings() {
        let report = report(StatsFilter::default());
        let heaters = report.heaters();
        assert_eq!(heaters.len(), 2);
        assert_eq!(heaters[0].name, "Ana");
        assert_eq!(heaters[1].name, "Cy");

        let ratings = report.ratings();
        assert_eq!(ratings.len(), 3);
        assert!(ratings.iter().all(|r| r.name != "Dee"));
        let ana = ratings.iter().find(|r| r.player_id == 1).unwrap();
        assert_eq!(ana.nights_rated, 2);
        let cy = ratings.iter().find(|r| r.player_id == 3).unwrap();
        assert_eq!(cy.nights_rated, 1);
    }

    #[test]
    fn test_player_profile() {
        let report = report(StatsFilter::default());
        let profile = report.player_profile(1).unwrap();
        assert_eq!(profile.player.total_games, 2);
        assert_eq!(profile.player.total_profit_cents, 1000);
        assert_eq!(profile.rolling_form, profile.player);
        assert_eq!(profile.nights.iter().map(|n| n.game_id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(profile.seasons.len(), 1);
        assert!(profile.rating.is_some());
        assert!(report.player_profile(42).is_none());
    }

    #[test]
    fn test_trend_is_capped_by_top_n() {
        let report = report(StatsFilter {
            top_n: 3,
            min_nights_played: Some(1),
            ..StatsFilter::default()
        });
        let trend = report.trend();
        assert_eq!(trend.len(), 3);
        assert!(trend.iter().all(|s| s.points.len() == 2));
    }
}
