use anyhow::{Context, Result, bail};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::debug;
use serde::Deserialize;

use super::models::SeasonId;

pub const ROLLING_WINDOWS: [usize; 3] = [5, 10, 20];
pub const TOP_N_CHOICES: [usize; 3] = [3, 5, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    All,
    LastDays(i64),
    Custom {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl DateRange {
    /// Both custom bounds are inclusive calendar days
    pub fn contains(&self, at: NaiveDateTime, now: NaiveDateTime) -> bool {
        match *self {
            DateRange::All => true,
            DateRange::LastDays(days) => at >= now - Duration::days(days),
            DateRange::Custom { from, to } => {
                let day = at.date();
                from.is_none_or(|from| day >= from) && to.is_none_or(|to| day <= to)
            }
        }
    }
}

/// Resolved, validated request filter
#[derive(Debug, Clone, PartialEq)]
pub struct StatsFilter {
    pub date_range: DateRange,
    pub season_id: Option<SeasonId>,
    pub rolling_nights: usize,
    pub min_nights_played: Option<u32>,
    pub min_total_buy_in_cents: Option<i64>,
    pub top_n: usize,
    pub include_guest_players: bool,
    pub include_draft_nights: bool,
}

impl Default for StatsFilter {
    fn default() -> Self {
        Self {
            date_range: DateRange::All,
            season_id: None,
            rolling_nights: 10,
            min_nights_played: None,
            min_total_buy_in_cents: None,
            top_n: 5,
            include_guest_players: true,
            include_draft_nights: false,
        }
    }
}

/// Raw filter values as they arrive from a query string or the CLI
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub date_range: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub season_id: Option<String>,
    pub rolling_nights: Option<String>,
    pub min_nights_played: Option<String>,
    pub min_total_buy_in_cents: Option<String>,
    pub top_n: Option<String>,
    pub include_guest_players: Option<String>,
    pub include_draft_nights: Option<String>,
}

impl FilterParams {
    /// Any malformed value discards the whole request filter in favour of the defaults
    pub fn parse(&self) -> StatsFilter {
        self.try_parse().unwrap_or_else(|e| {
            debug!("Falling back to default filter: {:#}", e);
            StatsFilter::default()
        })
    }

    fn try_parse(&self) -> Result<StatsFilter> {
        let defaults = StatsFilter::default();

        Ok(StatsFilter {
            date_range: self.parse_date_range()?,
            season_id: parse_opt(&self.season_id, "seasonId")?,
            rolling_nights: parse_choice(&self.rolling_nights, &ROLLING_WINDOWS, "rollingNights")?
                .unwrap_or(defaults.rolling_nights),
            min_nights_played: parse_opt(&self.min_nights_played, "minNightsPlayed")?,
            min_total_buy_in_cents: parse_non_negative(&self.min_total_buy_in_cents, "minTotalBuyInCents")?,
            top_n: parse_choice(&self.top_n, &TOP_N_CHOICES, "topN")?.unwrap_or(defaults.top_n),
            include_guest_players: parse_bool(&self.include_guest_players, "includeGuestPlayers")?
                .unwrap_or(defaults.include_guest_players),
            include_draft_nights: parse_bool(&self.include_draft_nights, "includeDraftNights")?
                .unwrap_or(defaults.include_draft_nights),
        })
    }

    fn parse_date_range(&self) -> Result<DateRange> {
        match non_empty(&self.date_range) {
            None | Some("all") => Ok(DateRange::All),
            Some("7") => Ok(DateRange::LastDays(7)),
            Some("30") => Ok(DateRange::LastDays(30)),
            Some("90") => Ok(DateRange::LastDays(90)),
            Some("custom") => {
                let from = parse_date(&self.date_from, "dateFrom")?;
                let to = parse_date(&self.date_to, "dateTo")?;
                if let (Some(from), Some(to)) = (from, to) {
                    if from > to {
                        bail!("dateFrom {} is after dateTo {}", from, to);
                    }
                }
                Ok(DateRange::Custom { from, to })
            }
            Some(other) => bail!("Unknown dateRange: {}", other),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_opt<T: std::str::FromStr>(value: &Option<String>, field: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    non_empty(value)
        .map(|s| s.parse::<T>().with_context(|| format!("Invalid {}: {}", field, s)))
        .transpose()
}

fn parse_non_negative(value: &Option<String>, field: &str) -> Result<Option<i64>> {
    match parse_opt::<i64>(value, field)? {
        Some(v) if v < 0 => bail!("{} must not be negative", field),
        other => Ok(other),
    }
}

fn parse_choice(value: &Option<String>, choices: &[usize], field: &str) -> Result<Option<usize>> {
    match parse_opt::<usize>(value, field)? {
        Some(v) if !choices.contains(&v) => bail!("{} must be one of {:?}", field, choices),
        other => Ok(other),
    }
}

fn parse_bool(value: &Option<String>, field: &str) -> Result<Option<bool>> {
    match non_empty(value) {
        None => Ok(None),
        Some("true") | Some("1") => Ok(Some(true)),
        Some("false") | Some("0") => Ok(Some(false)),
        Some(other) => bail!("Invalid {}: {}", field, other),
    }
}

fn parse_date(value: &Option<String>, field: &str) -> Result<Option<NaiveDate>> {
    non_empty(value)
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid {}: {}", field, s))
        })
        .transpose()
}
