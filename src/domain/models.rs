use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type GroupId = i64;
pub type PlayerId = i64;
pub type NightId = i64;
pub type SeasonId = i64;

/// A poker group owning its own ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    /// Group-level leaderboard defaults, overridable per request
    pub min_nights_played: Option<u32>,
    pub min_total_buy_in_cents: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_guest: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NightStatus {
    Open,
    Closed,
}

impl NightStatus {
    pub fn as_str(&self) -> &str {
        match self {
            NightStatus::Open => "OPEN",
            NightStatus::Closed => "CLOSED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "OPEN" => Some(NightStatus::Open),
            "CLOSED" => Some(NightStatus::Closed),
            _ => None,
        }
    }
}

/// One recorded poker session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Night {
    pub id: NightId,
    pub name: String,
    pub scheduled_at: NaiveDateTime,
    pub status: NightStatus,
    pub season_id: Option<SeasonId>,
}

impl Night {
    pub fn is_closed(&self) -> bool {
        self.status == NightStatus::Closed
    }
}

/// One player's money movements at one night
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub night_id: NightId,
    pub player_id: PlayerId,
    pub buy_in_cents: i64,
    /// Number of separate buy-ins making up `buy_in_cents`
    pub buy_in_count: u32,
    /// Unset while the night is still open
    pub cash_out_cents: Option<i64>,
    pub adjustment_cents: i64,
}

impl Participation {
    pub fn cash_out_or_zero(&self) -> i64 {
        self.cash_out_cents.unwrap_or(0)
    }

    /// Adjustments are owed by the player, so they reduce profit
    pub fn profit_cents(&self) -> i64 {
        self.cash_out_or_zero() - self.buy_in_cents - self.adjustment_cents
    }

    pub fn rebuys(&self) -> u32 {
        self.buy_in_count.saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: SeasonId,
    pub name: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
}
