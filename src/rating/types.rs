use std::collections::HashMap;

use crate::domain::PlayerId;

pub type RatingValue = f64;
pub type RatingMap = HashMap<PlayerId, RatingValue>;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRating {
    pub player_id: PlayerId,
    pub rating: RatingValue,
    /// Movement over the last N processed nights
    pub change_last_n: RatingValue,
    pub nights_rated: u32,
}

/// Head-to-head result from one player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn from_profits(own_cents: i64, other_cents: i64) -> Self {
        match own_cents.cmp(&other_cents) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }

    pub fn score(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Draw => 0.5,
            Outcome::Loss => 0.0,
        }
    }
}
