pub mod elo;
pub mod types;

pub use elo::calculate_ratings;
pub use types::{Outcome, PlayerRating, RatingMap, RatingValue};
