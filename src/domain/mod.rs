pub mod filter;
mod ledger;
pub mod models;

pub use filter::{DateRange, FilterParams, StatsFilter};
pub use ledger::Ledger;
pub use models::*;
