pub mod connection;
pub mod groups;
pub mod ledger;
pub mod nights;
pub mod participations;
pub mod players;
pub mod seasons;
pub mod setup;

pub use connection::{DbConn, DbPool, create_pool, get_connection};
pub use ledger::load_ledger;
