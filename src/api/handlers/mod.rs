use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::AppConfig;

pub mod stats;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
    pub config: AppConfig,
}
