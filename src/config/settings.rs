#[derive(Debug, Clone)]
pub struct StatsSettings {
    pub baseline_rating: f64,
    pub k_factor: f64,
    pub heater_max_buy_in_cents: i64,
    pub heater_min_roi: f64,
    pub win_rate_min_games: u32,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            baseline_rating: 1500.0,
            k_factor: 32.0,
            heater_max_buy_in_cents: 2000, // $20 stakes or less
            heater_min_roi: 0.5,
            win_rate_min_games: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "poker_night_stats.db".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub stats: StatsSettings,
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            stats: StatsSettings::default(),
            database: DatabaseSettings::default(),
        }
    }
}
