use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::FilterParams;

#[derive(Parser, Debug)]
#[command(author, version, about = "poker-night-stats backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Create the ledger tables in the database
    Setup {
        /// Drop existing tables first
        #[arg(long)]
        reset: bool,
    },
    /// Print one statistics section of a group as JSON
    Report {
        #[arg(value_enum)]
        section: ReportSection,
        /// Group id
        #[arg(short, long)]
        group: i64,
        /// Season id or player id, for the `season` and `player` sections
        #[arg(long)]
        id: Option<i64>,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSection {
    Players,
    Leaderboard,
    Nights,
    Seasons,
    Season,
    Ratings,
    Heaters,
    Awards,
    Rolling,
    Trend,
    Player,
}

/// Filter flags; values are validated the same way as query parameters
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    /// all, 7, 30, 90 or custom
    #[arg(long)]
    pub date_range: Option<String>,
    /// YYYY-MM-DD, with --date-range custom
    #[arg(long)]
    pub date_from: Option<String>,
    /// YYYY-MM-DD, with --date-range custom
    #[arg(long)]
    pub date_to: Option<String>,
    #[arg(long)]
    pub season_id: Option<String>,
    /// 5, 10 or 20
    #[arg(long)]
    pub rolling_nights: Option<String>,
    #[arg(long)]
    pub min_nights_played: Option<String>,
    #[arg(long)]
    pub min_total_buy_in_cents: Option<String>,
    /// 3, 5 or 10
    #[arg(long)]
    pub top_n: Option<String>,
    #[arg(long)]
    pub include_guest_players: Option<String>,
    #[arg(long)]
    pub include_draft_nights: Option<String>,
}

impl From<&FilterArgs> for FilterParams {
    fn from(args: &FilterArgs) -> Self {
        FilterParams {
            date_range: args.date_range.clone(),
            date_from: args.date_from.clone(),
            date_to: args.date_to.clone(),
            season_id: args.season_id.clone(),
            rolling_nights: args.rolling_nights.clone(),
            min_nights_played: args.min_nights_played.clone(),
            min_total_buy_in_cents: args.min_total_buy_in_cents.clone(),
            top_n: args.top_n.clone(),
            include_guest_players: args.include_guest_players.clone(),
            include_draft_nights: args.include_draft_nights.clone(),
        }
    }
}
