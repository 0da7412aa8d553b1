pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod rating;
pub mod services;
pub mod stats;

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use log::info;

use crate::cli::{Command, FilterArgs, ReportSection};
use crate::config::AppConfig;
use crate::domain::{FilterParams, GroupId, StatsFilter};
use crate::services::reporting::{ReportService, StatsReport};
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_setup(reset: bool) -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database.path)?;
    let conn = database::get_connection(&pool)?;

    if reset {
        database::setup::reset_database(&conn)?;
    } else {
        database::setup::create_schema(&conn)?;
    }
    info!("Database ready at {}", config.database.path);
    Ok(())
}

pub fn handle_report(section: ReportSection, group_id: GroupId, id: Option<i64>, filter: &FilterArgs) -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database.path)?;
    let conn = database::get_connection(&pool)?;

    let mut filter = FilterParams::from(filter).parse();
    if section == ReportSection::Season {
        filter = StatsFilter {
            season_id: Some(required_id(section, id)?),
            ..filter
        };
    }

    let service = ReportService::new(config.stats);
    let Some(report) = service.report(&conn, group_id, filter)? else {
        bail!("Group {} not found", group_id);
    };

    let body = render_section(&report, section, id)?;
    println!("{}", format!("== {:?} report for group {} ==", section, group_id).bold().green());
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

fn render_section(report: &StatsReport, section: ReportSection, id: Option<i64>) -> Result<serde_json::Value> {
    let value = match section {
        ReportSection::Players => serde_json::to_value(report.players())?,
        ReportSection::Leaderboard => serde_json::to_value(report.leaderboard())?,
        ReportSection::Nights => serde_json::to_value(report.nights())?,
        ReportSection::Seasons => serde_json::to_value(report.seasons())?,
        ReportSection::Ratings => serde_json::to_value(report.ratings())?,
        ReportSection::Heaters => serde_json::to_value(report.heaters())?,
        ReportSection::Awards => serde_json::to_value(report.awards())?,
        ReportSection::Rolling => serde_json::to_value(report.rolling())?,
        ReportSection::Trend => serde_json::to_value(report.trend())?,
        ReportSection::Season => {
            let season_id = required_id(section, id)?;
            let detail = report
                .season_detail(season_id)
                .ok_or_else(|| anyhow!("Season {} not found", season_id))?;
            serde_json::to_value(detail)?
        }
        ReportSection::Player => {
            let player_id = required_id(section, id)?;
            let profile = report
                .player_profile(player_id)
                .ok_or_else(|| anyhow!("Player {} not found", player_id))?;
            serde_json::to_value(profile)?
        }
    };
    Ok(value)
}

fn required_id(section: ReportSection, id: Option<i64>) -> Result<i64> {
    id.ok_or_else(|| anyhow!("--id is required for the {:?} section", section))
}
