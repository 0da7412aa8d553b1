use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{Connection, params};

use crate::domain::{GroupId, Night, NightId, NightStatus, SeasonId};
use crate::errors::{with_insert_context, with_load_context};

pub fn insert_night(
    conn: &Connection,
    group_id: GroupId,
    name: &str,
    scheduled_at: NaiveDateTime,
    status: NightStatus,
    season_id: Option<SeasonId>,
) -> Result<Night> {
    let sql = "INSERT INTO nights (group_id, name, scheduled_at, status, season_id) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id, name, scheduled_at, status, season_id";

    with_insert_context(
        conn.query_row(
            sql,
            params![group_id, name, scheduled_at, status.as_str(), season_id],
            parse_night_row,
        ),
        "night",
    )
}

fn parse_night_row(row: &rusqlite::Row) -> rusqlite::Result<Night> {
    let status: String = row.get(3)?;
    let status = NightStatus::parse(&status).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, format!("Unknown night status: {}", status).into())
    })?;

    Ok(Night {
        id: row.get(0)?,
        name: row.get(1)?,
        scheduled_at: row.get(2)?,
        status,
        season_id: row.get(4)?,
    })
}

pub fn list_by_group(conn: &Connection, group_id: GroupId) -> Result<Vec<Night>> {
    let sql = "SELECT id, name, scheduled_at, status, season_id FROM nights WHERE group_id = ?1 ORDER BY scheduled_at, id";

    let mut stmt = with_load_context(conn.prepare(sql), "nights", group_id)?;
    let rows = stmt
        .query_map(params![group_id], parse_night_row)?
        .collect::<rusqlite::Result<Vec<_>>>();

    with_load_context(rows, "nights", group_id)
}

/// Status flips are the only night mutation the ledger tooling needs
pub fn set_status(conn: &Connection, night_id: NightId, status: NightStatus) -> Result<()> {
    let updated = conn.execute(
        "UPDATE nights SET status = ?1 WHERE id = ?2",
        params![status.as_str(), night_id],
    )?;
    if updated == 0 {
        anyhow::bail!("Night {} not found", night_id);
    }
    Ok(())
}
