use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{Connection, params};

use crate::domain::{GroupId, Season};
use crate::errors::{with_insert_context, with_load_context};

pub fn insert_season(
    conn: &Connection,
    group_id: GroupId,
    name: &str,
    starts_at: NaiveDateTime,
    ends_at: Option<NaiveDateTime>,
) -> Result<Season> {
    let sql = "INSERT INTO seasons (group_id, name, starts_at, ends_at) VALUES (?1, ?2, ?3, ?4) RETURNING id, name, starts_at, ends_at";

    with_insert_context(
        conn.query_row(sql, params![group_id, name, starts_at, ends_at], parse_season_row),
        "season",
    )
}

fn parse_season_row(row: &rusqlite::Row) -> rusqlite::Result<Season> {
    Ok(Season {
        id: row.get(0)?,
        name: row.get(1)?,
        starts_at: row.get(2)?,
        ends_at: row.get(3)?,
    })
}

pub fn list_by_group(conn: &Connection, group_id: GroupId) -> Result<Vec<Season>> {
    let sql = "SELECT id, name, starts_at, ends_at FROM seasons WHERE group_id = ?1 ORDER BY starts_at, id";

    let mut stmt = with_load_context(conn.prepare(sql), "seasons", group_id)?;
    let rows = stmt
        .query_map(params![group_id], parse_season_row)?
        .collect::<rusqlite::Result<Vec<_>>>();

    with_load_context(rows, "seasons", group_id)
}
