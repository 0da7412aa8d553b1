use anyhow::Result;
use rusqlite::{Connection, params};

use crate::domain::{GroupId, Player};
use crate::errors::{with_insert_context, with_load_context};

pub fn insert_player(conn: &Connection, group_id: GroupId, name: &str, is_guest: bool) -> Result<Player> {
    let sql = "INSERT INTO players (group_id, name, is_guest) VALUES (?1, ?2, ?3) RETURNING id, name, is_guest";

    with_insert_context(
        conn.query_row(sql, params![group_id, name, is_guest], parse_player_row),
        "player",
    )
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        is_guest: row.get(2)?,
    })
}

pub fn list_by_group(conn: &Connection, group_id: GroupId) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, is_guest FROM players WHERE group_id = ?1 ORDER BY id";

    let mut stmt = with_load_context(conn.prepare(sql), "players", group_id)?;
    let rows = stmt
        .query_map(params![group_id], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>();

    with_load_context(rows, "players", group_id)
}
