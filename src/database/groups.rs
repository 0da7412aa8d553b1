use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use crate::domain::{Group, GroupId};
use crate::errors::with_insert_context;

pub fn insert_group(
    conn: &Connection,
    name: &str,
    min_nights_played: Option<u32>,
    min_total_buy_in_cents: Option<i64>,
) -> Result<Group> {
    let sql = "INSERT INTO poker_groups (name, min_nights_played, min_total_buy_in_cents) VALUES (?1, ?2, ?3) RETURNING id, name, min_nights_played, min_total_buy_in_cents";

    with_insert_context(
        conn.query_row(
            sql,
            params![name, min_nights_played, min_total_buy_in_cents],
            parse_group_row,
        ),
        "group",
    )
}

fn parse_group_row(row: &rusqlite::Row) -> rusqlite::Result<Group> {
    Ok(Group {
        id: row.get(0)?,
        name: row.get(1)?,
        min_nights_played: row.get(2)?,
        min_total_buy_in_cents: row.get(3)?,
    })
}

pub fn find_by_id(conn: &Connection, id: GroupId) -> Result<Option<Group>> {
    let sql = "SELECT id, name, min_nights_played, min_total_buy_in_cents FROM poker_groups WHERE id = ?1";

    conn.query_row(sql, params![id], parse_group_row)
        .optional()
        .context("Failed to query group by id")
}
