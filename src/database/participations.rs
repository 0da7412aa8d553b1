use anyhow::Result;
use rusqlite::{Connection, params};

use crate::domain::{GroupId, Participation};
use crate::errors::{with_insert_context, with_load_context};

pub fn insert_participation(conn: &Connection, participation: &Participation) -> Result<Participation> {
    let sql = "INSERT INTO participations (night_id, player_id, buy_in_cents, buy_in_count, cash_out_cents, adjustment_cents) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING night_id, player_id, buy_in_cents, buy_in_count, cash_out_cents, adjustment_cents";

    with_insert_context(
        conn.query_row(
            sql,
            params![
                participation.night_id,
                participation.player_id,
                participation.buy_in_cents,
                participation.buy_in_count,
                participation.cash_out_cents,
                participation.adjustment_cents
            ],
            parse_participation_row,
        ),
        "participation",
    )
}

fn parse_participation_row(row: &rusqlite::Row) -> rusqlite::Result<Participation> {
    Ok(Participation {
        night_id: row.get(0)?,
        player_id: row.get(1)?,
        buy_in_cents: row.get(2)?,
        buy_in_count: row.get(3)?,
        cash_out_cents: row.get(4)?,
        adjustment_cents: row.get(5)?,
    })
}

pub fn list_by_group(conn: &Connection, group_id: GroupId) -> Result<Vec<Participation>> {
    let sql = "
        SELECT p.night_id, p.player_id, p.buy_in_cents, p.buy_in_count, p.cash_out_cents, p.adjustment_cents
        FROM participations p
        JOIN nights n ON p.night_id = n.id
        WHERE n.group_id = ?1
        ORDER BY p.night_id, p.player_id
    ";

    let mut stmt = with_load_context(conn.prepare(sql), "participations", group_id)?;
    let rows = stmt
        .query_map(params![group_id], parse_participation_row)?
        .collect::<rusqlite::Result<Vec<_>>>();

    with_load_context(rows, "participations", group_id)
}
