use anyhow::Result;
use log::debug;
use rusqlite::Connection;

use super::{groups, nights, participations, players, seasons};
use crate::domain::{GroupId, Ledger};

/// Materialises the whole ledger of one group; `None` when the group does not exist
pub fn load_ledger(conn: &Connection, group_id: GroupId) -> Result<Option<Ledger>> {
    let Some(group) = groups::find_by_id(conn, group_id)? else {
        return Ok(None);
    };

    let ledger = Ledger::new(
        group,
        players::list_by_group(conn, group_id)?,
        nights::list_by_group(conn, group_id)?,
        participations::list_by_group(conn, group_id)?,
        seasons::list_by_group(conn, group_id)?,
    );

    debug!(
        "Loaded ledger for group {}: {} players, {} nights, {} participations, {} seasons",
        group_id,
        ledger.players.len(),
        ledger.nights.len(),
        ledger.participations.len(),
        ledger.seasons.len()
    );
    Ok(Some(ledger))
}
