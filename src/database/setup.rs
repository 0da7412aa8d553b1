use anyhow::{Context, Result};
use rusqlite::Connection;

const DROP_TABLES: [&str; 5] = ["participations", "nights", "seasons", "players", "poker_groups"];

/// Creates any missing ledger tables
pub fn create_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute schema statement {}", idx + 1))?;
    }

    log::info!("Ledger schema ready ({} statements)", statements.len());
    Ok(())
}

/// Drops every ledger table and recreates the schema from scratch
pub fn reset_database(conn: &Connection) -> Result<()> {
    for table in DROP_TABLES {
        execute_sql(conn, &format!("DROP TABLE IF EXISTS {}", table))
            .with_context(|| format!("Failed to drop table {}", table))?;
    }

    log::warn!("Dropped all ledger tables");
    create_schema(conn)
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
