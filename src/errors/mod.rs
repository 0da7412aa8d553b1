use anyhow::Context as _;

use crate::domain::GroupId;

/// Add context to ledger load errors
pub fn load_context(entity: &str, group_id: GroupId) -> String {
    format!("Failed to load {} for group {}", entity, group_id)
}

/// Add context to ledger insert errors
pub fn insert_context(entity: &str) -> String {
    format!("Failed to insert {}", entity)
}

/// Wrap result with load context
pub fn with_load_context<T, E>(result: Result<T, E>, entity: &str, group_id: GroupId) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| load_context(entity, group_id))
}

/// Wrap result with insert context
pub fn with_insert_context<T, E>(result: Result<T, E>, entity: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| insert_context(entity))
}
