use std::collections::HashMap;

use sea_orm::{DbErr, FromQueryResult};
use uuid::Uuid;

/// Row shape of `SELECT <fk> AS id, COUNT(..) AS total ... GROUP BY <fk>`.
#[derive(Debug, FromQueryResult)]
pub struct GroupCount {
    pub id: Uuid,
    pub total: i64,
}

pub fn count_map(rows: Vec<GroupCount>) -> HashMap<Uuid, u64> {
    rows.into_iter()
        .map(|row| (row.id, row.total.max(0) as u64))
        .collect()
}

pub fn is_unique_violation(err: &DbErr) -> bool {
    let err_str = err.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    let err_str = err.to_string().to_lowercase();
    err_str.contains("23503") || err_str.contains("foreign key")
}
