use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct KnownDate {
    pub id: i64,
    // the raw query value this record answers for
    pub value: String,
    pub created_at: i64,
}
