use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One completed turn. Append-only: records are never mutated after
/// insertion, and `employee_name` is the name at the time of the action,
/// not a live reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HistoryRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub date: DateTime<Utc>,
}
