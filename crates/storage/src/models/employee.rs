use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::DutyType;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub breakfast_last_turn_date: Option<DateTime<Utc>>,
    pub breakfast_turn_count: i64,
    pub orders_last_turn_date: Option<DateTime<Utc>>,
    pub orders_turn_count: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Turn-tracking state of one employee for one duty type. Both fields are
/// written only by completion events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TurnState {
    pub last_turn_date: Option<DateTime<Utc>>,
    pub turn_count: i64,
}

impl Employee {
    pub fn turn_state(&self, duty: DutyType) -> TurnState {
        match duty {
            DutyType::Breakfast => TurnState {
                last_turn_date: self.breakfast_last_turn_date,
                turn_count: self.breakfast_turn_count,
            },
            DutyType::Orders => TurnState {
                last_turn_date: self.orders_last_turn_date,
                turn_count: self.orders_turn_count,
            },
        }
    }
}
