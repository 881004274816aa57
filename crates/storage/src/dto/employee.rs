use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Employee, TurnState};

/// Employee as returned by the API, with per-duty turn state grouped.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub breakfast: TurnState,
    pub orders: TurnState,
    pub created_at: DateTime<Utc>,
}

/// Request payload for adding an employee to the roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeeRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,
}

/// Request payload for renaming an employee
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RenameEmployeeRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,
}

/// Request payload for toggling rotation membership
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            breakfast: TurnState {
                last_turn_date: employee.breakfast_last_turn_date,
                turn_count: employee.breakfast_turn_count,
            },
            orders: TurnState {
                last_turn_date: employee.orders_last_turn_date,
                turn_count: employee.orders_turn_count,
            },
            id: employee.id,
            name: employee.name,
            is_active: employee.is_active,
            created_at: employee.created_at,
        }
    }
}
