use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::employee::EmployeeResponse;
use crate::models::DutyType;

/// Rotation order for one duty type: the employee whose turn it is now,
/// followed by the rest of the queue in priority order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RotationResponse {
    pub duty_type: DutyType,
    pub current: Option<EmployeeResponse>,
    pub queue: Vec<EmployeeResponse>,
}
