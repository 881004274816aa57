use sqlx::SqlitePool;
use storage::{
    dto::{employee::EmployeeResponse, rotation::RotationResponse},
    error::Result,
    models::DutyType,
    repository::employee::EmployeeRepository,
    services::rotation,
};

/// Rank the active roster for a duty type and split it into the current
/// duty holder and the waiting queue. An empty roster yields no current
/// holder and an empty queue, not an error.
pub async fn get_rotation(pool: &SqlitePool, duty: DutyType) -> Result<RotationResponse> {
    let repo = EmployeeRepository::new(pool);
    let employees = repo.list().await?;

    let mut ranked: Vec<EmployeeResponse> = rotation::rank(&employees, duty)
        .into_iter()
        .map(EmployeeResponse::from)
        .collect();

    let current = if ranked.is_empty() {
        None
    } else {
        Some(ranked.remove(0))
    };

    Ok(RotationResponse {
        duty_type: duty,
        current,
        queue: ranked,
    })
}
