use sqlx::SqlitePool;
use storage::{
    dto::employee::{CreateEmployeeRequest, RenameEmployeeRequest, UpdateStatusRequest},
    error::Result,
    models::{DutyType, Employee},
    repository::employee::EmployeeRepository,
};

/// List the full roster, active and inactive
pub async fn list_employees(pool: &SqlitePool) -> Result<Vec<Employee>> {
    let repo = EmployeeRepository::new(pool);
    repo.list().await
}

/// Add an employee to the roster
pub async fn create_employee(
    pool: &SqlitePool,
    request: &CreateEmployeeRequest,
) -> Result<Employee> {
    let repo = EmployeeRepository::new(pool);
    repo.create(&request.name).await
}

/// Rename an employee
pub async fn rename_employee(
    pool: &SqlitePool,
    id: i64,
    request: &RenameEmployeeRequest,
) -> Result<Employee> {
    let repo = EmployeeRepository::new(pool);
    repo.rename(id, &request.name).await
}

/// Activate or deactivate an employee
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    request: &UpdateStatusRequest,
) -> Result<Employee> {
    let repo = EmployeeRepository::new(pool);
    repo.set_active(id, request.is_active).await
}

/// Delete an employee and their history
pub async fn delete_employee(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = EmployeeRepository::new(pool);
    repo.delete(id).await
}

/// Record a completed turn for a duty type
pub async fn complete_duty(pool: &SqlitePool, id: i64, duty: DutyType) -> Result<Employee> {
    let repo = EmployeeRepository::new(pool);
    repo.record_completion(id, duty).await
}
