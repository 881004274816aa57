use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::employee::{
        CreateEmployeeRequest, EmployeeResponse, RenameEmployeeRequest, UpdateStatusRequest,
    },
    models::DutyType,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "List all employees with their per-duty turn state", body = Vec<EmployeeResponse>)
    ),
    tag = "employees"
)]
pub async fn list_employees(State(db): State<Database>) -> Result<Response, WebError> {
    let employees = services::list_employees(db.pool()).await?;

    let response: Vec<EmployeeResponse> =
        employees.into_iter().map(EmployeeResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployeeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Employee created successfully", body = EmployeeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(db): State<Database>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let employee = services::create_employee(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee id")
    ),
    request_body = RenameEmployeeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Employee renamed successfully", body = EmployeeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn rename_employee(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<RenameEmployeeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let employee = services::rename_employee(db.pool(), id, &req).await?;

    Ok(Json(EmployeeResponse::from(employee)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/employees/{id}/status",
    params(
        ("id" = i64, Path, description = "Employee id")
    ),
    request_body = UpdateStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Employee status updated", body = EmployeeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn update_status(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Response, WebError> {
    let employee = services::update_status(db.pool(), id, &req).await?;

    Ok(Json(EmployeeResponse::from(employee)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Employee deleted along with all their history records"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_employee(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/employees/{id}/complete/{duty_type}",
    params(
        ("id" = i64, Path, description = "Employee id"),
        ("duty_type" = String, Path, description = "Duty type key (breakfast or orders)")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Completion recorded", body = EmployeeResponse),
        (status = 400, description = "Unknown duty type"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn complete_duty(
    State(db): State<Database>,
    Path((id, duty_type)): Path<(i64, String)>,
) -> Result<Response, WebError> {
    let duty: DutyType = duty_type.parse().map_err(WebError::Storage)?;

    let employee = services::complete_duty(db.pool(), id, duty).await?;

    Ok(Json(EmployeeResponse::from(employee)).into_response())
}
