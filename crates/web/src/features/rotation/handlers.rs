use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::rotation::RotationResponse, models::DutyType};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/rotation/{duty_type}",
    params(
        ("duty_type" = String, Path, description = "Duty type key (breakfast or orders)")
    ),
    responses(
        (status = 200, description = "Current duty holder and queue, fairest-first", body = RotationResponse),
        (status = 400, description = "Unknown duty type")
    ),
    tag = "rotation"
)]
pub async fn get_rotation(
    State(db): State<Database>,
    Path(duty_type): Path<String>,
) -> Result<Response, WebError> {
    let duty: DutyType = duty_type.parse().map_err(WebError::Storage)?;

    let rotation = services::get_rotation(db.pool(), duty).await?;

    Ok(Json(rotation).into_response())
}
