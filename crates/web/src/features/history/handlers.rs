use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    models::{DutyType, HistoryRecord},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/history/{duty_type}",
    params(
        ("duty_type" = String, Path, description = "Duty type key (breakfast or orders)")
    ),
    responses(
        (status = 200, description = "Completion history, newest first", body = Vec<HistoryRecord>),
        (status = 400, description = "Unknown duty type")
    ),
    tag = "history"
)]
pub async fn list_history(
    State(db): State<Database>,
    Path(duty_type): Path<String>,
) -> Result<Response, WebError> {
    let duty: DutyType = duty_type.parse().map_err(WebError::Storage)?;

    let history = services::get_history(db.pool(), duty).await?;

    Ok(Json(history).into_response())
}

#[utoipa::path(
    get,
    path = "/api/export/csv/{duty_type}",
    params(
        ("duty_type" = String, Path, description = "Duty type key (breakfast or orders)")
    ),
    responses(
        (status = 200, description = "Completion history as a CSV attachment", content_type = "text/csv"),
        (status = 400, description = "Unknown duty type")
    ),
    tag = "history"
)]
pub async fn export_csv(
    State(db): State<Database>,
    Path(duty_type): Path<String>,
) -> Result<Response, WebError> {
    let duty: DutyType = duty_type.parse().map_err(WebError::Storage)?;

    let history = services::get_history(db.pool(), duty).await?;
    let csv = services::to_csv(&history);

    let disposition = format!("attachment; filename=\"{duty}-history.csv\"");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, disposition.as_str()),
        ],
        csv,
    )
        .into_response())
}
