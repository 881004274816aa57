use axum::{
    Router, middleware,
    routing::{delete, get, patch, post, put},
};
use storage::Database;

use super::handlers::{
    complete_duty, create_employee, delete_employee, list_employees, rename_employee,
    update_status,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_employee))
        .route("/:id", put(rename_employee))
        .route("/:id", delete(delete_employee))
        .route("/:id/status", patch(update_status))
        .route("/:id/complete/:duty_type", post(complete_duty))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_employees))
        .merge(protected)
}
