use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_rotation;

pub fn routes() -> Router<Database> {
    Router::new().route("/:duty_type", get(get_rotation))
}
