use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{export_csv, list_history};

pub fn routes() -> Router<Database> {
    Router::new().route("/:duty_type", get(list_history))
}

pub fn export_routes() -> Router<Database> {
    Router::new().route("/csv/:duty_type", get(export_csv))
}
