pub mod handlers;
mod routes;
mod services;

pub use routes::{export_routes, routes};
