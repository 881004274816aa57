use anyhow::Context;
use axum::{Json, Router, routing::get};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::employees::handlers::list_employees,
        features::employees::handlers::create_employee,
        features::employees::handlers::rename_employee,
        features::employees::handlers::update_status,
        features::employees::handlers::delete_employee,
        features::employees::handlers::complete_duty,
        features::rotation::handlers::get_rotation,
        features::history::handlers::list_history,
        features::history::handlers::export_csv,
    ),
    components(
        schemas(
            storage::dto::employee::EmployeeResponse,
            storage::dto::employee::CreateEmployeeRequest,
            storage::dto::employee::RenameEmployeeRequest,
            storage::dto::employee::UpdateStatusRequest,
            storage::dto::rotation::RotationResponse,
            storage::models::DutyType,
            storage::models::TurnState,
            storage::models::HistoryRecord,
        )
    ),
    tags(
        (name = "employees", description = "Roster management and duty completion"),
        (name = "rotation", description = "Who is up next, per duty type"),
        (name = "history", description = "Completion history and CSV export"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Duty Rotation API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to open database")?;
    tracing::info!("Database opened at {}", config.database_url);

    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/employees", features::employees::routes(api_keys))
        .nest("/api/rotation", features::rotation::routes())
        .nest("/api/history", features::history::routes())
        .nest("/api/export", features::history::export_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;

    axum::serve(listener, app).await?;

    Ok(())
}
