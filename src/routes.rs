use crate::common::state::AppState;
use crate::config::Config;
use crate::mock_items;
use axum::Router;
use sea_orm::DatabaseConnection;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

pub fn build_router(db: &DatabaseConnection, config: &Config) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(
        title = "Oilfield API",
        description = "Mock item CRUD over an embedded SQLite store"
    ))]
    struct ApiDoc;

    let app_state: AppState = AppState::new(db.clone(), config.clone());

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(crate::common::views::router())
        .merge(mock_items::views::router(&app_state))
        .split_for_parts();

    router.merge(Scalar::with_url("/swagger", api))
}
