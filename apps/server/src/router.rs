use axum::Router;
use carhub::kernel::server::state::ApiState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(title = "CarHub", description = "Cars, owners and trade deals"),
    tags(
        (name = "Cars", description = "Cars, owners and ownership transfer"),
        (name = "System", description = "Service health"),
    )
)]
struct ApiDoc;

/// Application router: system and cars routes plus the Scalar UI at `/api`.
pub(crate) fn init(state: ApiState) -> Router {
    let (routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(carhub::server::router::system_router())
        .merge(carhub::server::router::cars_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    Router::new().merge(routes).merge(Scalar::with_url("/api", api_doc))
}
