use super::handlers;
use carhub_kernel::server::state::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// All `/cars` routes. Handlers sharing a path are registered together.
pub fn cars_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::add_car))
        .routes(routes!(handlers::add_person, handlers::update_person))
        .routes(routes!(handlers::purchase))
        .routes(routes!(handlers::delete_person, handlers::get_owner_cars))
        .routes(routes!(handlers::delete_car, handlers::get_car_owner))
        .routes(routes!(handlers::most_popular_car_models))
}
