use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use backend_application::AppState;

use crate::error::handle_panic;
use crate::handlers::{clock_in_handlers, item_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops_handlers::root))
        .route("/items", post(item_handlers::create_item))
        .route("/items/filter", get(item_handlers::filter_items))
        .route(
            "/items/:id",
            get(item_handlers::get_item)
                .put(item_handlers::update_item)
                .delete(item_handlers::delete_item),
        )
        .route("/clock-in", post(clock_in_handlers::create_clock_in))
        .route(
            "/clock-in/:id",
            get(clock_in_handlers::get_clock_in)
                .put(clock_in_handlers::update_clock_in)
                .delete(clock_in_handlers::delete_clock_in),
        )
        .route("/ops/health/live", get(ops_handlers::health_live))
        .route("/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
