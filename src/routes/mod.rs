pub mod participation;

use axum::Router;
use axum::routing::post;

use crate::state::SharedState;

pub fn participation_routes() -> Router<SharedState> {
    Router::new().route(
        "/upload",
        post(participation::evaluate).options(participation::evaluate_options),
    )
}
