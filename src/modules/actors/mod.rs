use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get-all", get(handler::get_all_actors))
        .route("/get-actor-by-name", get(handler::get_actor_by_name))
}
