use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/top100", get(handler::get_top100_oscars))
}
