use super::dto::ActorNameQuery;
use super::model::Actor;
use super::service::ActorService;
use crate::common::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;

/// List the fixed set of actors shown on the home page
#[utoipa::path(
    get,
    path = "/actors/get-all",
    responses(
        (status = 200, description = "Actors shown on the home page", body = Vec<Actor>)
    ),
    tag = "Actors"
)]
pub async fn get_all_actors(State(state): State<AppState>) -> ApiResult<Json<Vec<Actor>>> {
    Ok(Json(ActorService::get_all_actors(state).await?))
}

/// Look up actors by their exact name
#[utoipa::path(
    get,
    path = "/actors/get-actor-by-name",
    params(
        ("name" = String, Query, description = "Exact name of the actor")
    ),
    responses(
        (status = 200, description = "Actors whose name matches exactly", body = Vec<Actor>)
    ),
    tag = "Actors"
)]
pub async fn get_actor_by_name(
    State(state): State<AppState>,
    Query(params): Query<ActorNameQuery>,
) -> ApiResult<Json<Vec<Actor>>> {
    Ok(Json(ActorService::get_actor_by_name(state, &params.name).await?))
}
