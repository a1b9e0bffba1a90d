use super::dto::{SearchActorsResponse, SearchMoviesResponse, SearchQuery};
use crate::common::error::ApiResult;
use crate::modules::actors::service::ActorService;
use crate::modules::movies::service::MovieService;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;

/// Search actors with a free-text query
#[utoipa::path(
    get,
    path = "/search-actors",
    params(
        ("query" = String, Query, description = "Text to look for in actor names")
    ),
    responses(
        (status = 200, description = "Matching actors plus the query echoed back", body = SearchActorsResponse)
    ),
    tag = "Search"
)]
pub async fn search_actors(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<SearchActorsResponse>> {
    let actors = ActorService::search_actors_by_name(state, &params.query).await?;
    Ok(Json(SearchActorsResponse { actors, query: params.query }))
}

/// Search movies with a free-text query
#[utoipa::path(
    get,
    path = "/search-movies",
    params(
        ("query" = String, Query, description = "Text to look for in movie names")
    ),
    responses(
        (status = 200, description = "Matching movies plus the query echoed back", body = SearchMoviesResponse)
    ),
    tag = "Search"
)]
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<SearchMoviesResponse>> {
    let movies = MovieService::search_movies_by_name(state, &params.query).await?;
    Ok(Json(SearchMoviesResponse { movies, query: params.query }))
}
