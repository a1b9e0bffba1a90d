use super::dto::{MovieDto, MovieIdQuery, MovieNameQuery};
use super::model::Movie;
use super::service::MovieService;
use crate::common::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;

/// List the first 100 movies with their posters
#[utoipa::path(
    get,
    path = "/movies/get-all",
    responses(
        (status = 200, description = "Movies ordered by id, poster attached where present", body = Vec<MovieDto>)
    ),
    tag = "Movies"
)]
pub async fn get_all_movies(State(state): State<AppState>) -> ApiResult<Json<Vec<MovieDto>>> {
    Ok(Json(MovieService::get_all_movies_with_posters(state).await?))
}

/// Movie details by id
#[utoipa::path(
    get,
    path = "/movies/get-movie-by-id",
    params(
        ("movieId" = i64, Query, description = "Id of the movie")
    ),
    responses(
        (status = 200, description = "The movie", body = MovieDto),
        (status = 404, description = "No movie with that id")
    ),
    tag = "Movies"
)]
pub async fn get_movie_by_id(
    State(state): State<AppState>,
    Query(params): Query<MovieIdQuery>,
) -> ApiResult<Json<MovieDto>> {
    let movie = MovieService::get_movie_by_id(state, params.movie_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(movie))
}

/// Search movies by name
#[utoipa::path(
    get,
    path = "/movies/search-movies",
    params(
        ("name" = String, Query, description = "Substring to look for, case-insensitive")
    ),
    responses(
        (status = 200, description = "Up to 100 matching movies", body = Vec<Movie>)
    ),
    tag = "Movies"
)]
pub async fn search_movies_by_name(
    State(state): State<AppState>,
    Query(params): Query<MovieNameQuery>,
) -> ApiResult<Json<Vec<Movie>>> {
    Ok(Json(MovieService::search_movies_by_name(state, &params.name).await?))
}

/// Movies for the Oscars page
#[utoipa::path(
    get,
    path = "/movies/top100",
    responses(
        (status = 200, description = "Movies released from 2015 on", body = Vec<MovieDto>)
    ),
    tag = "Movies"
)]
pub async fn oscars_top100(State(state): State<AppState>) -> ApiResult<Json<Vec<MovieDto>>> {
    Ok(Json(MovieService::oscars_top100(state).await?))
}

/// Movies for the actors page
#[utoipa::path(
    get,
    path = "/movies/actors-home",
    responses(
        (status = 200, description = "Movies released from 2020 on", body = Vec<MovieDto>)
    ),
    tag = "Movies"
)]
pub async fn get_actors_home(State(state): State<AppState>) -> ApiResult<Json<Vec<MovieDto>>> {
    Ok(Json(MovieService::get_actors_home(state).await?))
}

/// Movies for the home page poster feed
#[utoipa::path(
    get,
    path = "/movies/get-home-movies",
    responses(
        (status = 200, description = "The fixed set of home page movies", body = Vec<MovieDto>)
    ),
    tag = "Movies"
)]
pub async fn get_home_movies(State(state): State<AppState>) -> ApiResult<Json<Vec<MovieDto>>> {
    Ok(Json(MovieService::get_home_movies(state).await?))
}

/// Themes of a movie by id
#[utoipa::path(
    get,
    path = "/movies/get-themes-by-id",
    params(
        ("movieId" = i64, Query, description = "Id of the movie")
    ),
    responses(
        (status = 200, description = "Comma-joined theme list", body = String),
        (status = 404, description = "Movie has no themes")
    ),
    tag = "Movies"
)]
pub async fn get_themes_by_movie_id(
    State(state): State<AppState>,
    Query(params): Query<MovieIdQuery>,
) -> ApiResult<String> {
    let themes = MovieService::get_themes_by_movie_id(state, params.movie_id).await?;
    if themes.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(themes)
}

/// Cast and crew of a movie by id
#[utoipa::path(
    get,
    path = "/movies/get-crew-by-id",
    params(
        ("movieId" = i64, Query, description = "Id of the movie")
    ),
    responses(
        (status = 200, description = "Comma-joined `Name (Role)` list", body = String),
        (status = 404, description = "Movie has no crew")
    ),
    tag = "Movies"
)]
pub async fn get_crew_by_movie_id(
    State(state): State<AppState>,
    Query(params): Query<MovieIdQuery>,
) -> ApiResult<String> {
    let crew = MovieService::get_crew_by_movie_id(state, params.movie_id).await?;
    if crew.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(crew)
}

/// Genres of a movie by id
#[utoipa::path(
    get,
    path = "/movies/get-genres-by-id",
    params(
        ("movieId" = i64, Query, description = "Id of the movie")
    ),
    responses(
        (status = 200, description = "Comma-joined genre list", body = String),
        (status = 404, description = "Movie has no genres")
    ),
    tag = "Movies"
)]
pub async fn get_genres_by_movie_id(
    State(state): State<AppState>,
    Query(params): Query<MovieIdQuery>,
) -> ApiResult<String> {
    let genres = MovieService::get_genres_by_movie_id(state, params.movie_id).await?;
    if genres.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(genres)
}

/// Production countries of a movie by id
#[utoipa::path(
    get,
    path = "/movies/get-countries-by-id",
    params(
        ("movieId" = i64, Query, description = "Id of the movie")
    ),
    responses(
        (status = 200, description = "Comma-joined country list", body = String),
        (status = 404, description = "Movie has no countries")
    ),
    tag = "Movies"
)]
pub async fn get_countries_by_movie_id(
    State(state): State<AppState>,
    Query(params): Query<MovieIdQuery>,
) -> ApiResult<String> {
    let countries = MovieService::get_countries_by_movie_id(state, params.movie_id).await?;
    if countries.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(countries)
}

/// Languages of a movie by id
#[utoipa::path(
    get,
    path = "/movies/get-languages-by-id",
    params(
        ("movieId" = i64, Query, description = "Id of the movie")
    ),
    responses(
        (status = 200, description = "Comma-joined language list", body = String),
        (status = 404, description = "Movie has no languages")
    ),
    tag = "Movies"
)]
pub async fn get_languages_by_movie_id(
    State(state): State<AppState>,
    Query(params): Query<MovieIdQuery>,
) -> ApiResult<String> {
    let languages = MovieService::get_languages_by_movie_id(state, params.movie_id).await?;
    if languages.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(languages)
}

/// Production studios of a movie by id
#[utoipa::path(
    get,
    path = "/movies/get-studios-by-id",
    params(
        ("movieId" = i64, Query, description = "Id of the movie")
    ),
    responses(
        (status = 200, description = "Comma-joined studio list", body = String),
        (status = 404, description = "Movie has no studios")
    ),
    tag = "Movies"
)]
pub async fn get_studios_by_movie_id(
    State(state): State<AppState>,
    Query(params): Query<MovieIdQuery>,
) -> ApiResult<String> {
    let studios = MovieService::get_studios_by_movie_id(state, params.movie_id).await?;
    if studios.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(studios)
}
