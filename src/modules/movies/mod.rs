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
        .route("/get-all", get(handler::get_all_movies))
        .route("/get-movie-by-id", get(handler::get_movie_by_id))
        .route("/search-movies", get(handler::search_movies_by_name))
        .route("/top100", get(handler::oscars_top100))
        .route("/actors-home", get(handler::get_actors_home))
        .route("/get-home-movies", get(handler::get_home_movies))
        .route("/get-themes-by-id", get(handler::get_themes_by_movie_id))
        .route("/get-crew-by-id", get(handler::get_crew_by_movie_id))
        .route("/get-genres-by-id", get(handler::get_genres_by_movie_id))
        .route("/get-countries-by-id", get(handler::get_countries_by_movie_id))
        .route("/get-languages-by-id", get(handler::get_languages_by_movie_id))
        .route("/get-studios-by-id", get(handler::get_studios_by_movie_id))
}
