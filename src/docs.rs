use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movies::handler::get_all_movies,
        crate::modules::movies::handler::get_movie_by_id,
        crate::modules::movies::handler::search_movies_by_name,
        crate::modules::movies::handler::oscars_top100,
        crate::modules::movies::handler::get_actors_home,
        crate::modules::movies::handler::get_home_movies,
        crate::modules::movies::handler::get_themes_by_movie_id,
        crate::modules::movies::handler::get_crew_by_movie_id,
        crate::modules::movies::handler::get_genres_by_movie_id,
        crate::modules::movies::handler::get_countries_by_movie_id,
        crate::modules::movies::handler::get_languages_by_movie_id,
        crate::modules::movies::handler::get_studios_by_movie_id,
        crate::modules::actors::handler::get_all_actors,
        crate::modules::actors::handler::get_actor_by_name,
        crate::modules::search::handler::search_actors,
        crate::modules::search::handler::search_movies,
        crate::modules::oscars::handler::get_top100_oscars,
    ),
    components(
        schemas(
            crate::modules::movies::model::Movie,
            crate::modules::movies::dto::MovieDto,
            crate::modules::actors::model::Actor,
            crate::modules::oscars::model::OscarAward,
            crate::modules::search::dto::SearchActorsResponse,
            crate::modules::search::dto::SearchMoviesResponse,
        )
    ),
    tags(
        (name = "Movies", description = "Browse the movie catalog and its per-movie detail lists"),
        (name = "Actors", description = "Actor lookup"),
        (name = "Search", description = "Free-text search over actors and movies"),
        (name = "Oscar Awards", description = "Oscar award records"),
    )
)]
pub struct ApiDoc;
