use super::dto::MovieDto;
use super::model::Movie;
use super::repository::MovieRepository;
use crate::common::error::ApiResult;
use crate::modules::countries::repository::CountryRepository;
use crate::modules::crew::repository::CrewRepository;
use crate::modules::genres::repository::GenreRepository;
use crate::modules::languages::repository::LanguageRepository;
use crate::modules::studios::repository::StudioRepository;
use crate::modules::themes::repository::ThemeRepository;
use crate::state::AppState;

/// Every free-text search is capped at 100 rows, whatever the entity.
const MAX_SEARCH_RESULTS: i64 = 100;

/// Separator used by all six attribute aggregates.
fn join_values(values: impl IntoIterator<Item = String>) -> String {
    values.into_iter().collect::<Vec<_>>().join(", ")
}

pub struct MovieService;

impl MovieService {
    pub async fn get_all_movies_with_posters(state: AppState) -> ApiResult<Vec<MovieDto>> {
        let movies = MovieRepository::find_all_with_posters(&state.db).await?;
        Ok(movies.into_iter().map(MovieDto::from).collect())
    }

    pub async fn get_movie_by_id(state: AppState, id: i64) -> ApiResult<Option<MovieDto>> {
        let movie = MovieRepository::find_movie_by_id(&state.db, id).await?;
        Ok(movie.map(MovieDto::from))
    }

    pub async fn search_movies_by_name(state: AppState, name: &str) -> ApiResult<Vec<Movie>> {
        Ok(MovieRepository::find_by_name_containing(&state.db, name, MAX_SEARCH_RESULTS).await?)
    }

    pub async fn oscars_top100(state: AppState) -> ApiResult<Vec<MovieDto>> {
        let movies = MovieRepository::find_oscar_home_movies(&state.db).await?;
        Ok(movies.into_iter().map(MovieDto::from).collect())
    }

    pub async fn get_actors_home(state: AppState) -> ApiResult<Vec<MovieDto>> {
        let movies = MovieRepository::find_actors_home_movies(&state.db).await?;
        Ok(movies.into_iter().map(MovieDto::from).collect())
    }

    pub async fn get_home_movies(state: AppState) -> ApiResult<Vec<MovieDto>> {
        let movies = MovieRepository::find_home_poster_movies(&state.db).await?;
        Ok(movies.into_iter().map(MovieDto::from).collect())
    }

    // The six aggregates below return an empty string when the movie has no
    // rows in the group; the handler turns that into a 404.

    pub async fn get_themes_by_movie_id(state: AppState, movie_id: i64) -> ApiResult<String> {
        let rows = ThemeRepository::find_by_movie_id(&state.db, movie_id).await?;
        Ok(join_values(rows.into_iter().map(|t| t.theme)))
    }

    pub async fn get_crew_by_movie_id(state: AppState, movie_id: i64) -> ApiResult<String> {
        let rows = CrewRepository::find_by_movie_id(&state.db, movie_id).await?;
        Ok(join_values(rows.into_iter().map(|c| c.billing())))
    }

    pub async fn get_genres_by_movie_id(state: AppState, movie_id: i64) -> ApiResult<String> {
        let rows = GenreRepository::find_by_movie_id(&state.db, movie_id).await?;
        Ok(join_values(rows.into_iter().map(|g| g.genre)))
    }

    pub async fn get_countries_by_movie_id(state: AppState, movie_id: i64) -> ApiResult<String> {
        let rows = CountryRepository::find_by_movie_id(&state.db, movie_id).await?;
        Ok(join_values(rows.into_iter().map(|c| c.country)))
    }

    pub async fn get_languages_by_movie_id(state: AppState, movie_id: i64) -> ApiResult<String> {
        let rows = LanguageRepository::find_by_movie_id(&state.db, movie_id).await?;
        Ok(join_values(rows.into_iter().map(|l| l.language)))
    }

    pub async fn get_studios_by_movie_id(state: AppState, movie_id: i64) -> ApiResult<String> {
        let rows = StudioRepository::find_by_movie_id(&state.db, movie_id).await?;
        Ok(join_values(rows.into_iter().map(|s| s.studio)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_values_uses_comma_space() {
        let joined = join_values(
            ["Drama", "Sci-Fi", "Thriller"].into_iter().map(String::from),
        );
        assert_eq!(joined, "Drama, Sci-Fi, Thriller");
    }

    #[test]
    fn join_values_of_nothing_is_empty() {
        assert_eq!(join_values(Vec::<String>::new()), "");
    }

    #[test]
    fn join_values_of_one_row_has_no_separator() {
        let joined = join_values(std::iter::once("Japan".to_string()));
        assert_eq!(joined, "Japan");
    }
}
