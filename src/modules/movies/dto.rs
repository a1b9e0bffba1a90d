use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::model::MovieWithPoster;

/// Flat read-only projection of a movie plus its poster link, built fresh
/// for every response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieDto {
    pub id: i64,
    pub name: String,
    pub date: Option<i32>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub rating: Option<f64>,
    pub minute: Option<i32>,
}

impl From<MovieWithPoster> for MovieDto {
    fn from(m: MovieWithPoster) -> Self {
        Self {
            id: m.id,
            name: m.name,
            date: m.date,
            tagline: m.tagline,
            description: m.description,
            poster_url: m.poster_url,
            rating: m.rating,
            minute: m.minute,
        }
    }
}

/// The by-id endpoints take the id as a query parameter named `movieId`.
#[derive(Debug, Deserialize)]
pub struct MovieIdQuery {
    #[serde(rename = "movieId")]
    pub movie_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct MovieNameQuery {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_copies_every_row_field() {
        let row = MovieWithPoster {
            id: 42,
            name: "Blade Runner 2049".to_string(),
            date: Some(2017),
            tagline: Some("The key to the future is finally unearthed.".to_string()),
            description: None,
            poster_url: Some("https://posters.example/br2049.jpg".to_string()),
            rating: Some(4.1),
            minute: Some(164),
        };

        let dto = MovieDto::from(row);
        assert_eq!(dto.id, 42);
        assert_eq!(dto.name, "Blade Runner 2049");
        assert_eq!(dto.date, Some(2017));
        assert_eq!(dto.poster_url.as_deref(), Some("https://posters.example/br2049.jpg"));
        assert_eq!(dto.rating, Some(4.1));
        assert_eq!(dto.minute, Some(164));
    }

    #[test]
    fn movie_id_binds_from_the_camel_case_wire_name() {
        let uri: axum::http::Uri = "http://localhost/movies/get-movie-by-id?movieId=7"
            .parse()
            .unwrap();
        let query = axum::extract::Query::<MovieIdQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.movie_id, 7);
    }

    #[test]
    fn non_numeric_movie_id_is_rejected() {
        let uri: axum::http::Uri = "http://localhost/movies/get-movie-by-id?movieId=abc"
            .parse()
            .unwrap();
        assert!(axum::extract::Query::<MovieIdQuery>::try_from_uri(&uri).is_err());
    }
}
