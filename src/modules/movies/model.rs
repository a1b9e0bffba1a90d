use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Movie row as stored. `search-movies` serializes this shape directly;
/// every other movie endpoint goes through [`super::dto::MovieDto`].
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    /// Release year.
    pub date: Option<i32>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub minute: Option<i32>,
}

/// Movie columns plus the poster link pulled in by the LEFT JOIN on
/// `posters`. Internal row shape only, never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct MovieWithPoster {
    pub id: i64,
    pub name: String,
    pub date: Option<i32>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub rating: Option<f64>,
    pub minute: Option<i32>,
}
