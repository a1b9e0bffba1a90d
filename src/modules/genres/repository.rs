use sqlx::PgPool;

use super::model::Genre;

pub struct GenreRepository;

impl GenreRepository {
    pub async fn find_by_movie_id(pool: &PgPool, movie_id: i64) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "SELECT id, movie_id, genre FROM genres WHERE movie_id = $1",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }
}
