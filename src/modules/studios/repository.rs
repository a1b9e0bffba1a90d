use sqlx::PgPool;

use super::model::Studio;

pub struct StudioRepository;

impl StudioRepository {
    pub async fn find_by_movie_id(
        pool: &PgPool,
        movie_id: i64,
    ) -> Result<Vec<Studio>, sqlx::Error> {
        sqlx::query_as::<_, Studio>(
            "SELECT id, movie_id, studio FROM studios WHERE movie_id = $1",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }
}
