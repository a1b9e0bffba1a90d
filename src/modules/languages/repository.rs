use sqlx::PgPool;

use super::model::Language;

pub struct LanguageRepository;

impl LanguageRepository {
    pub async fn find_by_movie_id(
        pool: &PgPool,
        movie_id: i64,
    ) -> Result<Vec<Language>, sqlx::Error> {
        sqlx::query_as::<_, Language>(
            "SELECT id, movie_id, language FROM languages WHERE movie_id = $1",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }
}
