use sqlx::PgPool;

use super::model::Country;

pub struct CountryRepository;

impl CountryRepository {
    pub async fn find_by_movie_id(
        pool: &PgPool,
        movie_id: i64,
    ) -> Result<Vec<Country>, sqlx::Error> {
        sqlx::query_as::<_, Country>(
            "SELECT id, movie_id, country FROM countries WHERE movie_id = $1",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }
}
