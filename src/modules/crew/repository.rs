use sqlx::PgPool;

use super::model::CrewMember;

pub struct CrewRepository;

impl CrewRepository {
    pub async fn find_by_movie_id(
        pool: &PgPool,
        movie_id: i64,
    ) -> Result<Vec<CrewMember>, sqlx::Error> {
        sqlx::query_as::<_, CrewMember>(
            "SELECT id, movie_id, name, role FROM crew WHERE movie_id = $1",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }
}
