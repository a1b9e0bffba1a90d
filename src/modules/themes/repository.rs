use sqlx::PgPool;

use super::model::Theme;

pub struct ThemeRepository;

impl ThemeRepository {
    pub async fn find_by_movie_id(pool: &PgPool, movie_id: i64) -> Result<Vec<Theme>, sqlx::Error> {
        sqlx::query_as::<_, Theme>(
            "SELECT id, movie_id, theme FROM themes WHERE movie_id = $1",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }
}
