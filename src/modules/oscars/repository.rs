use sqlx::PgPool;

use super::model::OscarAward;

pub struct OscarAwardRepository;

impl OscarAwardRepository {
    /// Winners from ceremonies after the 90th. The filter alone defines the
    /// result set; there is no row cap.
    pub async fn find_recent_winners(pool: &PgPool) -> Result<Vec<OscarAward>, sqlx::Error> {
        sqlx::query_as::<_, OscarAward>(
            "SELECT id, year_film, year_ceremony, ceremony, category, name, film, winner \
             FROM the_oscar_awards \
             WHERE ceremony > 90 AND winner = TRUE",
        )
        .fetch_all(pool)
        .await
    }
}
