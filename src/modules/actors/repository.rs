use sqlx::PgPool;

use super::model::Actor;

pub struct ActorRepository;

impl ActorRepository {
    /// Case-insensitive substring search. The bound string is spliced into
    /// the LIKE pattern unescaped, so `%` and `_` keep their wildcard
    /// meaning.
    pub async fn find_by_name_containing(
        pool: &PgPool,
        name: &str,
        limit: i64,
    ) -> Result<Vec<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "SELECT DISTINCT id, name FROM actors \
             WHERE LOWER(name) LIKE LOWER('%' || $1 || '%') \
             LIMIT $2",
        )
        .bind(name)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Fixed allow-list shown on the home page. Not configurable.
    pub async fn find_actors_for_home(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "SELECT DISTINCT id, name FROM actors \
             WHERE (name = 'Ryan Gosling' OR name = 'Zendaya' OR name = 'Tom Holland')",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Vec<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>("SELECT id, name FROM actors WHERE name = $1")
            .bind(name)
            .fetch_all(pool)
            .await
    }
}
