use sqlx::PgPool;

use super::model::{Movie, MovieWithPoster};

pub struct MovieRepository;

impl MovieRepository {
    /// First 100 movies by id, poster attached where one exists.
    pub async fn find_all_with_posters(pool: &PgPool) -> Result<Vec<MovieWithPoster>, sqlx::Error> {
        sqlx::query_as::<_, MovieWithPoster>(
            "SELECT m.id, m.name, m.date, m.tagline, m.description, \
                    p.link AS poster_url, m.rating, m.minute \
             FROM movies m LEFT JOIN posters p ON p.movie_id = m.id \
             ORDER BY m.id \
             LIMIT 100",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_movie_by_id(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<MovieWithPoster>, sqlx::Error> {
        sqlx::query_as::<_, MovieWithPoster>(
            "SELECT m.id, m.name, m.date, m.tagline, m.description, \
                    p.link AS poster_url, m.rating, m.minute \
             FROM movies m LEFT JOIN posters p ON p.movie_id = m.id \
             WHERE m.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Case-insensitive substring search on the name. No poster join here:
    /// search results carry the bare movie row. The bound string is spliced
    /// into the LIKE pattern unescaped, so `%` and `_` keep their wildcard
    /// meaning.
    pub async fn find_by_name_containing(
        pool: &PgPool,
        name: &str,
        limit: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "SELECT DISTINCT id, name, date, tagline, description, rating, minute \
             FROM movies \
             WHERE LOWER(name) LIKE LOWER('%' || $1 || '%') \
             LIMIT $2",
        )
        .bind(name)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Feed for the Oscars page: everything released from 2015 on. The
    /// cutoff is a fixed editorial choice, not a parameter.
    pub async fn find_oscar_home_movies(pool: &PgPool) -> Result<Vec<MovieWithPoster>, sqlx::Error> {
        sqlx::query_as::<_, MovieWithPoster>(
            "SELECT DISTINCT m.id, m.name, m.date, m.tagline, m.description, \
                    p.link AS poster_url, m.rating, m.minute \
             FROM movies m LEFT JOIN posters p ON p.movie_id = m.id \
             WHERE m.date >= 2015",
        )
        .fetch_all(pool)
        .await
    }

    /// Feed for the actors page: everything released from 2020 on.
    pub async fn find_actors_home_movies(
        pool: &PgPool,
    ) -> Result<Vec<MovieWithPoster>, sqlx::Error> {
        sqlx::query_as::<_, MovieWithPoster>(
            "SELECT DISTINCT m.id, m.name, m.date, m.tagline, m.description, \
                    p.link AS poster_url, m.rating, m.minute \
             FROM movies m LEFT JOIN posters p ON p.movie_id = m.id \
             WHERE m.date >= 2020",
        )
        .fetch_all(pool)
        .await
    }

    /// Fixed allow-list backing the home poster feed. The five films are
    /// pinned by name and release year, not configurable.
    pub async fn find_home_poster_movies(
        pool: &PgPool,
    ) -> Result<Vec<MovieWithPoster>, sqlx::Error> {
        sqlx::query_as::<_, MovieWithPoster>(
            "SELECT DISTINCT m.id, m.name, m.date, m.tagline, m.description, \
                    p.link AS poster_url, m.rating, m.minute \
             FROM movies m LEFT JOIN posters p ON p.movie_id = m.id \
             WHERE (m.name = 'Interstellar' AND m.date = 2014) \
                OR (m.name = 'Akira' AND m.date = 1988) \
                OR (m.name = 'Perfect Days' AND m.date = 2023) \
                OR (m.name = 'Blade Runner 2049' AND m.date = 2017) \
                OR (m.name = 'Shrek' AND m.date = 2001)",
        )
        .fetch_all(pool)
        .await
    }
}
