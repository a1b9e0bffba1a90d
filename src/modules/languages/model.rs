use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Language {
    #[allow(dead_code)]
    pub id: i64,
    #[allow(dead_code)]
    pub movie_id: i64,
    pub language: String,
}
