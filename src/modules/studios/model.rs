use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Studio {
    #[allow(dead_code)]
    pub id: i64,
    #[allow(dead_code)]
    pub movie_id: i64,
    pub studio: String,
}
