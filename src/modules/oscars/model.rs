use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct OscarAward {
    pub id: i64,
    pub year_film: Option<i32>,
    pub year_ceremony: Option<i32>,
    pub ceremony: i32,
    pub category: Option<String>,
    pub name: Option<String>,
    pub film: Option<String>,
    pub winner: bool,
}
