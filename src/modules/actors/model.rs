use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Actor row as stored. Names are not unique in the dataset, so lookups
/// by name can yield several rows.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct Actor {
    pub id: i64,
    pub name: String,
}
