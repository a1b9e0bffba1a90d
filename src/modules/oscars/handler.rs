use super::model::OscarAward;
use super::service::OscarAwardService;
use crate::common::error::ApiResult;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

/// Oscar winners from ceremonies after the 90th
///
/// The route name is historical: the result is not capped at 100 rows.
#[utoipa::path(
    get,
    path = "/oscar/top100",
    responses(
        (status = 200, description = "Winning awards from ceremonies after the 90th", body = Vec<OscarAward>)
    ),
    tag = "Oscar Awards"
)]
pub async fn get_top100_oscars(State(state): State<AppState>) -> ApiResult<Json<Vec<OscarAward>>> {
    Ok(Json(OscarAwardService::get_top100(state).await?))
}
