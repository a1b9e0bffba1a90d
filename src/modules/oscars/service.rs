use super::model::OscarAward;
use super::repository::OscarAwardRepository;
use crate::common::error::ApiResult;
use crate::state::AppState;

pub struct OscarAwardService;

impl OscarAwardService {
    pub async fn get_top100(state: AppState) -> ApiResult<Vec<OscarAward>> {
        Ok(OscarAwardRepository::find_recent_winners(&state.db).await?)
    }
}
