use super::model::Actor;
use super::repository::ActorRepository;
use crate::common::error::ApiResult;
use crate::state::AppState;

/// Every free-text search is capped at 100 rows, whatever the entity.
const MAX_SEARCH_RESULTS: i64 = 100;

pub struct ActorService;

impl ActorService {
    pub async fn get_all_actors(state: AppState) -> ApiResult<Vec<Actor>> {
        Ok(ActorRepository::find_actors_for_home(&state.db).await?)
    }

    pub async fn search_actors_by_name(state: AppState, query: &str) -> ApiResult<Vec<Actor>> {
        Ok(ActorRepository::find_by_name_containing(&state.db, query, MAX_SEARCH_RESULTS).await?)
    }

    /// Exact-name lookup. Deliberately not unified with the substring
    /// search above: `get-actor-by-name` matches the full name only.
    pub async fn get_actor_by_name(state: AppState, name: &str) -> ApiResult<Vec<Actor>> {
        Ok(ActorRepository::find_by_name(&state.db, name).await?)
    }
}
