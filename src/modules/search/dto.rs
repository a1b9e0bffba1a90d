use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::actors::model::Actor;
use crate::modules::movies::model::Movie;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
}

/// Body of `/search-actors`: the matches plus the query echoed back.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchActorsResponse {
    pub actors: Vec<Actor>,
    pub query: String,
}

/// Body of `/search-movies`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchMoviesResponse {
    pub movies: Vec<Movie>,
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actors_response_keeps_the_wire_keys() {
        let response = SearchActorsResponse {
            actors: vec![Actor { id: 3, name: "Zendaya".to_string() }],
            query: "zen".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["query"], "zen");
        assert_eq!(json["actors"][0]["id"], 3);
        assert_eq!(json["actors"][0]["name"], "Zendaya");
    }

    #[test]
    fn movies_response_keeps_the_wire_keys() {
        let response = SearchMoviesResponse {
            movies: vec![],
            query: "blade".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["query"], "blade");
        assert!(json["movies"].as_array().unwrap().is_empty());
    }
}
