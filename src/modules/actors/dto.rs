use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ActorNameQuery {
    pub name: String,
}
