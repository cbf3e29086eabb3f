use crate::shared::api_utils::{delete, get_json, post_json_unit};
use contracts::domain::a002_actor::aggregate::{Actor, ActorDto};

pub async fn fetch_actors() -> Result<Vec<Actor>, String> {
    get_json("/api/actor").await
}

pub async fn save_actor(dto: &ActorDto) -> Result<(), String> {
    post_json_unit("/api/actor", dto).await
}

pub async fn delete_actor(id: i32) -> Result<(), String> {
    delete(&format!("/api/actor/{}", id)).await
}
