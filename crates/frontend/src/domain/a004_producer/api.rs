use crate::shared::api_utils::{delete, get_json, post_json_unit};
use contracts::domain::a004_producer::aggregate::{Producer, ProducerDto};

pub async fn fetch_producers() -> Result<Vec<Producer>, String> {
    get_json("/api/producer").await
}

pub async fn save_producer(dto: &ProducerDto) -> Result<(), String> {
    post_json_unit("/api/producer", dto).await
}

pub async fn delete_producer(id: i32) -> Result<(), String> {
    delete(&format!("/api/producer/{}", id)).await
}
