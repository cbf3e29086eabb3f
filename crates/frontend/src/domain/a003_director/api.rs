use crate::shared::api_utils::{delete, get_json, post_json_unit};
use contracts::domain::a003_director::aggregate::{Director, DirectorDto};

pub async fn fetch_directors() -> Result<Vec<Director>, String> {
    get_json("/api/director").await
}

pub async fn save_director(dto: &DirectorDto) -> Result<(), String> {
    post_json_unit("/api/director", dto).await
}

pub async fn delete_director(id: i32) -> Result<(), String> {
    delete(&format!("/api/director/{}", id)).await
}
