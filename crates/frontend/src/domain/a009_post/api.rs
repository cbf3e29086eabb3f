use crate::shared::api_utils::{delete, get_json, post_json_unit};
use contracts::domain::a009_post::aggregate::{Post, PostDto};

pub async fn fetch_posts() -> Result<Vec<Post>, String> {
    get_json("/api/post").await
}

pub async fn save_post(dto: &PostDto) -> Result<(), String> {
    post_json_unit("/api/post", dto).await
}

pub async fn delete_post(id: i32) -> Result<(), String> {
    delete(&format!("/api/post/{}", id)).await
}
