use crate::shared::api_utils::{delete, get_json, post_json_unit};
use contracts::system::users::{User, UserDto};

pub async fn fetch_users() -> Result<Vec<User>, String> {
    get_json("/api/user").await
}

pub async fn save_user(dto: &UserDto) -> Result<(), String> {
    post_json_unit("/api/user", dto).await
}

pub async fn delete_user(id: i32) -> Result<(), String> {
    delete(&format!("/api/user/{}", id)).await
}
