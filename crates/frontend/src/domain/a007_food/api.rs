use crate::shared::api_utils::{delete, get_json, post_json_unit};
use contracts::domain::a007_food::aggregate::{FoodDto, FoodItem};

pub async fn fetch_foods() -> Result<Vec<FoodItem>, String> {
    get_json("/api/food").await
}

pub async fn save_food(dto: &FoodDto) -> Result<(), String> {
    post_json_unit("/api/food", dto).await
}

pub async fn delete_food(id: i32) -> Result<(), String> {
    delete(&format!("/api/food/{}", id)).await
}
