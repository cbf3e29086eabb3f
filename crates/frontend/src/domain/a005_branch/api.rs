use crate::shared::api_utils::{delete, get_json, post_json_unit};
use contracts::domain::a005_branch::aggregate::{Branch, BranchDto};

pub async fn fetch_branches() -> Result<Vec<Branch>, String> {
    get_json("/api/branch").await
}

pub async fn save_branch(dto: &BranchDto) -> Result<(), String> {
    post_json_unit("/api/branch", dto).await
}

pub async fn delete_branch(id: i32) -> Result<(), String> {
    delete(&format!("/api/branch/{}", id)).await
}
