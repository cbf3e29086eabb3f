use crate::shared::api_utils::{get_json, post_json, post_json_unit};
use contracts::domain::a008_order::aggregate::{CreateOrderDto, Order};

pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    get_json("/api/order").await
}

/// Создание заказа; бэкенд дедуплицирует по clientRef
pub async fn create_order(dto: &CreateOrderDto) -> Result<Order, String> {
    post_json("/api/order", dto).await
}

pub async fn cancel_order(id: i32) -> Result<(), String> {
    post_json_unit(&format!("/api/order/{}/cancel", id), &()).await
}
