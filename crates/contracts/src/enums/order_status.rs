use serde::{Deserialize, Serialize};

/// Статус заказа (машина состояний оплаты живёт на бэкенде,
/// фронтенд только отображает)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Cancelled,
}

impl OrderStatus {
    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Ожидает оплаты",
            OrderStatus::Paid => "Оплачен",
            OrderStatus::Cancelled => "Отменён",
        }
    }

    /// CSS-модификатор бейджа статуса
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge--warning",
            OrderStatus::Paid => "badge--success",
            OrderStatus::Cancelled => "badge--muted",
        }
    }

    /// Учитывается ли заказ в выручке
    pub fn counts_towards_revenue(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled)
    }
}
