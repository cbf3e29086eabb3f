use crate::enums::order_status::OrderStatus;
use crate::enums::payment_method::PaymentMethod;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Строка заказа по кинобару
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFoodLine {
    #[serde(rename = "foodId")]
    pub food_id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Заказ билетов (документ, создаётся бэкендом по CreateOrderDto)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,

    /// Клиентский идемпотентный ref: повторная отправка той же
    /// оплаты не создаёт второй заказ
    #[serde(rename = "clientRef")]
    pub client_ref: Uuid,

    #[serde(rename = "userId")]
    pub user_id: i32,

    #[serde(rename = "showtimeId")]
    pub showtime_id: i32,

    // Денормализовано бэкендом для списков и дашборда
    #[serde(rename = "movieId")]
    pub movie_id: i32,
    #[serde(rename = "movieName")]
    pub movie_name: String,
    #[serde(rename = "branchId")]
    pub branch_id: i32,

    /// Метки выбранных мест ("A1", "B4", ...)
    pub seats: Vec<String>,

    #[serde(default)]
    pub foods: Vec<OrderFoodLine>,

    pub total: f64,

    pub status: OrderStatus,

    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Order {
    pub fn tickets_count(&self) -> u32 {
        self.seats.len() as u32
    }

    /// Сумма по кинобару (для чека подтверждения)
    pub fn food_total(&self) -> f64 {
        self.foods
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }
}

/// DTO создания заказа (шаг "Оплата" мастера бронирования)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderDto {
    #[serde(rename = "clientRef")]
    pub client_ref: Uuid,
    #[serde(rename = "showtimeId")]
    pub showtime_id: i32,
    pub seats: Vec<String>,
    pub foods: Vec<CreateOrderFoodDto>,
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderFoodDto {
    #[serde(rename = "foodId")]
    pub food_id: i32,
    pub quantity: u32,
}

impl CreateOrderDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.seats.is_empty() {
            return Err("Не выбрано ни одного места".into());
        }
        if self.foods.iter().any(|f| f.quantity == 0) {
            return Err("Количество по позиции кинобара не может быть нулевым".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn food_total_sums_lines() {
        let order = Order {
            id: 1,
            client_ref: Uuid::nil(),
            user_id: 1,
            showtime_id: 1,
            movie_id: 1,
            movie_name: "Тест".into(),
            branch_id: 1,
            seats: vec!["A1".into(), "A2".into()],
            foods: vec![
                OrderFoodLine {
                    food_id: 1,
                    name: "Попкорн".into(),
                    price: 250.0,
                    quantity: 2,
                },
                OrderFoodLine {
                    food_id: 2,
                    name: "Кола".into(),
                    price: 150.0,
                    quantity: 1,
                },
            ],
            total: 1350.0,
            status: OrderStatus::Paid,
            created_at: Utc::now(),
        };

        assert_eq!(order.tickets_count(), 2);
        assert_eq!(order.food_total(), 650.0);
    }

    #[test]
    fn create_order_requires_seats() {
        let dto = CreateOrderDto {
            client_ref: Uuid::nil(),
            showtime_id: 1,
            seats: vec![],
            foods: vec![],
            payment_method: PaymentMethod::Card,
        };

        assert!(dto.validate().is_err());
    }
}
