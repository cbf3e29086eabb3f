//! Состояние мастера бронирования: выбор живёт в контексте и
//! переживает переходы между шагами.

use contracts::domain::a008_order::aggregate::Order;
use contracts::enums::payment_method::PaymentMethod;
use leptos::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct BookingContext {
    /// Сеанс, для которого сделан текущий выбор; смена сеанса
    /// сбрасывает места и кинобар
    pub showtime_id: RwSignal<Option<i32>>,
    pub seats: RwSignal<Vec<String>>,
    /// Количество по позициям кинобара (food_id -> qty)
    pub foods: RwSignal<HashMap<i32, u32>>,
    pub payment_method: RwSignal<PaymentMethod>,
    /// Идемпотентный ref текущей корзины
    pub client_ref: RwSignal<Uuid>,
    /// Заказ, созданный на шаге оплаты (для подтверждения)
    pub last_order: RwSignal<Option<Order>>,
}

impl BookingContext {
    pub fn new() -> Self {
        Self {
            showtime_id: RwSignal::new(None),
            seats: RwSignal::new(Vec::new()),
            foods: RwSignal::new(HashMap::new()),
            payment_method: RwSignal::new(PaymentMethod::Card),
            client_ref: RwSignal::new(Uuid::new_v4()),
            last_order: RwSignal::new(None),
        }
    }

    /// Привязать выбор к сеансу; другой сеанс — чистая корзина
    pub fn bind_showtime(&self, showtime_id: i32) {
        if self.showtime_id.get_untracked() != Some(showtime_id) {
            self.showtime_id.set(Some(showtime_id));
            self.seats.set(Vec::new());
            self.foods.set(HashMap::new());
            self.client_ref.set(Uuid::new_v4());
        }
    }

    pub fn toggle_seat(&self, label: &str) {
        self.seats.update(|seats| {
            if let Some(pos) = seats.iter().position(|s| s == label) {
                seats.remove(pos);
            } else {
                seats.push(label.to_string());
            }
        });
    }

    pub fn set_food_quantity(&self, food_id: i32, quantity: u32) {
        self.foods.update(|foods| {
            if quantity == 0 {
                foods.remove(&food_id);
            } else {
                foods.insert(food_id, quantity);
            }
        });
    }

    /// Сброс после успешного заказа: новая корзина, новый client_ref
    pub fn reset(&self) {
        self.showtime_id.set(None);
        self.seats.set(Vec::new());
        self.foods.set(HashMap::new());
        self.payment_method.set(PaymentMethod::Card);
        self.client_ref.set(Uuid::new_v4());
    }
}

pub fn use_booking() -> BookingContext {
    use_context::<BookingContext>().expect("BookingContext not found in context")
}
