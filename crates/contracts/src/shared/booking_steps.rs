//! Модель шагов мастера бронирования.
//!
//! Пять шагов с линейным прогрессом; по текущему индексу для каждого
//! шага выводится состояние ссылки в степпере. Блокировка перехода
//! вперёд — чисто презентационная: реальную проверку шагов делает
//! бэкенд при создании заказа.

use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

/// Ссылка бронирования: фильм + сеанс, кодируется в маршруте
/// как "{movie_id}-{showtime_id}"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRef {
    pub movie_id: i32,
    pub showtime_id: i32,
}

impl BookingRef {
    pub fn new(movie_id: i32, showtime_id: i32) -> Self {
        Self {
            movie_id,
            showtime_id,
        }
    }

    /// Параметр маршрута: "12-345"
    pub fn to_param(&self) -> String {
        format!("{}-{}", self.movie_id.as_string(), self.showtime_id.as_string())
    }

    /// Разобрать параметр маршрута (split по разделителю '-')
    pub fn parse(param: &str) -> Option<Self> {
        let (movie, showtime) = param.split_once('-')?;
        Some(Self {
            movie_id: i32::from_string(movie).ok()?,
            showtime_id: i32::from_string(showtime).ok()?,
        })
    }
}

/// Описание шага мастера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingStep {
    pub label: &'static str,
    /// Сегмент маршрута внутри "booking/{ref}/…"
    pub segment: &'static str,
}

/// Шаги в порядке прохождения; терминальный — подтверждение
pub const BOOKING_STEPS: [BookingStep; 5] = [
    BookingStep {
        label: "Сеанс",
        segment: "showtime",
    },
    BookingStep {
        label: "Места",
        segment: "seats",
    },
    BookingStep {
        label: "Кинобар",
        segment: "food",
    },
    BookingStep {
        label: "Оплата",
        segment: "payment",
    },
    BookingStep {
        label: "Подтверждение",
        segment: "confirm",
    },
];

/// Маршрут шага для данной брони
pub fn step_route(step_index: usize, booking: &BookingRef) -> String {
    let segment = BOOKING_STEPS
        .get(step_index)
        .map(|s| s.segment)
        .unwrap_or("showtime");
    format!("booking/{}/{}", booking.to_param(), segment)
}

/// Индекс шага по сегменту маршрута
pub fn step_index_by_segment(segment: &str) -> Option<usize> {
    BOOKING_STEPS.iter().position(|s| s.segment == segment)
}

/// Производное состояние шага в степпере
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepState {
    pub is_active: bool,
    pub is_completed: bool,
    /// Кликабельны текущий и пройденные шаги; вперёд — только "Далее"
    pub is_clickable: bool,
}

pub fn step_state(step_index: usize, current_step: usize) -> StepState {
    StepState {
        is_active: step_index == current_step,
        is_completed: step_index < current_step,
        is_clickable: step_index <= current_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_ref_round_trip() {
        let booking = BookingRef::new(12, 345);
        assert_eq!(booking.to_param(), "12-345");
        assert_eq!(BookingRef::parse("12-345"), Some(booking));
    }

    #[test]
    fn booking_ref_rejects_malformed_param() {
        assert_eq!(BookingRef::parse(""), None);
        assert_eq!(BookingRef::parse("12"), None);
        assert_eq!(BookingRef::parse("12-abc"), None);
    }

    #[test]
    fn step_states_at_current_two() {
        // Шаги 0 и 1 пройдены, 2 активен, 3 и 4 заблокированы
        for i in 0..2 {
            let s = step_state(i, 2);
            assert!(s.is_completed && s.is_clickable && !s.is_active);
        }

        let active = step_state(2, 2);
        assert!(active.is_active && active.is_clickable && !active.is_completed);

        for i in 3..5 {
            let s = step_state(i, 2);
            assert!(!s.is_clickable && !s.is_active && !s.is_completed);
        }
    }

    #[test]
    fn step_routes_embed_booking_ref() {
        let booking = BookingRef::new(7, 42);
        assert_eq!(step_route(0, &booking), "booking/7-42/showtime");
        assert_eq!(step_route(4, &booking), "booking/7-42/confirm");
    }

    #[test]
    fn step_index_maps_segments() {
        assert_eq!(step_index_by_segment("seats"), Some(1));
        assert_eq!(step_index_by_segment("confirm"), Some(4));
        assert_eq!(step_index_by_segment("nope"), None);
    }
}
