use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Сеанс — показ фильма в конкретном зале
///
/// Инвариант `end_time > start_time` обеспечивает бэкенд; фронтенд
/// только проверяет пересечения расписания перед сохранением.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showtime {
    pub id: i32,

    #[serde(rename = "movieId")]
    pub movie_id: i32,

    #[serde(rename = "branchId")]
    pub branch_id: i32,

    #[serde(rename = "roomId")]
    pub room_id: i32,

    #[serde(rename = "startTime")]
    pub start_time: NaiveDateTime,

    #[serde(rename = "endTime")]
    pub end_time: NaiveDateTime,

    /// Цена билета
    pub price: f64,
}

/// DTO для создания/обновления сеанса
///
/// Время — строки формата пикера "YYYY-MM-DDTHH:MM"
/// (см. `schedule::PICKER_FMT`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShowtimeDto {
    pub id: Option<i32>,
    #[serde(rename = "movieId")]
    pub movie_id: Option<i32>,
    #[serde(rename = "branchId")]
    pub branch_id: Option<i32>,
    #[serde(rename = "roomId")]
    pub room_id: Option<i32>,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    pub price: Option<f64>,
}

impl ShowtimeDto {
    pub fn from_aggregate(s: &Showtime) -> Self {
        Self {
            id: Some(s.id),
            movie_id: Some(s.movie_id),
            branch_id: Some(s.branch_id),
            room_id: Some(s.room_id),
            start_time: s.start_time.format(super::schedule::PICKER_FMT).to_string(),
            end_time: s.end_time.format(super::schedule::PICKER_FMT).to_string(),
            price: Some(s.price),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.movie_id.is_none() {
            return Err("Выберите фильм".into());
        }
        if self.branch_id.is_none() {
            return Err("Выберите кинотеатр".into());
        }
        if self.room_id.is_none() {
            return Err("Выберите зал".into());
        }
        if super::schedule::parse_picker_value(&self.start_time).is_none() {
            return Err("Время начала указано неверно".into());
        }
        if super::schedule::parse_picker_value(&self.end_time).is_none() {
            return Err("Время окончания указано неверно".into());
        }
        match self.price {
            Some(p) if p >= 0.0 => {}
            _ => return Err("Цена билета указана неверно".into()),
        }
        Ok(())
    }
}
