use crate::shared::api_utils::{delete, get_json, post_json_unit};
use contracts::domain::a006_showtime::aggregate::{Showtime, ShowtimeDto};

pub async fn fetch_showtimes() -> Result<Vec<Showtime>, String> {
    get_json("/api/showtime").await
}

/// Сеансы одного фильма (шаг "Сеанс" мастера бронирования)
pub async fn fetch_showtimes_by_movie(movie_id: i32) -> Result<Vec<Showtime>, String> {
    get_json(&format!("/api/showtime?movieId={}", movie_id)).await
}

/// Занятые места сеанса (метки из оплаченных и ожидающих заказов)
pub async fn fetch_taken_seats(showtime_id: i32) -> Result<Vec<String>, String> {
    get_json(&format!("/api/showtime/{}/taken-seats", showtime_id)).await
}

pub async fn save_showtime(dto: &ShowtimeDto) -> Result<(), String> {
    post_json_unit("/api/showtime", dto).await
}

pub async fn delete_showtime(id: i32) -> Result<(), String> {
    delete(&format!("/api/showtime/{}", id)).await
}
