use crate::shared::api_utils::{delete, get_json, post_json_unit};
use contracts::domain::a001_movie::aggregate::{GenreRef, Movie, MovieDto};

pub async fn fetch_movies() -> Result<Vec<Movie>, String> {
    get_json("/api/movie").await
}

pub async fn fetch_movie(id: i32) -> Result<Movie, String> {
    get_json(&format!("/api/movie/{}", id)).await
}

/// Справочник жанров ведёт бэкенд; фронтенду нужен для
/// фильтра каталога и формы фильма
pub async fn fetch_genres() -> Result<Vec<GenreRef>, String> {
    get_json("/api/genre").await
}

pub async fn save_movie(dto: &MovieDto) -> Result<(), String> {
    post_json_unit("/api/movie", dto).await
}

pub async fn delete_movie(id: i32) -> Result<(), String> {
    delete(&format!("/api/movie/{}", id)).await
}
