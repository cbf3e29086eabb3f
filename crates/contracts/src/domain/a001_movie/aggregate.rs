use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ссылка на жанр (справочник жанров ведёт бэкенд)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRef {
    pub id: i32,
    pub name: String,
}

/// Фильм (карточка проката)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    #[serde(flatten)]
    pub base: BaseAggregate<i32>,

    /// Дата начала проката
    #[serde(rename = "releaseDate")]
    pub release_date: NaiveDate,

    /// Год производства
    pub year: i32,

    /// Длительность в минутах
    #[serde(rename = "durationMin")]
    pub duration_min: i32,

    pub genres: Vec<GenreRef>,

    pub country: Option<String>,

    pub description: Option<String>,

    #[serde(rename = "posterUrl")]
    pub poster_url: Option<String>,

    #[serde(rename = "trailerUrl")]
    pub trailer_url: Option<String>,

    /// Возрастной рейтинг ("6+", "16+", ...)
    #[serde(rename = "ageRating")]
    pub age_rating: Option<String>,
}

impl Movie {
    /// Содержит ли фильм жанр с данным id
    pub fn has_genre(&self, genre_id: i32) -> bool {
        self.genres.iter().any(|g| g.id == genre_id)
    }

    /// Жанры одной строкой для таблиц и карточек
    pub fn genres_line(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl AggregateRoot for Movie {
    type Id = i32;

    fn id(&self) -> i32 {
        self.base.id
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "movie"
    }

    fn element_name() -> &'static str {
        "Фильм"
    }

    fn list_name() -> &'static str {
        "Фильмы"
    }
}

/// DTO для создания/обновления фильма
///
/// Дата проката хранится строкой "YYYY-MM-DD" — так её отдаёт
/// `<input type="date">`; парсится в `validate`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MovieDto {
    pub id: Option<i32>,
    pub name: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub year: Option<i32>,
    #[serde(rename = "durationMin")]
    pub duration_min: Option<i32>,
    #[serde(rename = "genreIds")]
    pub genre_ids: Vec<i32>,
    pub country: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "posterUrl")]
    pub poster_url: Option<String>,
    #[serde(rename = "trailerUrl")]
    pub trailer_url: Option<String>,
    #[serde(rename = "ageRating")]
    pub age_rating: Option<String>,
}

impl MovieDto {
    pub fn from_aggregate(m: &Movie) -> Self {
        Self {
            id: Some(m.base.id),
            name: m.base.name.clone(),
            release_date: m.release_date.format("%Y-%m-%d").to_string(),
            year: Some(m.year),
            duration_min: Some(m.duration_min),
            genre_ids: m.genres.iter().map(|g| g.id).collect(),
            country: m.country.clone(),
            description: m.description.clone(),
            poster_url: m.poster_url.clone(),
            trailer_url: m.trailer_url.clone(),
            age_rating: m.age_rating.clone(),
        }
    }

    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название не может быть пустым".into());
        }
        if NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").is_err() {
            return Err("Дата проката указана неверно".into());
        }
        match self.year {
            Some(y) if (1895..=2100).contains(&y) => {}
            _ => return Err("Год производства указан неверно".into()),
        }
        match self.duration_min {
            Some(d) if d > 0 => {}
            _ => return Err("Длительность должна быть больше нуля".into()),
        }
        Ok(())
    }
}
