use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Актёр (справочник съёмочной группы)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    #[serde(flatten)]
    pub base: BaseAggregate<i32>,

    #[serde(rename = "birthDate")]
    pub birth_date: Option<NaiveDate>,

    pub nationality: Option<String>,

    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,

    pub bio: Option<String>,
}

impl AggregateRoot for Actor {
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
        "a002"
    }

    fn collection_name() -> &'static str {
        "actor"
    }

    fn element_name() -> &'static str {
        "Актёр"
    }

    fn list_name() -> &'static str {
        "Актёры"
    }
}

/// DTO для создания/обновления актёра
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ActorDto {
    pub id: Option<i32>,
    pub name: String,
    /// "YYYY-MM-DD" из `<input type="date">`, пустая строка — не указана
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    pub nationality: Option<String>,
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
    pub bio: Option<String>,
}

impl ActorDto {
    pub fn from_aggregate(a: &Actor) -> Self {
        Self {
            id: Some(a.base.id),
            name: a.base.name.clone(),
            birth_date: a
                .birth_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            nationality: a.nationality.clone(),
            photo_url: a.photo_url.clone(),
            bio: a.bio.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Имя не может быть пустым".into());
        }
        if !self.birth_date.is_empty()
            && NaiveDate::parse_from_str(&self.birth_date, "%Y-%m-%d").is_err()
        {
            return Err("Дата рождения указана неверно".into());
        }
        Ok(())
    }
}
