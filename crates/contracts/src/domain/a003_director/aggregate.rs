use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Режиссёр
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Director {
    #[serde(flatten)]
    pub base: BaseAggregate<i32>,

    #[serde(rename = "birthDate")]
    pub birth_date: Option<NaiveDate>,

    pub nationality: Option<String>,

    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,

    pub bio: Option<String>,
}

impl AggregateRoot for Director {
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
        "a003"
    }

    fn collection_name() -> &'static str {
        "director"
    }

    fn element_name() -> &'static str {
        "Режиссёр"
    }

    fn list_name() -> &'static str {
        "Режиссёры"
    }
}

/// DTO для создания/обновления режиссёра
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DirectorDto {
    pub id: Option<i32>,
    pub name: String,
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    pub nationality: Option<String>,
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
    pub bio: Option<String>,
}

impl DirectorDto {
    pub fn from_aggregate(d: &Director) -> Self {
        Self {
            id: Some(d.base.id),
            name: d.base.name.clone(),
            birth_date: d
                .birth_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            nationality: d.nationality.clone(),
            photo_url: d.photo_url.clone(),
            bio: d.bio.clone(),
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
