use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

/// Продюсер / кинокомпания
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producer {
    #[serde(flatten)]
    pub base: BaseAggregate<i32>,

    /// Студия, с которой связан продюсер
    pub studio: Option<String>,

    pub nationality: Option<String>,

    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,

    pub bio: Option<String>,
}

impl AggregateRoot for Producer {
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
        "a004"
    }

    fn collection_name() -> &'static str {
        "producer"
    }

    fn element_name() -> &'static str {
        "Продюсер"
    }

    fn list_name() -> &'static str {
        "Продюсеры"
    }
}

/// DTO для создания/обновления продюсера
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProducerDto {
    pub id: Option<i32>,
    pub name: String,
    pub studio: Option<String>,
    pub nationality: Option<String>,
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
    pub bio: Option<String>,
}

impl ProducerDto {
    pub fn from_aggregate(p: &Producer) -> Self {
        Self {
            id: Some(p.base.id),
            name: p.base.name.clone(),
            studio: p.studio.clone(),
            nationality: p.nationality.clone(),
            photo_url: p.photo_url.clone(),
            bio: p.bio.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Имя не может быть пустым".into());
        }
        Ok(())
    }
}
