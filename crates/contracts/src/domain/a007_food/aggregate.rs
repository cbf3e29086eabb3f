use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

/// Позиция кинобара (попкорн, напитки, комбо)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(flatten)]
    pub base: BaseAggregate<i32>,

    pub price: f64,

    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,

    #[serde(rename = "isAvailable")]
    pub is_available: bool,
}

impl AggregateRoot for FoodItem {
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
        "a007"
    }

    fn collection_name() -> &'static str {
        "food"
    }

    fn element_name() -> &'static str {
        "Позиция кинобара"
    }

    fn list_name() -> &'static str {
        "Кинобар"
    }
}

/// DTO для создания/обновления позиции кинобара
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FoodDto {
    pub id: Option<i32>,
    pub name: String,
    pub price: Option<f64>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "isAvailable")]
    pub is_available: bool,
}

impl FoodDto {
    pub fn from_aggregate(f: &FoodItem) -> Self {
        Self {
            id: Some(f.base.id),
            name: f.base.name.clone(),
            price: Some(f.price),
            image_url: f.image_url.clone(),
            is_available: f.is_available,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название не может быть пустым".into());
        }
        match self.price {
            Some(p) if p >= 0.0 => {}
            _ => return Err("Цена указана неверно".into()),
        }
        Ok(())
    }
}
