use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

/// Новость/акция кинотеатра (имя базового агрегата — заголовок)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(flatten)]
    pub base: BaseAggregate<i32>,

    pub body: String,

    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,

    pub author: Option<String>,

    #[serde(rename = "isPublished")]
    pub is_published: bool,
}

impl AggregateRoot for Post {
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
        "a009"
    }

    fn collection_name() -> &'static str {
        "post"
    }

    fn element_name() -> &'static str {
        "Новость"
    }

    fn list_name() -> &'static str {
        "Новости"
    }
}

/// DTO для создания/обновления новости
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PostDto {
    pub id: Option<i32>,
    pub name: String,
    pub body: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "isPublished")]
    pub is_published: bool,
}

impl PostDto {
    pub fn from_aggregate(p: &Post) -> Self {
        Self {
            id: Some(p.base.id),
            name: p.base.name.clone(),
            body: p.body.clone(),
            image_url: p.image_url.clone(),
            author: p.author.clone(),
            is_published: p.is_published,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Заголовок не может быть пустым".into());
        }
        if self.body.trim().is_empty() {
            return Err("Текст новости не может быть пустым".into());
        }
        Ok(())
    }
}
