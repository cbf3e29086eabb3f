use serde::{Deserialize, Serialize};

/// Метаданные жизненного цикла записи справочника.
///
/// REST-бэкенд кинотеатра отдаёт timestamps в camelCase и может
/// опускать их для старых записей, поэтому все поля с default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    /// Дата создания записи
    #[serde(default = "chrono::Utc::now")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Дата последнего обновления
    #[serde(default = "chrono::Utc::now")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Мягкое удаление: запись скрыта из афиши, но остаётся в заказах
    #[serde(default)]
    pub is_deleted: bool,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }

    /// Обновить timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
