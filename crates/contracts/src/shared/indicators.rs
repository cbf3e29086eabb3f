use serde::{Deserialize, Serialize};

/// Формат значения для карточек показателей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// Денежная сумма с символом валюты
    Money { currency: String },
    /// Целое с разделением тысяч
    Integer,
    /// Число с фиксированным числом знаков
    Number { decimals: u8 },
}

impl ValueFormat {
    pub fn rub() -> Self {
        ValueFormat::Money {
            currency: "₽".to_string(),
        }
    }
}
