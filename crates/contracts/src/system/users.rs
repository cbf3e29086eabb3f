use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "lastLoginAt")]
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserDto {
    pub id: Option<i32>,
    pub username: String,
    /// Пустой пароль при редактировании — не менять
    pub password: String,
    pub email: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

impl UserDto {
    pub fn from_user(u: &User) -> Self {
        Self {
            id: Some(u.id),
            username: u.username.clone(),
            password: String::new(),
            email: u.email.clone(),
            full_name: u.full_name.clone(),
            is_active: u.is_active,
            is_admin: u.is_admin,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Логин не может быть пустым".into());
        }
        if self.id.is_none() && self.password.len() < 8 {
            return Err("Пароль должен быть не короче 8 символов".into());
        }
        Ok(())
    }
}
