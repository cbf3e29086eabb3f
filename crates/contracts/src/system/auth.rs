use serde::{Deserialize, Serialize};

/// Данные текущего пользователя (ответ /api/auth/me)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i32,
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Состояние авторизации во фронтенде сравнивается по значению,
    // поэтому UserInfo обязан поддерживать сравнение
    #[test]
    fn user_info_compares_by_value() {
        let admin = UserInfo {
            id: 1,
            username: "admin".to_string(),
            full_name: None,
            is_admin: true,
        };
        assert_eq!(admin, admin.clone());

        let other = UserInfo {
            id: 2,
            ..admin.clone()
        };
        assert_ne!(admin, other);
    }
}
