//! Хранение токена сессии в localStorage.
//!
//! Единственное место прямой работы с localStorage — остальной код
//! получает сессию через контекст авторизации.

const TOKEN_KEY: &str = "cinema_access_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn read_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

pub fn write_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
