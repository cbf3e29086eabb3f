//! Контекст авторизации: состояние сессии и команды входа/выхода.

use super::{api, storage};
use contracts::system::auth::{LoginRequest, UserInfo};
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());
    provide_context((auth_state, set_auth_state));

    // Восстановление сессии по сохранённому токену; протухший
    // токен молча стирается, пользователь попадает на логин
    if let Some(token) = storage::read_token() {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_me(&token).await {
                Ok(user) => set_auth_state.set(AuthState {
                    access_token: Some(token),
                    user_info: Some(user),
                }),
                Err(e) => {
                    log::debug!("stored token rejected: {}", e);
                    storage::clear_token();
                }
            }
        });
    }

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    use_context::<(ReadSignal<AuthState>, WriteSignal<AuthState>)>()
        .expect("AuthProvider not found in context")
}

pub fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
    on_error: impl Fn(String) + 'static,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let request = LoginRequest { username, password };
        match api::login(&request).await {
            Ok(response) => {
                storage::write_token(&response.access_token);
                set_auth_state.set(AuthState {
                    access_token: Some(response.access_token),
                    user_info: Some(response.user),
                });
            }
            Err(e) => on_error(e),
        }
    });
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
