use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Раздел по умолчанию — афиша
pub const DEFAULT_ROUTE: &str = "a001_movie";

/// Глобальный контекст приложения: активный маршрут и состояние обвязки.
///
/// Маршрут — строковый ключ ("a001_movie", "d400_sales_summary",
/// "booking/12-345/seats", ...); контент-реестр разбирает его и
/// отдаёт нужную вьюху.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_route: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_route: RwSignal::new(DEFAULT_ROUTE.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, route: &str) {
        self.active_route.set(route.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Синхронизация активного маршрута с query-строкой (?view=...):
    /// восстановление при загрузке и replace_state при переходах,
    /// чтобы экраны можно было открывать по прямой ссылке.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(view) = params.get("view") {
            if !view.is_empty() {
                self.active_route.set(view.clone());
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let route = this.active_route.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("view".to_string(), route)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

/// Достать контекст; паника допустима — отсутствие провайдера
/// это ошибка сборки дерева компонентов
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context")
}
