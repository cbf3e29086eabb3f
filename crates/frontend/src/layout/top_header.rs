use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, set_auth_state) = use_auth();

    let user_label = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    class="top-header__toggle"
                    title="Скрыть/показать меню"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
                <span class="top-header__brand">{icon("film")} "КиноСеть"</span>
            </div>

            <div class="top-header__right">
                <span class="top-header__user">{user_label}</span>
                <button
                    class="top-header__logout"
                    title="Выйти"
                    on:click=move |_| do_logout(set_auth_state)
                >
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
