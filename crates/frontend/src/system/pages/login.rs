use crate::shared::icons::icon;
use crate::system::auth::context::{do_login, use_auth};
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move || {
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            set_error.set(Some("Укажите логин и пароль".to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        do_login(set_auth_state, user, pass, move |e| {
            set_error.set(Some(e));
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form
                class="login-card"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <div class="login-card__brand">{icon("film")} "КиноСеть"</div>

                <label class="form-field">
                    <span class="form-field__label">"Логин"</span>
                    <input
                        type="text"
                        class="form-field__input"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-field">
                    <span class="form-field__label">"Пароль"</span>
                    <input
                        type="password"
                        class="form-field__input"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|e| view! {
                    <div class="login-card__error">{e}</div>
                })}

                <button
                    type="submit"
                    class="button button--primary login-card__submit"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Вход..." } else { "Войти" }}
                </button>
            </form>
        </div>
    }
}
