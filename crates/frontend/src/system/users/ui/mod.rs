use super::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::system::users::{User, UserDto};
use leptos::prelude::*;

#[component]
pub fn UsersList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<User>::new());
    let (error, set_error) = signal(None::<String>);
    let (editing, set_editing) = signal(None::<UserDto>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_users().await {
                Ok(users) => {
                    set_items.set(users);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let save = move || {
        let Some(dto) = editing.get() else {
            return;
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_user(&dto).await {
                Ok(()) => {
                    set_editing.set(None);
                    set_error.set(None);
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let delete_user = move |id: i32, username: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить пользователя '{}'?", username))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_user(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let update_dto = move |f: fn(&mut UserDto, String), value: String| {
        set_editing.update(|dto| {
            if let Some(dto) = dto {
                f(dto, value);
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Пользователи"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(UserDto {
                            is_active: true,
                            ..UserDto::default()
                        }))
                    >
                        {icon("plus")}
                        "Новый пользователь"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Обновить"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || editing.get().map(|dto| view! {
                <div class="details-panel">
                    <h2 class="details-panel__title">
                        {if dto.id.is_some() { "Пользователь" } else { "Новый пользователь" }}
                    </h2>
                    <div class="details-panel__grid">
                        <label class="form-field">
                            <span class="form-field__label">"Логин"</span>
                            <input
                                type="text"
                                class="form-field__input"
                                prop:value=dto.username.clone()
                                on:input=move |ev| update_dto(
                                    |d, v| d.username = v,
                                    event_target_value(&ev),
                                )
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">
                                {if dto.id.is_some() {
                                    "Пароль (пусто — не менять)"
                                } else {
                                    "Пароль"
                                }}
                            </span>
                            <input
                                type="password"
                                class="form-field__input"
                                prop:value=dto.password.clone()
                                on:input=move |ev| update_dto(
                                    |d, v| d.password = v,
                                    event_target_value(&ev),
                                )
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Email"</span>
                            <input
                                type="email"
                                class="form-field__input"
                                prop:value=dto.email.clone().unwrap_or_default()
                                on:input=move |ev| update_dto(
                                    |d, v| {
                                        d.email = if v.is_empty() { None } else { Some(v) };
                                    },
                                    event_target_value(&ev),
                                )
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Полное имя"</span>
                            <input
                                type="text"
                                class="form-field__input"
                                prop:value=dto.full_name.clone().unwrap_or_default()
                                on:input=move |ev| update_dto(
                                    |d, v| {
                                        d.full_name = if v.is_empty() { None } else { Some(v) };
                                    },
                                    event_target_value(&ev),
                                )
                            />
                        </label>
                        <label class="form-field form-field--checkbox">
                            <input
                                type="checkbox"
                                prop:checked=dto.is_active
                                on:change=move |ev| set_editing.update(|d| {
                                    if let Some(d) = d {
                                        d.is_active = event_target_checked(&ev);
                                    }
                                })
                            />
                            <span>"Активен"</span>
                        </label>
                        <label class="form-field form-field--checkbox">
                            <input
                                type="checkbox"
                                prop:checked=dto.is_admin
                                on:change=move |ev| set_editing.update(|d| {
                                    if let Some(d) = d {
                                        d.is_admin = event_target_checked(&ev);
                                    }
                                })
                            />
                            <span>"Администратор"</span>
                        </label>
                    </div>
                    <div class="details-panel__actions">
                        <button class="button button--primary" on:click=move |_| save()>
                            {icon("save")}
                            "Сохранить"
                        </button>
                        <button
                            class="button button--secondary"
                            on:click=move |_| set_editing.set(None)
                        >
                            {icon("cancel")}
                            "Отмена"
                        </button>
                    </div>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Логин"</th>
                            <th class="table__header-cell">"Полное имя"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Активен"</th>
                            <th class="table__header-cell">"Админ"</th>
                            <th class="table__header-cell">"Последний вход"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|user| {
                            let dto = UserDto::from_user(&user);
                            let id = user.id;
                            let username = user.username.clone();
                            let last_login = user
                                .last_login_at
                                .map(|dt| format_datetime(
                                    &dt.format("%Y-%m-%dT%H:%M").to_string(),
                                ))
                                .unwrap_or_else(|| "—".to_string());
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| set_editing.set(Some(dto.clone()))
                                >
                                    <td class="table__cell">{user.username.clone()}</td>
                                    <td class="table__cell">
                                        {user.full_name.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">
                                        {user.email.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">
                                        {if user.is_active { "да" } else { "нет" }}
                                    </td>
                                    <td class="table__cell">
                                        {if user.is_admin { "да" } else { "нет" }}
                                    </td>
                                    <td class="table__cell">{last_login}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Удалить"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_user(id, username.clone());
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
