use super::api;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::a002_actor::aggregate::{Actor, ActorDto};
use leptos::prelude::*;

#[component]
pub fn ActorList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Actor>::new());
    let (error, set_error) = signal(None::<String>);
    let (editing, set_editing) = signal(None::<ActorDto>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_actors().await {
                Ok(list) => {
                    set_items.set(list);
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
            match api::save_actor(&dto).await {
                Ok(()) => {
                    set_editing.set(None);
                    set_error.set(None);
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let delete_actor = move |id: i32, name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить актёра '{}'?", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_actor(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let text_opt = |value: String| if value.is_empty() { None } else { Some(value) };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Актёры"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(ActorDto::default()))
                    >
                        {icon("plus")}
                        "Новый актёр"
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
                        {if dto.id.is_some() { "Актёр" } else { "Новый актёр" }}
                    </h2>
                    <div class="details-panel__grid">
                        <label class="form-field">
                            <span class="form-field__label">"Имя"</span>
                            <input
                                type="text"
                                class="form-field__input"
                                prop:value=dto.name.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_editing.update(|d| {
                                        if let Some(d) = d {
                                            d.name = value;
                                        }
                                    });
                                }
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Дата рождения"</span>
                            <input
                                type="date"
                                class="form-field__input"
                                prop:value=dto.birth_date.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_editing.update(|d| {
                                        if let Some(d) = d {
                                            d.birth_date = value;
                                        }
                                    });
                                }
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Гражданство"</span>
                            <input
                                type="text"
                                class="form-field__input"
                                prop:value=dto.nationality.clone().unwrap_or_default()
                                on:input=move |ev| {
                                    let value = text_opt(event_target_value(&ev));
                                    set_editing.update(|d| {
                                        if let Some(d) = d {
                                            d.nationality = value;
                                        }
                                    });
                                }
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Фото (URL)"</span>
                            <input
                                type="url"
                                class="form-field__input"
                                prop:value=dto.photo_url.clone().unwrap_or_default()
                                on:input=move |ev| {
                                    let value = text_opt(event_target_value(&ev));
                                    set_editing.update(|d| {
                                        if let Some(d) = d {
                                            d.photo_url = value;
                                        }
                                    });
                                }
                            />
                        </label>
                        <label class="form-field form-field--wide">
                            <span class="form-field__label">"Биография"</span>
                            <textarea
                                class="form-field__input"
                                prop:value=dto.bio.clone().unwrap_or_default()
                                on:input=move |ev| {
                                    let value = text_opt(event_target_value(&ev));
                                    set_editing.update(|d| {
                                        if let Some(d) = d {
                                            d.bio = value;
                                        }
                                    });
                                }
                            ></textarea>
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
                            <th class="table__header-cell">"Имя"</th>
                            <th class="table__header-cell">"Дата рождения"</th>
                            <th class="table__header-cell">"Гражданство"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|actor| {
                            let dto = ActorDto::from_aggregate(&actor);
                            let id = actor.base.id;
                            let name = actor.base.name.clone();
                            let birth = actor
                                .birth_date
                                .map(|d| format_date(&d.format("%Y-%m-%d").to_string()))
                                .unwrap_or_default();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| set_editing.set(Some(dto.clone()))
                                >
                                    <td class="table__cell">{actor.base.name.clone()}</td>
                                    <td class="table__cell">{birth}</td>
                                    <td class="table__cell">
                                        {actor.nationality.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Удалить"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_actor(id, name.clone());
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
