use super::api;
use crate::shared::icons::icon;
use contracts::domain::a004_producer::aggregate::{Producer, ProducerDto};
use leptos::prelude::*;

#[component]
pub fn ProducerList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Producer>::new());
    let (error, set_error) = signal(None::<String>);
    let (editing, set_editing) = signal(None::<ProducerDto>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_producers().await {
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
            match api::save_producer(&dto).await {
                Ok(()) => {
                    set_editing.set(None);
                    set_error.set(None);
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let delete_producer = move |id: i32, name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить продюсера '{}'?", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_producer(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Продюсеры"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(ProducerDto::default()))
                    >
                        {icon("plus")}
                        "Новый продюсер"
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
                        {if dto.id.is_some() { "Продюсер" } else { "Новый продюсер" }}
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
                            <span class="form-field__label">"Студия"</span>
                            <input
                                type="text"
                                class="form-field__input"
                                prop:value=dto.studio.clone().unwrap_or_default()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_editing.update(|d| {
                                        if let Some(d) = d {
                                            d.studio =
                                                if value.is_empty() { None } else { Some(value) };
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
                                    let value = event_target_value(&ev);
                                    set_editing.update(|d| {
                                        if let Some(d) = d {
                                            d.nationality =
                                                if value.is_empty() { None } else { Some(value) };
                                        }
                                    });
                                }
                            />
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
                            <th class="table__header-cell">"Студия"</th>
                            <th class="table__header-cell">"Гражданство"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|producer| {
                            let dto = ProducerDto::from_aggregate(&producer);
                            let id = producer.base.id;
                            let name = producer.base.name.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| set_editing.set(Some(dto.clone()))
                                >
                                    <td class="table__cell">{producer.base.name.clone()}</td>
                                    <td class="table__cell">
                                        {producer.studio.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">
                                        {producer.nationality.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Удалить"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_producer(id, name.clone());
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
