use super::api;
use crate::shared::icons::icon;
use contracts::domain::a009_post::aggregate::{Post, PostDto};
use leptos::prelude::*;

#[component]
pub fn PostList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Post>::new());
    let (error, set_error) = signal(None::<String>);
    let (editing, set_editing) = signal(None::<PostDto>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_posts().await {
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
            match api::save_post(&dto).await {
                Ok(()) => {
                    set_editing.set(None);
                    set_error.set(None);
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let delete_post = move |id: i32, title: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить новость '{}'?", title))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_post(id).await {
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
                    <h1 class="header__title">"Новости"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(PostDto::default()))
                    >
                        {icon("plus")}
                        "Новая новость"
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
                        {if dto.id.is_some() { "Новость" } else { "Новая новость" }}
                    </h2>
                    <div class="details-panel__grid">
                        <label class="form-field form-field--wide">
                            <span class="form-field__label">"Заголовок"</span>
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
                        <label class="form-field form-field--wide">
                            <span class="form-field__label">"Текст"</span>
                            <textarea
                                class="form-field__input"
                                prop:value=dto.body.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_editing.update(|d| {
                                        if let Some(d) = d {
                                            d.body = value;
                                        }
                                    });
                                }
                            ></textarea>
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Автор"</span>
                            <input
                                type="text"
                                class="form-field__input"
                                prop:value=dto.author.clone().unwrap_or_default()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_editing.update(|d| {
                                        if let Some(d) = d {
                                            d.author =
                                                if value.is_empty() { None } else { Some(value) };
                                        }
                                    });
                                }
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Изображение (URL)"</span>
                            <input
                                type="url"
                                class="form-field__input"
                                prop:value=dto.image_url.clone().unwrap_or_default()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_editing.update(|d| {
                                        if let Some(d) = d {
                                            d.image_url =
                                                if value.is_empty() { None } else { Some(value) };
                                        }
                                    });
                                }
                            />
                        </label>
                        <label class="form-field form-field--checkbox">
                            <input
                                type="checkbox"
                                prop:checked=dto.is_published
                                on:change=move |ev| set_editing.update(|d| {
                                    if let Some(d) = d {
                                        d.is_published = event_target_checked(&ev);
                                    }
                                })
                            />
                            <span>"Опубликована"</span>
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
                            <th class="table__header-cell">"Заголовок"</th>
                            <th class="table__header-cell">"Автор"</th>
                            <th class="table__header-cell">"Опубликована"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|post| {
                            let dto = PostDto::from_aggregate(&post);
                            let id = post.base.id;
                            let title = post.base.name.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| set_editing.set(Some(dto.clone()))
                                >
                                    <td class="table__cell">{post.base.name.clone()}</td>
                                    <td class="table__cell">
                                        {post.author.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">
                                        {if post.is_published { "да" } else { "нет" }}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Удалить"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_post(id, title.clone());
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
