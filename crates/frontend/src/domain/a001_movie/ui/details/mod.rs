use crate::domain::a001_movie::api;
use crate::shared::icons::icon;
use contracts::domain::a001_movie::aggregate::{GenreRef, MovieDto};
use leptos::prelude::*;

/// Форма карточки фильма; `id = None` — создание
#[component]
pub fn MovieDetails(
    id: Option<i32>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(MovieDto::default());
    let error = RwSignal::new(None::<String>);
    let (genres, set_genres) = signal(Vec::<GenreRef>::new());

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_genres().await {
            Ok(list) => set_genres.set(list),
            Err(e) => log::error!("failed to load genres: {}", e),
        }
    });

    if let Some(existing_id) = id {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_movie(existing_id).await {
                Ok(movie) => form.set(MovieDto::from_aggregate(&movie)),
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    let save = move || {
        let dto = form.get();
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_movie(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let toggle_genre = move |genre_id: i32, checked: bool| {
        form.update(|dto| {
            if checked {
                if !dto.genre_ids.contains(&genre_id) {
                    dto.genre_ids.push(genre_id);
                }
            } else {
                dto.genre_ids.retain(|g| *g != genre_id);
            }
        });
    };

    let text_opt = |value: String| if value.is_empty() { None } else { Some(value) };

    view! {
        <div class="details-panel">
            <h2 class="details-panel__title">
                {if id.is_some() { "Фильм" } else { "Новый фильм" }}
            </h2>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="details-panel__grid">
                <label class="form-field form-field--wide">
                    <span class="form-field__label">"Название"</span>
                    <input
                        type="text"
                        class="form-field__input"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|d| d.name = event_target_value(&ev))
                    />
                </label>

                <label class="form-field">
                    <span class="form-field__label">"В прокате с"</span>
                    <input
                        type="date"
                        class="form-field__input"
                        prop:value=move || form.get().release_date
                        on:input=move |ev| {
                            form.update(|d| d.release_date = event_target_value(&ev))
                        }
                    />
                </label>

                <label class="form-field">
                    <span class="form-field__label">"Год производства"</span>
                    <input
                        type="number"
                        class="form-field__input"
                        prop:value=move || {
                            form.get().year.map(|y| y.to_string()).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|d| d.year = value.parse().ok());
                        }
                    />
                </label>

                <label class="form-field">
                    <span class="form-field__label">"Длительность, мин"</span>
                    <input
                        type="number"
                        class="form-field__input"
                        prop:value=move || {
                            form.get()
                                .duration_min
                                .map(|m| m.to_string())
                                .unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|d| d.duration_min = value.parse().ok());
                        }
                    />
                </label>

                <label class="form-field">
                    <span class="form-field__label">"Возрастной рейтинг"</span>
                    <select
                        class="form-field__input"
                        prop:value=move || form.get().age_rating.unwrap_or_default()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|d| {
                                d.age_rating =
                                    if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    >
                        <option value="">"Не указан"</option>
                        <option value="0+">"0+"</option>
                        <option value="6+">"6+"</option>
                        <option value="12+">"12+"</option>
                        <option value="16+">"16+"</option>
                        <option value="18+">"18+"</option>
                    </select>
                </label>

                <label class="form-field">
                    <span class="form-field__label">"Страна"</span>
                    <input
                        type="text"
                        class="form-field__input"
                        prop:value=move || form.get().country.unwrap_or_default()
                        on:input=move |ev| {
                            let value = text_opt(event_target_value(&ev));
                            form.update(|d| d.country = value);
                        }
                    />
                </label>

                <div class="form-field form-field--wide">
                    <span class="form-field__label">"Жанры"</span>
                    <div class="genre-checks">
                        {move || {
                            let selected = form.get().genre_ids;
                            genres.get().into_iter().map(|g| {
                                let checked = selected.contains(&g.id);
                                let genre_id = g.id;
                                view! {
                                    <label class="genre-checks__item">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |ev| toggle_genre(
                                                genre_id,
                                                event_target_checked(&ev),
                                            )
                                        />
                                        <span>{g.name}</span>
                                    </label>
                                }
                            }).collect_view()
                        }}
                    </div>
                </div>

                <label class="form-field form-field--wide">
                    <span class="form-field__label">"Описание"</span>
                    <textarea
                        class="form-field__input"
                        prop:value=move || form.get().description.unwrap_or_default()
                        on:input=move |ev| {
                            let value = text_opt(event_target_value(&ev));
                            form.update(|d| d.description = value);
                        }
                    ></textarea>
                </label>

                <label class="form-field">
                    <span class="form-field__label">"Постер (URL)"</span>
                    <input
                        type="url"
                        class="form-field__input"
                        prop:value=move || form.get().poster_url.unwrap_or_default()
                        on:input=move |ev| {
                            let value = text_opt(event_target_value(&ev));
                            form.update(|d| d.poster_url = value);
                        }
                    />
                </label>

                <label class="form-field">
                    <span class="form-field__label">"Трейлер (URL)"</span>
                    <input
                        type="url"
                        class="form-field__input"
                        prop:value=move || form.get().trailer_url.unwrap_or_default()
                        on:input=move |ev| {
                            let value = text_opt(event_target_value(&ev));
                            form.update(|d| d.trailer_url = value);
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
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("cancel")}
                    "Отмена"
                </button>
            </div>
        </div>
    }
}
