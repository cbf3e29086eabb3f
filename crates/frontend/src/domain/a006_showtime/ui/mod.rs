use super::api;
use crate::domain::a001_movie::api as movie_api;
use crate::domain::a005_branch::api as branch_api;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::a001_movie::aggregate::Movie;
use contracts::domain::a005_branch::aggregate::Branch;
use contracts::domain::a006_showtime::aggregate::{Showtime, ShowtimeDto};
use contracts::domain::a006_showtime::schedule::{
    end_bound, has_scheduling_conflict, min_start_bound, parse_picker_value,
};
use leptos::prelude::*;

#[component]
pub fn ShowtimeList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Showtime>::new());
    let (movies, set_movies) = signal(Vec::<Movie>::new());
    let (branches, set_branches) = signal(Vec::<Branch>::new());
    let (error, set_error) = signal(None::<String>);
    let (editing, set_editing) = signal(None::<ShowtimeDto>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_showtimes().await {
                Ok(list) => {
                    set_items.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // Справочники для селектов и расшифровки id в таблице
    wasm_bindgen_futures::spawn_local(async move {
        match movie_api::fetch_movies().await {
            Ok(list) => set_movies.set(list),
            Err(e) => log::error!("failed to load movies: {}", e),
        }
        match branch_api::fetch_branches().await {
            Ok(list) => set_branches.set(list),
            Err(e) => log::error!("failed to load branches: {}", e),
        }
    });

    let delete_showtime = move |id: i32| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Удалить сеанс?").unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_showtime(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let movie_name = move |movie_id: i32| {
        movies
            .get()
            .iter()
            .find(|m| m.base.id == movie_id)
            .map(|m| m.base.name.clone())
            .unwrap_or_else(|| format!("#{}", movie_id))
    };

    let room_label = move |branch_id: i32, room_id: i32| {
        let branches = branches.get();
        let Some(branch) = branches.iter().find(|b| b.base.id == branch_id) else {
            return format!("#{}", branch_id);
        };
        let room = branch
            .room_by_id(room_id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| format!("зал #{}", room_id));
        format!("{}, {}", branch.base.name, room)
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Сеансы"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(ShowtimeDto::default()))
                    >
                        {icon("plus")}
                        "Новый сеанс"
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
                <ShowtimeDetails
                    dto=dto
                    movies=movies
                    branches=branches
                    existing=items
                    on_saved=Callback::new(move |_| {
                        set_editing.set(None);
                        fetch();
                    })
                    on_cancel=Callback::new(move |_| set_editing.set(None))
                />
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Фильм"</th>
                            <th class="table__header-cell">"Кинотеатр и зал"</th>
                            <th class="table__header-cell">"Начало"</th>
                            <th class="table__header-cell">"Окончание"</th>
                            <th class="table__header-cell">"Цена"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|showtime| {
                            let dto = ShowtimeDto::from_aggregate(&showtime);
                            let id = showtime.id;
                            let start = showtime
                                .start_time
                                .format("%Y-%m-%dT%H:%M")
                                .to_string();
                            let end = showtime.end_time.format("%Y-%m-%dT%H:%M").to_string();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| set_editing.set(Some(dto.clone()))
                                >
                                    <td class="table__cell">{movie_name(showtime.movie_id)}</td>
                                    <td class="table__cell">
                                        {room_label(showtime.branch_id, showtime.room_id)}
                                    </td>
                                    <td class="table__cell">{format_datetime(&start)}</td>
                                    <td class="table__cell">{format_datetime(&end)}</td>
                                    <td class="table__cell">{format_money(showtime.price)}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Удалить"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_showtime(id);
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

/// Форма сеанса.
///
/// Время окончания пересчитывается из начала и длительности фильма
/// (плюс технологический перерыв); перед сохранением расписание зала
/// проверяется на пересечения.
#[component]
fn ShowtimeDetails(
    dto: ShowtimeDto,
    movies: ReadSignal<Vec<Movie>>,
    branches: ReadSignal<Vec<Branch>>,
    existing: ReadSignal<Vec<Showtime>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);

    let min_start = min_start_bound(Utc::now());

    let movie_duration = move |movie_id: Option<i32>| {
        movie_id.and_then(|id| {
            movies
                .get()
                .iter()
                .find(|m| m.base.id == id)
                .map(|m| m.duration_min)
        })
    };

    let recompute_end = move || {
        form.update(|dto| {
            if let Some(duration) = movie_duration(dto.movie_id) {
                dto.end_time = end_bound(&dto.start_time, duration);
            }
        });
    };

    let branch_rooms = move || {
        let branch_id = form.get().branch_id;
        branches
            .get()
            .iter()
            .find(|b| Some(b.base.id) == branch_id)
            .map(|b| b.rooms.clone())
            .unwrap_or_default()
    };

    let save = move || {
        let dto = form.get();
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }

        // validate гарантирует, что обе даты разбираются
        let (Some(start), Some(end)) = (
            parse_picker_value(&dto.start_time),
            parse_picker_value(&dto.end_time),
        ) else {
            return;
        };
        let (Some(room_id), candidate_id) = (dto.room_id, dto.id) else {
            return;
        };

        let others: Vec<Showtime> = existing
            .get()
            .into_iter()
            .filter(|s| Some(s.id) != candidate_id)
            .collect();
        if has_scheduling_conflict(&others, room_id, start, end) {
            error.set(Some("Зал занят в выбранное время".to_string()));
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match api::save_showtime(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details-panel">
            <h2 class="details-panel__title">
                {if is_edit { "Сеанс" } else { "Новый сеанс" }}
            </h2>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="details-panel__grid">
                <label class="form-field">
                    <span class="form-field__label">"Фильм"</span>
                    <select
                        class="form-field__input"
                        prop:value=move || {
                            form.get()
                                .movie_id
                                .map(|id| id.to_string())
                                .unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|d| d.movie_id = value.parse().ok());
                            recompute_end();
                        }
                    >
                        <option value="">"Выберите фильм"</option>
                        {move || movies.get().into_iter().map(|m| view! {
                            <option value=m.base.id.to_string()>{m.base.name}</option>
                        }).collect_view()}
                    </select>
                </label>

                <label class="form-field">
                    <span class="form-field__label">"Кинотеатр"</span>
                    <select
                        class="form-field__input"
                        prop:value=move || {
                            form.get()
                                .branch_id
                                .map(|id| id.to_string())
                                .unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|d| {
                                d.branch_id = value.parse().ok();
                                // другой кинотеатр — другой набор залов
                                d.room_id = None;
                            });
                        }
                    >
                        <option value="">"Выберите кинотеатр"</option>
                        {move || branches.get().into_iter().map(|b| view! {
                            <option value=b.base.id.to_string()>{b.base.name}</option>
                        }).collect_view()}
                    </select>
                </label>

                <label class="form-field">
                    <span class="form-field__label">"Зал"</span>
                    <select
                        class="form-field__input"
                        prop:value=move || {
                            form.get()
                                .room_id
                                .map(|id| id.to_string())
                                .unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|d| d.room_id = value.parse().ok());
                        }
                    >
                        <option value="">"Выберите зал"</option>
                        {move || branch_rooms().into_iter().map(|r| view! {
                            <option value=r.id.to_string()>
                                {format!("{} ({} мест)", r.name, r.capacity())}
                            </option>
                        }).collect_view()}
                    </select>
                </label>

                <label class="form-field">
                    <span class="form-field__label">"Начало"</span>
                    <input
                        type="datetime-local"
                        class="form-field__input"
                        min=min_start.clone()
                        prop:value=move || form.get().start_time
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|d| d.start_time = value);
                            recompute_end();
                        }
                    />
                </label>

                <label class="form-field">
                    <span class="form-field__label">"Зал свободен с"</span>
                    <input
                        type="datetime-local"
                        class="form-field__input"
                        readonly=true
                        prop:value=move || form.get().end_time
                    />
                </label>

                <label class="form-field">
                    <span class="form-field__label">"Цена билета"</span>
                    <input
                        type="number"
                        class="form-field__input"
                        prop:value=move || {
                            form.get()
                                .price
                                .map(|p| p.to_string())
                                .unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|d| d.price = value.parse().ok());
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
