use crate::domain::a001_movie::api;
use crate::domain::a001_movie::ui::details::MovieDetails;
use crate::layout::global_context::use_app_context;
use crate::shared::components::FilterPanel;
use crate::shared::date_utils::{format_date, format_duration_min};
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_indicator, sort_list, SearchInput, Sortable};
use chrono::Utc;
use contracts::domain::a001_movie::aggregate::{GenreRef, Movie};
use contracts::domain::a001_movie::catalog::{
    classify_by_showing_status, filter_movies, MovieFilter,
};
use contracts::shared::booking_steps::{step_route, BookingRef};
use leptos::prelude::*;
use std::cmp::Ordering;

/// Вкладки каталога по статусу проката
#[derive(Clone, Copy, PartialEq, Eq)]
enum CatalogTab {
    All,
    NowShowing,
    ComingSoon,
}

#[derive(Clone)]
struct MovieRow {
    id: i32,
    name: String,
    release_date: String,
    year: i32,
    duration_min: i32,
    genres: String,
    age_rating: String,
}

impl From<&Movie> for MovieRow {
    fn from(m: &Movie) -> Self {
        Self {
            id: m.base.id,
            name: m.base.name.clone(),
            release_date: m.release_date.format("%Y-%m-%d").to_string(),
            year: m.year,
            duration_min: m.duration_min,
            genres: m.genres_line(),
            age_rating: m.age_rating.clone().unwrap_or_default(),
        }
    }
}

impl Sortable for MovieRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "release_date" => self.release_date.cmp(&other.release_date),
            "year" => self.year.cmp(&other.year),
            "duration" => self.duration_min.cmp(&other.duration_min),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn MovieList() -> impl IntoView {
    let ctx = use_app_context();

    let (movies, set_movies) = signal(Vec::<Movie>::new());
    let (genres, set_genres) = signal(Vec::<GenreRef>::new());
    let (error, set_error) = signal(None::<String>);
    let (tab, set_tab) = signal(CatalogTab::All);
    let filter = RwSignal::new(MovieFilter::default());
    let filter_expanded = RwSignal::new(false);
    let (sort_field, set_sort_field) = signal("release_date");
    let (sort_asc, set_sort_asc) = signal(false);
    // None — панель закрыта, Some(None) — новый фильм, Some(Some(id)) — правка
    let (editing, set_editing) = signal(None::<Option<i32>>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_movies().await {
                Ok(list) => {
                    set_movies.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_genres().await {
            Ok(list) => set_genres.set(list),
            Err(e) => log::error!("failed to load genres: {}", e),
        }
    });

    let rows = move || {
        let all = movies.get();
        let subset: Vec<Movie> = match tab.get() {
            CatalogTab::All => all,
            CatalogTab::NowShowing => {
                classify_by_showing_status(&all, Utc::now()).now_showing
            }
            CatalogTab::ComingSoon => {
                classify_by_showing_status(&all, Utc::now()).coming_soon
            }
        };
        let filtered = filter_movies(&subset, &filter.get());
        let mut rows: Vec<MovieRow> = filtered.iter().map(Into::into).collect();
        sort_list(&mut rows, sort_field.get(), sort_asc.get());
        rows
    };

    let toggle_sort = move |field: &'static str| {
        if sort_field.get() == field {
            set_sort_asc.update(|asc| *asc = !*asc);
        } else {
            set_sort_field.set(field);
            set_sort_asc.set(true);
        }
    };

    let delete_movie = move |id: i32, name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить фильм '{}'?", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_movie(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let tab_button = move |this: CatalogTab, label: &'static str| {
        view! {
            <button
                class="tabs__tab"
                class:tabs__tab--active=move || tab.get() == this
                on:click=move |_| set_tab.set(this)
            >
                {label}
            </button>
        }
    };

    let header_cell = move |field: &'static str, label: &'static str| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=move |_| toggle_sort(field)
            >
                {label}
                {move || sort_indicator(sort_field.get(), field, sort_asc.get())}
            </th>
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Фильмы"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(None))
                    >
                        {icon("plus")}
                        "Новый фильм"
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

            <div class="tabs">
                {tab_button(CatalogTab::All, "Все")}
                {tab_button(CatalogTab::NowShowing, "Сейчас в кино")}
                {tab_button(CatalogTab::ComingSoon, "Скоро")}
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=Signal::derive(move || filter.get().active_count())
            >
                <div class="filter-panel__fields">
                    <div class="form-field">
                        <span class="form-field__label">"Название"</span>
                        <SearchInput
                            on_change=move |value: String| {
                                filter.update(|f| f.set_title_from_input(&value));
                            }
                            placeholder="Поиск по названию..."
                        />
                    </div>
                    <label class="form-field">
                        <span class="form-field__label">"Год"</span>
                        <input
                            type="number"
                            class="form-field__input"
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| f.set_year_from_input(&value));
                            }
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Жанр"</span>
                        <select
                            class="form-field__input"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| f.set_genre_from_input(&value));
                            }
                        >
                            <option value="">"Все жанры"</option>
                            {move || genres.get().into_iter().map(|g| view! {
                                <option value=g.id.to_string()>{g.name}</option>
                            }).collect_view()}
                        </select>
                    </label>
                </div>
            </FilterPanel>

            {move || editing.get().map(|id| view! {
                <MovieDetails
                    id=id
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
                            {header_cell("name", "Название")}
                            {header_cell("release_date", "В прокате с")}
                            {header_cell("year", "Год")}
                            {header_cell("duration", "Длительность")}
                            <th class="table__header-cell">"Жанры"</th>
                            <th class="table__header-cell">"Рейтинг"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            let id = row.id;
                            let name_for_delete = row.name.clone();
                            let booking_route =
                                step_route(0, &BookingRef::new(id, 0));
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| set_editing.set(Some(Some(id)))
                                >
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{format_date(&row.release_date)}</td>
                                    <td class="table__cell">{row.year}</td>
                                    <td class="table__cell">
                                        {format_duration_min(row.duration_min)}
                                    </td>
                                    <td class="table__cell">{row.genres}</td>
                                    <td class="table__cell">{row.age_rating}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--small"
                                            title="Бронировать билеты"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                ctx.navigate(&booking_route);
                                            }
                                        >
                                            {icon("ticket")}
                                        </button>
                                        <button
                                            class="button button--icon"
                                            title="Удалить"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_movie(id, name_for_delete.clone());
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
