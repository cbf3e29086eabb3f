use super::api;
use crate::shared::icons::icon;
use contracts::domain::a005_branch::aggregate::{Branch, BranchDto, CinemaRoomDto};
use leptos::prelude::*;

#[component]
pub fn BranchList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Branch>::new());
    let (error, set_error) = signal(None::<String>);
    let (editing, set_editing) = signal(None::<BranchDto>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_branches().await {
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
            match api::save_branch(&dto).await {
                Ok(()) => {
                    set_editing.set(None);
                    set_error.set(None);
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let delete_branch = move |id: i32, name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить кинотеатр '{}'?", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_branch(id).await {
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
                    <h1 class="header__title">"Кинотеатры"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(BranchDto::default()))
                    >
                        {icon("plus")}
                        "Новый кинотеатр"
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
                <BranchDetails dto=dto editing=set_editing on_save=Callback::new(move |_| save()) />
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Название"</th>
                            <th class="table__header-cell">"Город"</th>
                            <th class="table__header-cell">"Адрес"</th>
                            <th class="table__header-cell">"Телефон"</th>
                            <th class="table__header-cell">"Залы"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|branch| {
                            let dto = BranchDto::from_aggregate(&branch);
                            let id = branch.base.id;
                            let name = branch.base.name.clone();
                            let rooms_line = branch
                                .rooms
                                .iter()
                                .map(|r| format!("{} ({})", r.name, r.capacity()))
                                .collect::<Vec<_>>()
                                .join(", ");
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| set_editing.set(Some(dto.clone()))
                                >
                                    <td class="table__cell">{branch.base.name.clone()}</td>
                                    <td class="table__cell">{branch.city.clone()}</td>
                                    <td class="table__cell">{branch.address.clone()}</td>
                                    <td class="table__cell">
                                        {branch.phone.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">{rooms_line}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Удалить"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_branch(id, name.clone());
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

/// Форма кинотеатра с редактором залов
#[component]
fn BranchDetails(
    dto: BranchDto,
    editing: WriteSignal<Option<BranchDto>>,
    on_save: Callback<()>,
) -> impl IntoView {
    let is_edit = dto.id.is_some();

    let update = move |f: fn(&mut BranchDto, String), value: String| {
        editing.update(|d| {
            if let Some(d) = d {
                f(d, value);
            }
        });
    };

    let update_room = move |index: usize, f: fn(&mut CinemaRoomDto, String), value: String| {
        editing.update(|d| {
            if let Some(d) = d {
                if let Some(room) = d.rooms.get_mut(index) {
                    f(room, value);
                }
            }
        });
    };

    let add_room = move || {
        editing.update(|d| {
            if let Some(d) = d {
                let number = d.rooms.len() + 1;
                d.rooms.push(CinemaRoomDto {
                    id: None,
                    name: format!("Зал {}", number),
                    seat_rows: None,
                    seats_per_row: None,
                });
            }
        });
    };

    let remove_room = move |index: usize| {
        editing.update(|d| {
            if let Some(d) = d {
                if index < d.rooms.len() {
                    d.rooms.remove(index);
                }
            }
        });
    };

    view! {
        <div class="details-panel">
            <h2 class="details-panel__title">
                {if is_edit { "Кинотеатр" } else { "Новый кинотеатр" }}
            </h2>

            <div class="details-panel__grid">
                <label class="form-field">
                    <span class="form-field__label">"Название"</span>
                    <input
                        type="text"
                        class="form-field__input"
                        prop:value=dto.name.clone()
                        on:input=move |ev| update(|d, v| d.name = v, event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Город"</span>
                    <input
                        type="text"
                        class="form-field__input"
                        prop:value=dto.city.clone()
                        on:input=move |ev| update(|d, v| d.city = v, event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Адрес"</span>
                    <input
                        type="text"
                        class="form-field__input"
                        prop:value=dto.address.clone()
                        on:input=move |ev| update(|d, v| d.address = v, event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Телефон"</span>
                    <input
                        type="tel"
                        class="form-field__input"
                        prop:value=dto.phone.clone().unwrap_or_default()
                        on:input=move |ev| update(
                            |d, v| d.phone = if v.is_empty() { None } else { Some(v) },
                            event_target_value(&ev),
                        )
                    />
                </label>
            </div>

            <div class="rooms-editor">
                <div class="rooms-editor__header">
                    <span class="form-field__label">"Залы"</span>
                    <button class="button button--small" on:click=move |_| add_room()>
                        {icon("plus")}
                        "Добавить зал"
                    </button>
                </div>
                {dto.rooms.iter().enumerate().map(|(index, room)| {
                    view! {
                        <div class="rooms-editor__row">
                            <input
                                type="text"
                                class="form-field__input"
                                placeholder="Название зала"
                                prop:value=room.name.clone()
                                on:input=move |ev| update_room(
                                    index,
                                    |r, v| r.name = v,
                                    event_target_value(&ev),
                                )
                            />
                            <input
                                type="number"
                                class="form-field__input form-field__input--short"
                                placeholder="Рядов"
                                prop:value=room
                                    .seat_rows
                                    .map(|r| r.to_string())
                                    .unwrap_or_default()
                                on:input=move |ev| update_room(
                                    index,
                                    |r, v| r.seat_rows = v.parse().ok(),
                                    event_target_value(&ev),
                                )
                            />
                            <input
                                type="number"
                                class="form-field__input form-field__input--short"
                                placeholder="Мест в ряду"
                                prop:value=room
                                    .seats_per_row
                                    .map(|s| s.to_string())
                                    .unwrap_or_default()
                                on:input=move |ev| update_room(
                                    index,
                                    |r, v| r.seats_per_row = v.parse().ok(),
                                    event_target_value(&ev),
                                )
                            />
                            <button
                                class="button button--icon"
                                title="Убрать зал"
                                on:click=move |_| remove_room(index)
                            >
                                {icon("delete")}
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="details-panel__actions">
                <button class="button button--primary" on:click=move |_| on_save.run(())>
                    {icon("save")}
                    "Сохранить"
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| editing.set(None)
                >
                    {icon("cancel")}
                    "Отмена"
                </button>
            </div>
        </div>
    }
}
