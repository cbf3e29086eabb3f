use crate::booking::context::use_booking;
use crate::domain::a005_branch::api as branch_api;
use crate::domain::a006_showtime::api as showtime_api;
use crate::layout::global_context::use_app_context;
use contracts::domain::a005_branch::aggregate::CinemaRoom;
use contracts::shared::booking_steps::{step_route, BookingRef};
use leptos::prelude::*;

/// Шаг 2: выбор мест на схеме зала
#[component]
pub fn SeatsStep(booking: BookingRef) -> impl IntoView {
    let ctx = use_app_context();
    let cart = use_booking();
    cart.bind_showtime(booking.showtime_id);

    let (room, set_room) = signal(None::<CinemaRoom>);
    let (taken, set_taken) = signal(Vec::<String>::new());
    let (error, set_error) = signal(None::<String>);

    let showtime_id = booking.showtime_id;
    let movie_id = booking.movie_id;
    wasm_bindgen_futures::spawn_local(async move {
        let showtime = match showtime_api::fetch_showtimes_by_movie(movie_id).await {
            Ok(list) => list.into_iter().find(|s| s.id == showtime_id),
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        let Some(showtime) = showtime else {
            set_error.set(Some("Сеанс не найден".to_string()));
            return;
        };

        match branch_api::fetch_branches().await {
            Ok(branches) => {
                let found = branches
                    .iter()
                    .find(|b| b.base.id == showtime.branch_id)
                    .and_then(|b| b.room_by_id(showtime.room_id))
                    .cloned();
                match found {
                    Some(r) => set_room.set(Some(r)),
                    None => set_error.set(Some("Зал не найден".to_string())),
                }
            }
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        }

        match showtime_api::fetch_taken_seats(showtime_id).await {
            Ok(labels) => set_taken.set(labels),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let next_route = step_route(2, &booking);

    view! {
        <div class="booking-step">
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || room.get().map(|room| {
                let rows = room.seat_labels();
                view! {
                    <div class="seat-map">
                        <div class="seat-map__screen">"Экран"</div>
                        {rows.into_iter().map(|row| view! {
                            <div class="seat-map__row">
                                {row.into_iter().map(|label| {
                                    let is_taken = Signal::derive({
                                        let label = label.clone();
                                        move || taken.get().contains(&label)
                                    });
                                    let is_selected = Signal::derive({
                                        let label = label.clone();
                                        move || cart.seats.get().contains(&label)
                                    });
                                    let label_for_click = label.clone();
                                    view! {
                                        <button
                                            class="seat"
                                            class:seat--taken=is_taken
                                            class:seat--selected=is_selected
                                            disabled=is_taken
                                            on:click=move |_| {
                                                cart.toggle_seat(&label_for_click);
                                            }
                                        >
                                            {label}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        }).collect_view()}
                    </div>
                }
            })}

            <div class="booking-step__summary">
                {move || {
                    let seats = cart.seats.get();
                    if seats.is_empty() {
                        "Места не выбраны".to_string()
                    } else {
                        format!("Выбрано: {}", seats.join(", "))
                    }
                }}
            </div>

            <div class="booking-step__actions">
                <button
                    class="button button--primary"
                    disabled=move || cart.seats.get().is_empty()
                    on:click=move |_| ctx.navigate(&next_route)
                >
                    "Далее"
                </button>
            </div>
        </div>
    }
}
