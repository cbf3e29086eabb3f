use crate::booking::context::use_booking;
use crate::domain::a005_branch::api as branch_api;
use crate::domain::a006_showtime::api as showtime_api;
use crate::layout::global_context::use_app_context;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_money;
use contracts::domain::a005_branch::aggregate::Branch;
use contracts::domain::a006_showtime::aggregate::Showtime;
use contracts::shared::booking_steps::{step_route, BookingRef};
use leptos::prelude::*;

/// Шаг 1: выбор сеанса фильма
#[component]
pub fn ShowtimeStep(booking: BookingRef) -> impl IntoView {
    let ctx = use_app_context();
    let cart = use_booking();

    let (showtimes, set_showtimes) = signal(Vec::<Showtime>::new());
    let (branches, set_branches) = signal(Vec::<Branch>::new());
    let (error, set_error) = signal(None::<String>);

    let movie_id = booking.movie_id;
    wasm_bindgen_futures::spawn_local(async move {
        match showtime_api::fetch_showtimes_by_movie(movie_id).await {
            Ok(list) => set_showtimes.set(list),
            Err(e) => set_error.set(Some(e)),
        }
        match branch_api::fetch_branches().await {
            Ok(list) => set_branches.set(list),
            Err(e) => log::error!("failed to load branches: {}", e),
        }
    });

    let place_label = move |showtime: &Showtime| {
        let branches = branches.get();
        let Some(branch) = branches.iter().find(|b| b.base.id == showtime.branch_id) else {
            return String::new();
        };
        let room = branch
            .room_by_id(showtime.room_id)
            .map(|r| r.name.clone())
            .unwrap_or_default();
        format!("{} ({}), {}", branch.base.name, branch.city, room)
    };

    view! {
        <div class="booking-step">
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show
                when=move || !showtimes.get().is_empty()
                fallback=|| view! {
                    <div class="booking-step__empty">"Сеансов на этот фильм пока нет"</div>
                }
            >
                <div class="showtime-cards">
                    {move || showtimes.get().into_iter().map(|showtime| {
                        let start = showtime
                            .start_time
                            .format("%Y-%m-%dT%H:%M")
                            .to_string();
                        let place = place_label(&showtime);
                        let showtime_id = showtime.id;
                        let next_route = step_route(
                            1,
                            &BookingRef::new(movie_id, showtime_id),
                        );
                        view! {
                            <div class="showtime-card">
                                <div class="showtime-card__time">
                                    {format_datetime(&start)}
                                </div>
                                <div class="showtime-card__place">{place}</div>
                                <div class="showtime-card__price">
                                    {format_money(showtime.price)}
                                </div>
                                <button
                                    class="button button--primary"
                                    on:click=move |_| {
                                        cart.bind_showtime(showtime_id);
                                        ctx.navigate(&next_route);
                                    }
                                >
                                    "Выбрать"
                                </button>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
