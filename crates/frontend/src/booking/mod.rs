//! Мастер бронирования: пять шагов от выбора сеанса до подтверждения.

pub mod context;
pub mod steps;

use crate::domain::a001_movie::api as movie_api;
use crate::shared::components::BookingStepper;
use contracts::domain::a001_movie::aggregate::Movie;
use contracts::shared::booking_steps::{step_index_by_segment, BookingRef};
use leptos::prelude::*;

/// Диспетчер мастера: разбирает сегмент маршрута и отдаёт нужный шаг
#[component]
pub fn BookingPage(booking: BookingRef, segment: String) -> impl IntoView {
    let current_index = step_index_by_segment(&segment).unwrap_or(0);

    let (movie, set_movie) = signal(None::<Movie>);
    let movie_id = booking.movie_id;
    wasm_bindgen_futures::spawn_local(async move {
        match movie_api::fetch_movie(movie_id).await {
            Ok(m) => set_movie.set(Some(m)),
            Err(e) => log::error!("failed to load movie {}: {}", movie_id, e),
        }
    });

    let step_view = match segment.as_str() {
        "seats" => view! { <steps::SeatsStep booking=booking /> }.into_any(),
        "food" => view! { <steps::FoodStep booking=booking /> }.into_any(),
        "payment" => view! { <steps::PaymentStep booking=booking /> }.into_any(),
        "confirm" => view! { <steps::ConfirmStep /> }.into_any(),
        // "showtime" и всё неизвестное — первый шаг
        _ => view! { <steps::ShowtimeStep booking=booking /> }.into_any(),
    };

    view! {
        <div class="page booking-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        "Бронирование: "
                        {move || movie.get().map(|m| m.base.name).unwrap_or_default()}
                    </h1>
                </div>
            </div>

            <BookingStepper
                booking=booking
                current_index=Signal::derive(move || current_index)
            />

            {step_view}
        </div>
    }
}
