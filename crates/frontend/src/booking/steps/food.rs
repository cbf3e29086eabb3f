use crate::booking::context::use_booking;
use crate::domain::a007_food::api as food_api;
use crate::layout::global_context::use_app_context;
use crate::shared::format::format_money;
use contracts::domain::a007_food::aggregate::FoodItem;
use contracts::shared::booking_steps::{step_route, BookingRef};
use leptos::prelude::*;

/// Шаг 3: кинобар (можно пропустить — пустой выбор допустим)
#[component]
pub fn FoodStep(booking: BookingRef) -> impl IntoView {
    let ctx = use_app_context();
    let cart = use_booking();

    let (items, set_items) = signal(Vec::<FoodItem>::new());
    let (error, set_error) = signal(None::<String>);

    wasm_bindgen_futures::spawn_local(async move {
        match food_api::fetch_foods().await {
            Ok(list) => {
                let available: Vec<FoodItem> =
                    list.into_iter().filter(|f| f.is_available).collect();
                set_items.set(available);
            }
            Err(e) => set_error.set(Some(e)),
        }
    });

    let next_route = step_route(3, &booking);

    view! {
        <div class="booking-step">
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="food-cards">
                {move || items.get().into_iter().map(|food| {
                    let food_id = food.base.id;
                    let quantity = Signal::derive(move || {
                        cart.foods.get().get(&food_id).copied().unwrap_or(0)
                    });
                    view! {
                        <div class="food-card">
                            <div class="food-card__name">{food.base.name.clone()}</div>
                            <div class="food-card__price">{format_money(food.price)}</div>
                            <div class="food-card__controls">
                                <button
                                    class="button button--small"
                                    disabled=move || quantity.get() == 0
                                    on:click=move |_| {
                                        cart.set_food_quantity(
                                            food_id,
                                            quantity.get().saturating_sub(1),
                                        );
                                    }
                                >
                                    "−"
                                </button>
                                <span class="food-card__qty">{move || quantity.get()}</span>
                                <button
                                    class="button button--small"
                                    on:click=move |_| {
                                        cart.set_food_quantity(food_id, quantity.get() + 1);
                                    }
                                >
                                    "+"
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="booking-step__actions">
                <button
                    class="button button--primary"
                    on:click=move |_| ctx.navigate(&next_route)
                >
                    "Далее"
                </button>
            </div>
        </div>
    }
}
