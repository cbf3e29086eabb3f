use crate::booking::context::use_booking;
use crate::domain::a006_showtime::api as showtime_api;
use crate::domain::a007_food::api as food_api;
use crate::domain::a008_order::api as order_api;
use crate::layout::global_context::use_app_context;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use contracts::domain::a007_food::aggregate::FoodItem;
use contracts::domain::a008_order::aggregate::{CreateOrderDto, CreateOrderFoodDto};
use contracts::enums::payment_method::PaymentMethod;
use contracts::shared::booking_steps::{step_route, BookingRef};
use leptos::prelude::*;

/// Шаг 4: способ оплаты и создание заказа
#[component]
pub fn PaymentStep(booking: BookingRef) -> impl IntoView {
    let ctx = use_app_context();
    let cart = use_booking();

    let (ticket_price, set_ticket_price) = signal(None::<f64>);
    let (foods, set_foods) = signal(Vec::<FoodItem>::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let movie_id = booking.movie_id;
    let showtime_id = booking.showtime_id;
    wasm_bindgen_futures::spawn_local(async move {
        match showtime_api::fetch_showtimes_by_movie(movie_id).await {
            Ok(list) => {
                let price = list
                    .into_iter()
                    .find(|s| s.id == showtime_id)
                    .map(|s| s.price);
                set_ticket_price.set(price);
            }
            Err(e) => set_error.set(Some(e)),
        }
        match food_api::fetch_foods().await {
            Ok(list) => set_foods.set(list),
            Err(e) => log::error!("failed to load foods: {}", e),
        }
    });

    let tickets_total = move || {
        let count = cart.seats.get().len() as f64;
        ticket_price.get().map(|p| p * count)
    };

    let food_total = move || {
        let selected = cart.foods.get();
        let foods = foods.get();
        selected
            .iter()
            .filter_map(|(food_id, qty)| {
                foods
                    .iter()
                    .find(|f| f.base.id == *food_id)
                    .map(|f| f.price * f64::from(*qty))
            })
            .sum::<f64>()
    };

    let grand_total = move || tickets_total().map(|t| t + food_total());

    let submit = move || {
        let dto = CreateOrderDto {
            client_ref: cart.client_ref.get(),
            showtime_id,
            seats: cart.seats.get(),
            foods: cart
                .foods
                .get()
                .into_iter()
                .map(|(food_id, quantity)| CreateOrderFoodDto { food_id, quantity })
                .collect(),
            payment_method: cart.payment_method.get(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_submitting.set(true);
        let confirm_route = step_route(4, &booking);
        wasm_bindgen_futures::spawn_local(async move {
            match order_api::create_order(&dto).await {
                Ok(order) => {
                    cart.last_order.set(Some(order));
                    ctx.navigate(&confirm_route);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="booking-step">
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="booking-step__heading">
                {icon("credit-card")}
                <span>"Способ оплаты"</span>
            </div>
            <div class="payment-methods">
                {PaymentMethod::all().into_iter().map(|method| {
                    view! {
                        <label class="payment-methods__item">
                            <input
                                type="radio"
                                name="payment-method"
                                prop:checked=move || cart.payment_method.get() == method
                                on:change=move |_| cart.payment_method.set(method)
                            />
                            <span>{method.display_name()}</span>
                        </label>
                    }
                }).collect_view()}
            </div>

            <div class="payment-summary">
                <div class="payment-summary__row">
                    <span>{move || format!("Билеты ({})", cart.seats.get().len())}</span>
                    <span>
                        {move || tickets_total().map(format_money).unwrap_or_default()}
                    </span>
                </div>
                <div class="payment-summary__row">
                    <span>"Кинобар"</span>
                    <span>{move || format_money(food_total())}</span>
                </div>
                <div class="payment-summary__row payment-summary__row--total">
                    <span>"Итого"</span>
                    <span>
                        {move || grand_total().map(format_money).unwrap_or_default()}
                    </span>
                </div>
            </div>

            <div class="booking-step__actions">
                <button
                    class="button button--primary"
                    disabled=move || submitting.get() || cart.seats.get().is_empty()
                    on:click=move |_| submit()
                >
                    {move || if submitting.get() { "Оформление..." } else { "Оплатить" }}
                </button>
            </div>
        </div>
    }
}
