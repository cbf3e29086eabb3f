use crate::booking::context::use_booking;
use crate::layout::global_context::{use_app_context, DEFAULT_ROUTE};
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Шаг 5: подтверждение — чек созданного заказа
#[component]
pub fn ConfirmStep() -> impl IntoView {
    let ctx = use_app_context();
    let cart = use_booking();

    let finish = move || {
        cart.reset();
        ctx.navigate(DEFAULT_ROUTE);
    };

    view! {
        <div class="booking-step">
            {move || match cart.last_order.get() {
                Some(order) => {
                    let seats = order.seats.join(", ");
                    let food_lines = order
                        .foods
                        .iter()
                        .map(|line| {
                            format!(
                                "{} ×{} — {}",
                                line.name,
                                line.quantity,
                                format_money(line.price * f64::from(line.quantity)),
                            )
                        })
                        .collect::<Vec<_>>();
                    view! {
                        <div class="order-receipt">
                            <div class="order-receipt__icon">{icon("check")}</div>
                            <h2 class="order-receipt__title">
                                {format!("Заказ №{} оформлен", order.id)}
                            </h2>
                            <div class="order-receipt__row">
                                <span>"Фильм"</span>
                                <span>{order.movie_name.clone()}</span>
                            </div>
                            <div class="order-receipt__row">
                                <span>"Места"</span>
                                <span>{seats}</span>
                            </div>
                            {food_lines.into_iter().map(|line| view! {
                                <div class="order-receipt__row">
                                    <span>"Кинобар"</span>
                                    <span>{line}</span>
                                </div>
                            }).collect_view()}
                            <div class="order-receipt__row order-receipt__row--total">
                                <span>"Итого"</span>
                                <span>{format_money(order.total)}</span>
                            </div>
                            <div class="order-receipt__row">
                                <span>"Статус"</span>
                                <span class=order.status.badge_class()>
                                    {order.status.display_name()}
                                </span>
                            </div>
                        </div>
                    }.into_any()
                }
                // Прямой заход на /confirm без оформленного заказа
                None => view! {
                    <div class="booking-step__empty">
                        "Заказ не найден. Начните бронирование с выбора сеанса."
                    </div>
                }.into_any(),
            }}

            <div class="booking-step__actions">
                <button class="button button--primary" on:click=move |_| finish()>
                    "Вернуться к афише"
                </button>
            </div>
        </div>
    }
}
