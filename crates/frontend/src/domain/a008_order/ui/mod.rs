use super::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use contracts::domain::a008_order::aggregate::Order;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;

#[component]
pub fn OrderList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Order>::new());
    let (error, set_error) = signal(None::<String>);
    let (status_filter, set_status_filter) = signal(None::<OrderStatus>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_orders().await {
                Ok(list) => {
                    set_items.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let visible = move || {
        let orders = items.get();
        match status_filter.get() {
            Some(status) => orders
                .into_iter()
                .filter(|o| o.status == status)
                .collect::<Vec<_>>(),
            None => orders,
        }
    };

    let cancel = move |id: i32| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Отменить заказ №{}?", id))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::cancel_order(id).await {
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
                    <h1 class="header__title">"Заказы"</h1>
                </div>
                <div class="header__actions">
                    <select
                        class="form-field__input"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_status_filter.set(match value.as_str() {
                                "pending" => Some(OrderStatus::Pending),
                                "paid" => Some(OrderStatus::Paid),
                                "cancelled" => Some(OrderStatus::Cancelled),
                                _ => None,
                            });
                        }
                    >
                        <option value="">"Все статусы"</option>
                        <option value="pending">"Ожидает оплаты"</option>
                        <option value="paid">"Оплачен"</option>
                        <option value="cancelled">"Отменён"</option>
                    </select>
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

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"№"</th>
                            <th class="table__header-cell">"Создан"</th>
                            <th class="table__header-cell">"Фильм"</th>
                            <th class="table__header-cell">"Места"</th>
                            <th class="table__header-cell">"Кинобар"</th>
                            <th class="table__header-cell">"Сумма"</th>
                            <th class="table__header-cell">"Статус"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|order| {
                            let id = order.id;
                            let created = order
                                .created_at
                                .format("%Y-%m-%dT%H:%M")
                                .to_string();
                            let seats = order.seats.join(", ");
                            let food_line = order
                                .foods
                                .iter()
                                .map(|f| format!("{} ×{}", f.name, f.quantity))
                                .collect::<Vec<_>>()
                                .join(", ");
                            let cancellable = order.status == OrderStatus::Pending;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{id}</td>
                                    <td class="table__cell">{format_datetime(&created)}</td>
                                    <td class="table__cell">{order.movie_name.clone()}</td>
                                    <td class="table__cell">{seats}</td>
                                    <td class="table__cell">{food_line}</td>
                                    <td class="table__cell">{format_money(order.total)}</td>
                                    <td class="table__cell">
                                        <span class=order.status.badge_class()>
                                            {order.status.display_name()}
                                        </span>
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <Show when=move || cancellable>
                                            <button
                                                class="button button--small"
                                                on:click=move |_| cancel(id)
                                            >
                                                "Отменить"
                                            </button>
                                        </Show>
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
