use crate::layout::global_context::use_app_context;
use contracts::shared::booking_steps::{step_route, step_state, BookingRef, BOOKING_STEPS};
use leptos::prelude::*;

/// Шаговый индикатор мастера бронирования.
/// Пройденные шаги кликабельны, текущий подсвечен, будущие неактивны.
#[component]
pub fn BookingStepper(
    /// Бронирование, к которому относятся шаги
    booking: BookingRef,
    /// Индекс текущего шага
    #[prop(into)]
    current_index: Signal<usize>,
) -> impl IntoView {
    let ctx = use_app_context();

    let steps = move || {
        let current = current_index.get();
        BOOKING_STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let state = step_state(i, current);
                let class = match (state.is_active, state.is_completed) {
                    (true, _) => "stepper__step stepper__step--active",
                    (_, true) => "stepper__step stepper__step--completed",
                    _ => "stepper__step",
                };
                let number = i + 1;
                let label = step.label;

                if state.is_clickable {
                    let route = step_route(i, &booking);
                    view! {
                        <button
                            class=class
                            on:click=move |_| ctx.navigate(&route)
                        >
                            <span class="stepper__number">{number}</span>
                            <span class="stepper__label">{label}</span>
                        </button>
                    }
                    .into_any()
                } else {
                    view! {
                        <span class=class>
                            <span class="stepper__number">{number}</span>
                            <span class="stepper__label">{label}</span>
                        </span>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    view! { <div class="stepper">{steps}</div> }
}
