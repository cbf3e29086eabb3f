use crate::shared::format::format_value;
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;

/// Ширина полосы в процентах от максимума серии
fn width_percent(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        (value / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Горизонтальная столбиковая диаграмма: подпись, полоса, значение.
/// Ширина полосы нормируется на максимум серии.
#[component]
pub fn BarChart(
    /// Заголовок диаграммы
    title: String,
    /// Пары (подпись, значение) в порядке отображения
    #[prop(into)]
    rows: Signal<Vec<(String, f64)>>,
    /// Формат вывода значения
    format: ValueFormat,
) -> impl IntoView {
    // StoredValue, чтобы замыкание bars было Copy для <Show>
    let format = StoredValue::new(format);
    let bars = move || {
        let rows = rows.get();
        let max = rows
            .iter()
            .map(|(_, v)| *v)
            .fold(0.0_f64, f64::max);

        rows.into_iter()
            .map(|(label, value)| {
                let percent = width_percent(value, max);
                let formatted = format.with_value(|f| format_value(value, f));
                let hint = label.clone();
                view! {
                    <div class="bar-chart__row">
                        <div class="bar-chart__label" title=hint>{label}</div>
                        <div class="bar-chart__track">
                            <div
                                class="bar-chart__bar"
                                style=format!("width: {:.1}%", percent)
                            ></div>
                        </div>
                        <div class="bar-chart__value">{formatted}</div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="bar-chart">
            <div class="bar-chart__title">{title}</div>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <div class="bar-chart__empty">"Нет данных"</div> }
            >
                <div class="bar-chart__rows">{bars}</div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_normalized_to_series_max() {
        assert_eq!(width_percent(50.0, 200.0), 25.0);
        assert_eq!(width_percent(200.0, 200.0), 100.0);
    }

    #[test]
    fn zero_or_negative_max_gives_empty_bar() {
        assert_eq!(width_percent(10.0, 0.0), 0.0);
        assert_eq!(width_percent(10.0, -1.0), 0.0);
    }
}
