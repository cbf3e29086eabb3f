use crate::shared::format::format_value;
use crate::shared::icons::icon;
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;

/// Карточка показателя для дашборда
#[component]
pub fn StatCard(
    /// Подпись над значением
    label: String,
    /// Имя иконки из icon()
    icon_name: String,
    /// Значение (None = данные ещё не загружены)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// Формат вывода значения
    format: ValueFormat,
    /// Подзаголовок под значением
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format),
        None => "\u{2014}".to_string(),
    };

    let subtitle_view = move || {
        subtitle
            .get()
            .map(|s| view! { <div class="stat-card__subtitle">{s}</div> })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
