use crate::shared::icons::icon;
use leptos::prelude::*;

/// Сворачиваемая панель фильтров со счётчиком активных условий
#[component]
pub fn FilterPanel(
    /// Развёрнута ли панель
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Количество активных фильтров (для бейджа)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Содержимое панели (поля формы)
    children: ChildrenFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header" on:click=toggle_expanded>
                <svg
                    width="16"
                    height="16"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }
                >
                    <polyline points="6 9 12 15 18 9"></polyline>
                </svg>
                {icon("filter")}
                <span class="filter-panel__title">"Фильтры"</span>
                {move || {
                    let count = active_filters_count.get();
                    if count > 0 {
                        view! {
                            <span class="badge badge--primary">{count}</span>
                        }
                        .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">{children()}</div>
            </div>
        </div>
    }
}
