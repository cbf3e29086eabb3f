use crate::dashboards::d400_sales_summary::api;
use crate::shared::components::{BarChart, StatCard};
use crate::shared::icons::icon;
use contracts::dashboards::d400_sales_summary::{
    genre_distribution, revenue_by_branch, revenue_by_month, sales_totals, SalesTotals,
};
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;

#[component]
pub fn SalesSummaryDashboard() -> impl IntoView {
    let (totals, set_totals) = signal(None::<SalesTotals>);
    let (by_month, set_by_month) = signal(Vec::<(String, f64)>::new());
    let (by_genre, set_by_genre) = signal(Vec::<(String, f64)>::new());
    let (by_branch, set_by_branch) = signal(Vec::<(String, f64)>::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_source_data().await {
                Ok(data) => {
                    set_totals.set(Some(sales_totals(&data.orders)));
                    set_by_month.set(revenue_by_month(&data.orders));
                    set_by_genre.set(
                        genre_distribution(&data.orders, &data.movies)
                            .into_iter()
                            .map(|(genre, tickets)| (genre, f64::from(tickets)))
                            .collect(),
                    );
                    set_by_branch.set(revenue_by_branch(&data.orders, &data.branches));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    fetch();

    view! {
        <div class="page dashboard-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Дашборд продаж"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        disabled=move || loading.get()
                        on:click=move |_| fetch()
                    >
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

            <div class="stat-cards">
                <StatCard
                    label="Выручка".to_string()
                    icon_name="bar-chart".to_string()
                    value=Signal::derive(move || totals.get().map(|t| t.revenue))
                    format=ValueFormat::rub()
                />
                <StatCard
                    label="Заказов".to_string()
                    icon_name="ticket".to_string()
                    value=Signal::derive(move || {
                        totals.get().map(|t| f64::from(t.orders_count))
                    })
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Продано билетов".to_string()
                    icon_name="armchair".to_string()
                    value=Signal::derive(move || {
                        totals.get().map(|t| f64::from(t.tickets_sold))
                    })
                    format=ValueFormat::Integer
                />
            </div>

            <div class="dashboard-charts">
                <BarChart
                    title="Выручка по месяцам".to_string()
                    rows=Signal::derive(move || by_month.get())
                    format=ValueFormat::rub()
                />
                <BarChart
                    title="Билеты по жанрам".to_string()
                    rows=Signal::derive(move || by_genre.get())
                    format=ValueFormat::Integer
                />
                <BarChart
                    title="Выручка по кинотеатрам".to_string()
                    rows=Signal::derive(move || by_branch.get())
                    format=ValueFormat::rub()
                />
            </div>
        </div>
    }
}
