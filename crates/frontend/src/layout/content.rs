//! Контент-реестр: единственный источник правды для маппинга
//! активного маршрута на вьюху раздела.

use crate::booking::BookingPage;
use crate::dashboards::d400_sales_summary::ui::SalesSummaryDashboard;
use crate::domain::a001_movie::ui::list::MovieList;
use crate::domain::a002_actor::ui::ActorList;
use crate::domain::a003_director::ui::DirectorList;
use crate::domain::a004_producer::ui::ProducerList;
use crate::domain::a005_branch::ui::BranchList;
use crate::domain::a006_showtime::ui::ShowtimeList;
use crate::domain::a007_food::ui::FoodList;
use crate::domain::a008_order::ui::OrderList;
use crate::domain::a009_post::ui::PostList;
use crate::layout::global_context::use_app_context;
use crate::system::users::ui::UsersList;
use contracts::shared::booking_steps::BookingRef;
use leptos::prelude::*;

fn render_route(route: &str) -> AnyView {
    // Маршрут мастера: "booking/{movie}-{showtime}/{segment}"
    if let Some(rest) = route.strip_prefix("booking/") {
        if let Some((param, segment)) = rest.split_once('/') {
            if let Some(booking) = BookingRef::parse(param) {
                let segment = segment.to_string();
                return view! { <BookingPage booking=booking segment=segment /> }.into_any();
            }
        }
        log::warn!("malformed booking route: {}", route);
        return view! { <MovieList /> }.into_any();
    }

    match route {
        "a001_movie" => view! { <MovieList /> }.into_any(),
        "a002_actor" => view! { <ActorList /> }.into_any(),
        "a003_director" => view! { <DirectorList /> }.into_any(),
        "a004_producer" => view! { <ProducerList /> }.into_any(),
        "a005_branch" => view! { <BranchList /> }.into_any(),
        "a006_showtime" => view! { <ShowtimeList /> }.into_any(),
        "a007_food" => view! { <FoodList /> }.into_any(),
        "a008_order" => view! { <OrderList /> }.into_any(),
        "a009_post" => view! { <PostList /> }.into_any(),
        "d400_sales_summary" => view! { <SalesSummaryDashboard /> }.into_any(),
        "system_users" => view! { <UsersList /> }.into_any(),
        unknown => {
            log::warn!("unknown route: {}", unknown);
            view! { <MovieList /> }.into_any()
        }
    }
}

#[component]
pub fn Content() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="content-host">
            {move || render_route(&ctx.active_route.get())}
        </div>
    }
}
