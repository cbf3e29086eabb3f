use crate::booking::context::BookingContext;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Синхронизация маршрута с URL: один раз при создании компонента
    ctx.init_router_integration();

    view! { <Shell /> }
}

#[component]
fn AppGate() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(BookingContext::new());

    view! {
        <AuthProvider>
            <AppGate />
        </AuthProvider>
    }
}
