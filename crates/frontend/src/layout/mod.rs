pub mod content;
pub mod global_context;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Каркас приложения.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = global_context::use_app_context();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <aside
                    class="app-sidebar"
                    class:app-sidebar--collapsed=move || !ctx.left_open.get()
                >
                    <sidebar::Sidebar />
                </aside>

                <main class="app-main">
                    <content::Content />
                </main>
            </div>
        </div>
    }
}
