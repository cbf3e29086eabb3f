//! Боковое меню с группами разделов

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (route, label, icon)
    admin_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Афиша",
            items: vec![
                ("a001_movie", "Фильмы", "film"),
                ("a006_showtime", "Сеансы", "calendar"),
                ("a009_post", "Новости", "newspaper"),
            ],
            admin_only: false,
        },
        MenuGroup {
            label: "Справочники",
            items: vec![
                ("a002_actor", "Актёры", "users"),
                ("a003_director", "Режиссёры", "users"),
                ("a004_producer", "Продюсеры", "users"),
                ("a005_branch", "Кинотеатры", "building"),
                ("a007_food", "Кинобар", "popcorn"),
            ],
            admin_only: false,
        },
        MenuGroup {
            label: "Продажи",
            items: vec![
                ("a008_order", "Заказы", "ticket"),
                ("d400_sales_summary", "Дашборд продаж", "bar-chart"),
            ],
            admin_only: false,
        },
        MenuGroup {
            label: "Система",
            items: vec![("system_users", "Пользователи", "settings")],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();

    // Админские группы скрываются, а не блокируются: доступ
    // всё равно проверяет бэкенд
    let visible_groups = move || {
        let is_admin = auth_state
            .get()
            .user_info
            .map(|u| u.is_admin)
            .unwrap_or(false);
        menu_groups()
            .into_iter()
            .filter(|g| !g.admin_only || is_admin)
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="sidebar">
            {move || {
                visible_groups()
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="sidebar__group">
                                <div class="sidebar__group-label">{group.label}</div>
                                {group
                                    .items
                                    .into_iter()
                                    .map(|(route, label, icon_name)| {
                                        view! {
                                            <button
                                                class="sidebar__item"
                                                class:sidebar__item--active=move || {
                                                    ctx.active_route.get() == route
                                                }
                                                on:click=move |_| ctx.navigate(route)
                                            >
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
