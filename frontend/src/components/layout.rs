//! 受保护页面的外壳：侧边栏导航 + 顶栏用户菜单

use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use sakayhub_admin::{AppRoute, NavSection};

fn nav_icon(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <LayoutDashboard attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::Users => view! { <UsersIcon attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::Drivers => view! { <Car attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::Applications => view! { <ClipboardCheck attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::Operations => view! { <Activity attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::Financial => view! { <Wallet attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::Support => view! { <LifeBuoy attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::Communication => view! { <Bell attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::System => view! { <Settings attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::Login | AppRoute::NotFound => ().into_any(),
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let router = use_router();
    let current = router.current_route();

    let sections = [
        NavSection::Overview,
        NavSection::Management,
        NavSection::Operations,
        NavSection::Communication,
        NavSection::System,
    ];

    view! {
        <aside class="w-64 min-h-full bg-base-100 border-r border-base-300">
            <div class="flex items-center gap-2 px-6 py-5">
                <Car attr:class="h-7 w-7 text-primary" />
                <span class="text-xl font-bold">"SakayHUB"</span>
            </div>
            <ul class="menu px-4 w-full">
                {sections
                    .into_iter()
                    .map(|section| {
                        let items: Vec<AppRoute> = AppRoute::nav_items()
                            .iter()
                            .filter(|(s, _)| *s == section)
                            .map(|(_, r)| *r)
                            .collect();
                        view! {
                            <li class="menu-title">{section.label()}</li>
                            {items
                                .into_iter()
                                .map(|route| {
                                    let class = Signal::derive(move || {
                                        if current.get() == route {
                                            "active".to_string()
                                        } else {
                                            String::new()
                                        }
                                    });
                                    view! {
                                        <li>
                                            <Link route=route class=class>
                                                {nav_icon(route)}
                                                {route.title()}
                                            </Link>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}

#[component]
fn UserMenu() -> impl IntoView {
    let auth = use_auth();
    let identity = auth.identity();

    let username = move || identity.get().map(|u| u.username).unwrap_or_default();
    let email = move || identity.get().map(|u| u.email).unwrap_or_default();
    let role = move || match identity.get() {
        Some(u) if u.is_superuser => "Super admin",
        Some(u) if u.is_staff => "Staff",
        _ => "Admin",
    };
    let initial = move || {
        username()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                <div class="avatar placeholder">
                    <div class="bg-primary text-primary-content w-8 rounded-full">
                        <span>{initial}</span>
                    </div>
                </div>
                <span class="hidden md:inline">{username}</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-56">
                <li class="menu-title">
                    <span>{email}</span>
                    <span class="text-xs opacity-60">{role}</span>
                </li>
                <li>
                    <a on:click=move |_| logout(auth) class="text-error">
                        <LogOut attr:class="h-4 w-4" />
                        "Log out"
                    </a>
                </li>
            </ul>
        </div>
    }
}

/// 受保护页面共用的布局
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let router = use_router();
    let title = move || router.current_route().get().title();

    view! {
        <div class="flex min-h-screen bg-base-200 font-sans">
            <Sidebar />
            <div class="flex-1 flex flex-col">
                <header class="navbar bg-base-100 border-b border-base-300 px-6">
                    <div class="flex-1">
                        <h2 class="text-lg font-semibold">{title}</h2>
                    </div>
                    <div class="flex-none">
                        <UserMenu />
                    </div>
                </header>
                <main class="flex-1 p-4 md:p-8 space-y-6">{children()}</main>
            </div>
        </div>
    }
}
