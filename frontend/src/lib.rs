//! SakayHUB 管理后台前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::router`: 路由服务（核心引擎），守卫逻辑来自核心库
//! - `api`: 网关上下文
//! - `auth`: 会话状态管理
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod applications;
    pub mod communication;
    pub mod dashboard;
    pub mod drivers;
    mod export_dialog;
    pub mod financial;
    mod fixtures;
    mod icons;
    pub mod layout;
    mod list_view;
    pub mod login;
    pub mod operations;
    pub mod promo_dialog;
    pub mod support;
    mod suspend_dialog;
    pub mod system;
    pub mod toast;
    pub mod users;
    mod verification_dialog;
}
mod web;

use crate::api::ApiContext;
use crate::auth::{AuthContext, init_auth};
use crate::components::applications::ApplicationsPage;
use crate::components::communication::CommunicationPage;
use crate::components::dashboard::DashboardPage;
use crate::components::drivers::DriversPage;
use crate::components::financial::FinancialPage;
use crate::components::layout::Shell;
use crate::components::login::LoginPage;
use crate::components::operations::OperationsPage;
use crate::components::promo_dialog::PromoBook;
use crate::components::support::SupportPage;
use crate::components::system::SystemPage;
use crate::components::toast::{ToastContext, ToastHost};
use crate::components::users::UsersPage;
use crate::web::FetchTransport;
use crate::web::router::{Link, Router, RouterOutlet, create_router};

use leptos::prelude::*;
use sakayhub_admin::{ApiConfig, ApiGateway, AppRoute, Session};
use std::rc::Rc;

/// 受保护页面的内容部分，外层由 `Shell` 提供侧边栏与头部
fn page_view(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Users => view! { <UsersPage /> }.into_any(),
        AppRoute::Drivers => view! { <DriversPage /> }.into_any(),
        AppRoute::Applications => view! { <ApplicationsPage /> }.into_any(),
        AppRoute::Operations => view! { <OperationsPage /> }.into_any(),
        AppRoute::Financial => view! { <FinancialPage /> }.into_any(),
        AppRoute::Support => view! { <SupportPage /> }.into_any(),
        AppRoute::Communication => view! { <CommunicationPage /> }.into_any(),
        AppRoute::System => view! { <SystemPage /> }.into_any(),
        AppRoute::Login | AppRoute::NotFound => ().into_any(),
    }
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center space-y-4">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl">"Page not found"</p>
                    <Link route=AppRoute::Dashboard class="btn btn-primary">
                        "Back to dashboard"
                    </Link>
                </div>
            </div>
        }
        .into_any(),
        page => view! { <Shell>{page_view(page)}</Shell> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话信号，初始为加载中
    let session = RwSignal::new(Session::default());

    // 2. 路由服务：注入会话信号实现守卫（解耦！）
    let router = create_router(session.into());

    // 3. 网关：API 地址在启动时解析一次
    let hostname = web_sys::window().and_then(|w| w.location().hostname().ok());
    let config = ApiConfig::from_build_env(hostname.as_deref());
    log::info!("SakayHUB admin starting, API base {}", config.base_url());
    let gateway = Rc::new(ApiGateway::new(FetchTransport, config));
    provide_context(ApiContext::new(gateway.clone()));

    // 4. 认证上下文持有会话存储，导航通过路由服务完成
    let auth_ctx = AuthContext::new(session, gateway, router);
    provide_context(auth_ctx);
    provide_context(ToastContext::new());
    provide_context(PromoBook::new());

    // 5. 首次身份检查
    init_auth(&auth_ctx);

    view! {
        <Router router=router>
            <RouterOutlet matcher=route_matcher />
            <ToastHost />
        </Router>
    }
}
