//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程，
//! 验证部分委托给核心库的守卫。

use leptos::prelude::*;
use sakayhub_admin::guard::{self, GuardOutcome};
use sakayhub_admin::{AppRoute, Navigator, Session};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn set_document_title(route: AppRoute) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} · SakayHUB Admin", route.title()));
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 会话信号由外部注入，守卫在每次导航和会话变化时执行。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    session: Signal<Session>,
}

impl RouterService {
    fn new(session: Signal<Session>) -> Self {
        // 1. 初始化当前路由（从 URL 解析）
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            session,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 加载中时先切换到目标路由，由出口组件渲染空白，
    /// 会话确定后再由 `setup_guard_effect` 重新判定。
    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let session = self.session.get_untracked();
        let destination = match guard::evaluate(target, &session) {
            GuardOutcome::Redirect(redirect) => {
                log::info!("[Router] {} blocked, redirecting to {}", target, redirect);
                redirect
            }
            GuardOutcome::Pending | GuardOutcome::Render => target,
        };

        if use_push {
            push_history_state(destination.to_path());
        } else {
            replace_history_state(destination.to_path());
        }
        set_document_title(destination);
        self.set_route.set(destination);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            // popstate 时也执行守卫逻辑，重定向用 replace 避免历史循环
            router.navigate_to_route(target, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话变化时重新执行当前路由的守卫
    fn setup_guard_effect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let session = self.session;

        Effect::new(move |_| {
            let session = session.get();
            let route = current_route.get_untracked();

            if let GuardOutcome::Redirect(redirect) = guard::evaluate(route, &session) {
                log::info!(
                    "[Router] Session changed, redirecting from {} to {}",
                    route,
                    redirect
                );
                replace_history_state(redirect.to_path());
                set_document_title(redirect);
                set_route.set(redirect);
            }
        });
    }
}

impl Navigator for RouterService {
    fn navigate(&self, route: AppRoute, replace: bool) {
        self.navigate_to_route(route, !replace);
    }
}

/// 创建路由服务并初始化监听器
///
/// 会话存储需要持有导航器，所以路由服务先于 Router 组件创建。
pub fn create_router(session: Signal<Session>) -> RouterService {
    let router = RouterService::new(session);
    router.init_popstate_listener();
    router.setup_guard_effect();
    set_document_title(router.current_route.get_untracked());
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 已创建的路由服务
    router: RouterService,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_context(router);
    children()
}

/// 路由出口组件
///
/// 守卫通过时渲染当前路由；加载中或等待重定向时什么也不渲染。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let session = router.session;

    move || {
        let current = router.current_route().get();
        match guard::evaluate(current, &session.get()) {
            GuardOutcome::Render => matcher(current),
            GuardOutcome::Pending | GuardOutcome::Redirect(_) => ().into_any(),
        }
    }
}

/// 站内链接，拦截点击改走 History API
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(optional, into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to_route(route, true);
    };

    view! {
        <a href=route.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
