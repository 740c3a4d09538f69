//! 认证模块
//!
//! 会话状态由核心库的 [`SessionStore`] 维护，这里只负责：
//! - 用信号承载会话，供守卫、侧边栏和用户菜单读取
//! - 在应用启动时执行一次身份检查
//! - 把登录 / 登出包装成界面可直接调用的函数

use crate::api::{Gateway, SignalSlot};
use crate::web::FetchTransport;
use crate::web::router::RouterService;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sakayhub_admin::{LoginError, Session, SessionStore};
use sakayhub_shared::UserIdentity;
use std::rc::Rc;

type Store = SessionStore<FetchTransport, SignalSlot<Session>, RouterService>;

/// 认证上下文
///
/// 会话信号只读暴露，所有写入都经过会话存储。
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
    store: StoredValue<Rc<Store>, LocalStorage>,
}

impl AuthContext {
    pub fn new(session: RwSignal<Session>, gateway: Rc<Gateway>, router: RouterService) -> Self {
        let store = SessionStore::new(gateway, SignalSlot(session), router);
        Self {
            session,
            store: StoredValue::new_local(Rc::new(store)),
        }
    }

    pub fn session(&self) -> Signal<Session> {
        self.session.into()
    }

    /// 当前登录的管理员（用于头部用户菜单）
    pub fn identity(&self) -> Signal<Option<UserIdentity>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.identity.clone()))
    }

    fn store(&self) -> Rc<Store> {
        self.store.get_value()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 向服务端查询当前身份，完成后 `loading` 变为 false，守卫才开始生效。
pub fn init_auth(ctx: &AuthContext) {
    let store = ctx.store();
    spawn_local(async move {
        store.initialize().await;
    });
}

/// 登录；成功后会话存储负责跳转到仪表盘
pub async fn login(ctx: AuthContext, username: String, password: String) -> Result<(), LoginError> {
    ctx.store().login(&username, &password).await
}

/// 注销
///
/// 无论服务端结果如何，本地身份都会被清除并跳转到登录页。
pub fn logout(ctx: AuthContext) {
    let store = ctx.store();
    spawn_local(async move {
        store.logout().await;
    });
}
