//! API 上下文
//!
//! 核心库的网关与分页资源都通过 [`Slot`] 写状态，这里用响应式信号实现它，
//! 并把唯一的网关实例放进 Context 供所有页面共享。

use crate::web::FetchTransport;
use leptos::prelude::*;
use sakayhub_admin::{ApiGateway, Slot};
use std::rc::Rc;

/// 浏览器中使用的网关类型
pub type Gateway = ApiGateway<FetchTransport>;

/// 以 `RwSignal` 作为存储的 [`Slot`]
///
/// 信号被释放（视图已卸载）后读取返回默认值、写入被忽略。
pub struct SignalSlot<T: 'static>(pub RwSignal<T>);

impl<T: 'static> Clone for SignalSlot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalSlot<T> {}

impl<T> Slot<T> for SignalSlot<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn snapshot(&self) -> T {
        self.0.try_get_untracked().unwrap_or_default()
    }

    fn replace(&self, value: T) {
        let _ = self.0.try_set(value);
    }
}

/// 网关上下文
///
/// 网关持有 `Rc`，只能放在本地存储里；上下文本身是 `Copy` 的句柄。
#[derive(Clone, Copy)]
pub struct ApiContext {
    gateway: StoredValue<Rc<Gateway>, LocalStorage>,
}

impl ApiContext {
    pub fn new(gateway: Rc<Gateway>) -> Self {
        Self {
            gateway: StoredValue::new_local(gateway),
        }
    }

    pub fn gateway(&self) -> Rc<Gateway> {
        self.gateway.get_value()
    }

    /// 当前生效的 API 根地址，用于系统设置页展示
    pub fn base_url(&self) -> String {
        self.gateway
            .with_value(|g| g.config().base_url().to_string())
    }
}

/// 从 Context 获取网关上下文
pub fn use_api() -> ApiContext {
    use_context::<ApiContext>().expect("ApiContext should be provided")
}
