//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到 [`PromoDraft`] 的转换（校验由 shared 完成）

use leptos::prelude::*;
use sakayhub_shared::format::parse_day;
use sakayhub_shared::forms::{Audience, FieldError, PromoDraft, PromoKind};

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    // 基础信息
    pub code: RwSignal<String>,
    pub kind: RwSignal<Option<PromoKind>>,
    pub value: RwSignal<String>,
    pub description: RwSignal<String>,
    pub audience: RwSignal<Option<Audience>>,

    // 使用限制
    pub max_usage: RwSignal<String>,
    pub max_usage_per_user: RwSignal<String>,
    pub min_order_amount: RwSignal<String>,
    pub has_expiry: RwSignal<bool>,
    /// `<input type="date">` 的原始值
    pub expiry: RwSignal<String>,
    pub active: RwSignal<bool>,

    /// 最近一次提交的校验错误
    pub errors: RwSignal<Vec<FieldError>>,
}

impl FormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        let defaults = PromoDraft::default();
        Self {
            code: RwSignal::new(String::new()),
            kind: RwSignal::new(None),
            value: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            audience: RwSignal::new(None),
            max_usage: RwSignal::new(String::new()),
            max_usage_per_user: RwSignal::new(String::new()),
            min_order_amount: RwSignal::new(String::new()),
            has_expiry: RwSignal::new(defaults.has_expiry),
            expiry: RwSignal::new(String::new()),
            active: RwSignal::new(defaults.active),
            errors: RwSignal::new(Vec::new()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        let defaults = PromoDraft::default();
        self.code.set(String::new());
        self.kind.set(None);
        self.value.set(String::new());
        self.description.set(String::new());
        self.audience.set(None);
        self.max_usage.set(String::new());
        self.max_usage_per_user.set(String::new());
        self.min_order_amount.set(String::new());
        self.has_expiry.set(defaults.has_expiry);
        self.expiry.set(String::new());
        self.active.set(defaults.active);
        self.errors.set(Vec::new());
    }

    /// 将表单状态转换为草稿
    pub fn to_draft(&self) -> PromoDraft {
        PromoDraft {
            code: self.code.get(),
            kind: self.kind.get(),
            value: self.value.get(),
            description: self.description.get(),
            audience: self.audience.get(),
            max_usage: self.max_usage.get(),
            max_usage_per_user: self.max_usage_per_user.get(),
            min_order_amount: self.min_order_amount.get(),
            expiry: parse_day(&self.expiry.get()),
            has_expiry: self.has_expiry.get(),
            active: self.active.get(),
        }
    }

    /// 某个字段的第一条错误
    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || {
            errors.with(|list| {
                list.iter()
                    .find(|e| e.field == field)
                    .map(|e| e.message.clone())
            })
        })
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
