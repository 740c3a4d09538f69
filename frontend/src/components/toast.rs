//! 通知提示
//!
//! 任何组件都可以通过 `use_toast()` 推送一条提示，3 秒后自动消失。

use crate::components::icons::{AlertCircle, CheckCircle, XIcon};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    title: String,
    message: String,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                title: title.into(),
                message: message.into(),
            })
        });

        let ctx = *self;
        Timeout::new(TOAST_DURATION_MS, move || ctx.dismiss(id)).forget();
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(ToastKind::Success, title, message);
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(ToastKind::Error, title, message);
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(ToastKind::Info, title, message);
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 提示容器，挂在应用根部
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toast();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || ctx.toasts.get()
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "alert alert-success shadow-lg",
                        ToastKind::Error => "alert alert-error shadow-lg",
                        ToastKind::Info => "alert alert-info shadow-lg",
                    };
                    view! {
                        <div class=class>
                            {match toast.kind {
                                ToastKind::Success => view! { <CheckCircle attr:class="h-5 w-5" /> }.into_any(),
                                _ => view! { <AlertCircle attr:class="h-5 w-5" /> }.into_any(),
                            }}
                            <div>
                                <h3 class="font-semibold">{toast.title}</h3>
                                <div class="text-sm">{toast.message}</div>
                            </div>
                            <button class="btn btn-ghost btn-xs btn-square" on:click=move |_| ctx.dismiss(id)>
                                <XIcon attr:class="h-4 w-4" />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
