//! 停用 / 恢复确认框
//!
//! 确认后发出一次变更请求，用服务端返回的实体就地替换表格中的那一行。

use crate::api::ApiContext;
use crate::components::list_view::ListHandle;
use crate::components::toast::ToastContext;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sakayhub_shared::format::status_label;
use sakayhub_shared::protocol::SuspendableResource;
use sakayhub_shared::{Identified, Suspendable};

/// 等待确认的操作
#[derive(Debug, Clone, PartialEq)]
pub struct SuspendPrompt<R> {
    pub row: R,
    pub name: String,
}

/// 发出停用 / 恢复请求并更新对应行
///
/// `noun` 用于提示文字，例如 "Driver"。
pub fn apply_suspension<R>(
    api: ApiContext,
    list: ListHandle<R>,
    toasts: ToastContext,
    noun: &'static str,
    prompt: SuspendPrompt<R>,
    busy: RwSignal<bool>,
) where
    R: SuspendableResource + Send + Sync,
{
    let gateway = api.gateway();
    busy.set(true);
    spawn_local(async move {
        match gateway.set_suspension(&prompt.row).await {
            Ok(updated) => {
                let title = if updated.is_suspended() {
                    format!("{} suspended", noun)
                } else {
                    format!("{} unsuspended", noun)
                };
                let message = format!("{} is now {}.", prompt.name, status_label(updated.status()).to_lowercase());
                if !list.patch(updated) {
                    log::warn!("{} {} left the current page before the update landed", noun, prompt.row.id());
                }
                toasts.success(title, message);
            }
            Err(e) => {
                toasts.error(format!("Could not update {}", noun.to_lowercase()), e.user_message());
            }
        }
        let _ = busy.try_set(false);
    });
}

#[component]
pub fn SuspendDialog<R>(
    /// 当前等待确认的操作；`None` 时对话框关闭
    prompt: RwSignal<Option<SuspendPrompt<R>>>,
    noun: &'static str,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<SuspendPrompt<R>>,
) -> impl IntoView
where
    R: SuspendableResource + Send + Sync,
{
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if prompt.with(Option::is_some) {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let unsuspend = move || prompt.with(|p| p.as_ref().is_some_and(|p| p.row.is_suspended()));
    let name = move || prompt.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default());

    let title = move || {
        if unsuspend() {
            format!("Unsuspend {}", noun)
        } else {
            format!("Suspend {}", noun)
        }
    };
    let description = move || {
        if unsuspend() {
            format!(
                "Are you sure you want to unsuspend {}? They will regain access to the platform and be able to use all services again.",
                name()
            )
        } else {
            format!(
                "Are you sure you want to suspend {}? They will lose access to the platform until unsuspended.",
                name()
            )
        }
    };

    let confirm = move |_| {
        if let Some(p) = prompt.get_untracked() {
            on_confirm.run(p);
        }
        prompt.set(None);
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| prompt.set(None)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{title}</h3>
                <p class="py-4 text-base-content/70">{description}</p>
                <div class="modal-action">
                    <button class="btn btn-ghost" on:click=move |_| prompt.set(None)>
                        "Cancel"
                    </button>
                    <button
                        class=move || if unsuspend() { "btn btn-primary" } else { "btn btn-error" }
                        disabled=move || busy.get()
                        on:click=confirm
                    >
                        {move || if unsuspend() { "Unsuspend" } else { "Suspend" }}
                    </button>
                </div>
            </div>
        </dialog>
    }
}
