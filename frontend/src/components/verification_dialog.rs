//! 司机入驻申请审核框
//!
//! 后端尚未提供审核接口，批准 / 驳回只在本地给出提示，不修改列表。

use crate::components::icons::{Car, CheckCircle, XIcon};
use crate::components::list_view::status_badge;
use crate::components::toast::use_toast;
use leptos::prelude::*;
use sakayhub_shared::DriverApplication;
use sakayhub_shared::format::{format_date, status_label};

#[component]
fn Detail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <div class="text-sm text-base-content/60">{label}</div>
            <div class="font-medium">{value}</div>
        </div>
    }
}

#[component]
pub fn VerificationDialog(application: RwSignal<Option<DriverApplication>>) -> impl IntoView {
    let toasts = use_toast();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if application.with(Option::is_some) {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let approve = move |_| {
        if let Some(app) = application.get_untracked() {
            toasts.success(
                "Driver approved",
                format!("{} has been verified and approved as a driver.", app.name),
            );
        }
        application.set(None);
    };
    let reject = move |_| {
        if let Some(app) = application.get_untracked() {
            toasts.error(
                "Application rejected",
                format!("Application for {} has been rejected.", app.name),
            );
        }
        application.set(None);
    };

    let body = move || {
        application.get().map(|app| {
            view! {
                <div class="flex items-start justify-between">
                    <div>
                        <h3 class="text-xl font-semibold">{app.name.clone()}</h3>
                        <p class="text-base-content/60">{app.email.clone()}</p>
                    </div>
                    {status_badge(&app.status)}
                </div>
                <div class="divider"></div>
                <div class="grid grid-cols-2 gap-4">
                    <Detail label="Phone" value=app.phone.clone() />
                    <Detail label="Applied" value=format_date(&app.applied_at) />
                    <Detail label="Vehicle type" value=status_label(&app.vehicle_type) />
                    <Detail label="License number" value=app.license_number.clone() />
                </div>
            }
        })
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| application.set(None)>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg flex items-center gap-2">
                    <Car attr:class="h-5 w-5" /> "Driver Application Verification"
                </h3>
                <p class="py-2 text-base-content/70">
                    "Review all application details before approving."
                </p>
                <div class="space-y-4 py-2">{body}</div>
                <div class="modal-action">
                    <button class="btn btn-ghost" on:click=move |_| application.set(None)>"Close"</button>
                    <button class="btn btn-error btn-outline gap-2" on:click=reject>
                        <XIcon attr:class="h-4 w-4" /> "Reject"
                    </button>
                    <button class="btn btn-success gap-2" on:click=approve>
                        <CheckCircle attr:class="h-4 w-4" /> "Approve"
                    </button>
                </div>
            </div>
        </dialog>
    }
}
