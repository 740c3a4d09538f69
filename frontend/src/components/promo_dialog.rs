mod details_form;
mod form_state;
mod limits_section;

use crate::components::fixtures::{PromoCode, promo_codes};
use crate::components::icons::Plus;
use crate::components::toast::use_toast;
use details_form::DetailsForm;
use form_state::FormState;
use leptos::prelude::*;
use limits_section::LimitsSection;
use sakayhub_shared::forms::FieldError;

/// 当前会话中的优惠码列表，财务页与系统页共用
#[derive(Clone, Copy)]
pub struct PromoBook {
    codes: RwSignal<Vec<PromoCode>>,
}

impl PromoBook {
    pub fn new() -> Self {
        Self {
            codes: RwSignal::new(promo_codes()),
        }
    }

    pub fn codes(&self) -> Signal<Vec<PromoCode>> {
        self.codes.into()
    }

    fn contains(&self, code: &str) -> bool {
        self.codes.with_untracked(|list| list.iter().any(|c| c.code == code))
    }

    fn add(&self, code: PromoCode) {
        self.codes.update(|list| list.insert(0, code));
    }
}

impl Default for PromoBook {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_promos() -> PromoBook {
    use_context::<PromoBook>().expect("PromoBook should be provided")
}

/// 新建优惠码对话框
///
/// 校验通过后新记录插入 [`PromoBook`] 的最前面。
#[component]
pub fn PromoDialog() -> impl IntoView {
    let toasts = use_toast();
    let book = use_promos();
    let (open, set_open) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let state = FormState::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let can_submit = move || state.to_draft().is_valid();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = state.to_draft();
        if let Err(errors) = draft.validate() {
            log::debug!("promo form rejected: {} field error(s)", errors.len());
            state.errors.set(errors);
            return;
        }

        let code = draft.normalized_code();
        if book.contains(&code) {
            state
                .errors
                .set(vec![FieldError::new("code", "This code already exists")]);
            return;
        }

        log::info!("promo code {} created", code);
        toasts.success("Promo code created", format!("{} is ready to use.", code));
        book.add(PromoCode::from_draft(&draft));

        set_open.set(false);
        state.reset();
    };

    view! {
        <button class="btn btn-primary gap-2" on:click=move |_| set_open.set(true)>
            <Plus attr:class="h-4 w-4" /> "Create Promo Code"
        </button>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">"Create Promo Code"</h3>
                <p class="py-4 text-base-content/70">"Set up a discount for riders and customers."</p>

                <form on:submit=on_submit class="space-y-4">
                    <DetailsForm state=state />
                    <div class="divider my-0"></div>
                    <LimitsSection state=state />

                    <div class="modal-action">
                        <button
                            type="button"
                            class="btn btn-ghost"
                            on:click=move |_| {
                                set_open.set(false);
                                state.reset();
                            }
                        >
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || !can_submit() class="btn btn-primary">
                            "Create"
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
