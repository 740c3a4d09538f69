//! 使用限制与有效期
//!
//! 有效期输入只在开启 "Set expiry date" 时显示。

use leptos::prelude::*;

use crate::components::list_view::FieldHint;
use super::form_state::FormState;

#[component]
pub fn LimitsSection(state: FormState) -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-4">
            <div class="form-control">
                <label class="label">
                    <span class="label-text">"Total uses"</span>
                </label>
                <input type="number" min="1"
                    placeholder="Unlimited"
                    class="input input-bordered w-full"
                    prop:value=move || state.max_usage.get()
                    on:input=move |ev| state.max_usage.set(event_target_value(&ev))
                />
                <FieldHint error=state.error_for("max_usage") />
            </div>
            <div class="form-control">
                <label class="label">
                    <span class="label-text">"Uses per user"</span>
                </label>
                <input type="number" min="1"
                    placeholder="Unlimited"
                    class="input input-bordered w-full"
                    prop:value=move || state.max_usage_per_user.get()
                    on:input=move |ev| state.max_usage_per_user.set(event_target_value(&ev))
                />
                <FieldHint error=state.error_for("max_usage_per_user") />
            </div>
            <div class="form-control">
                <label class="label">
                    <span class="label-text">"Min. order ($)"</span>
                </label>
                <input type="number" min="0" step="any"
                    placeholder="0"
                    class="input input-bordered w-full"
                    prop:value=move || state.min_order_amount.get()
                    on:input=move |ev| state.min_order_amount.set(event_target_value(&ev))
                />
                <FieldHint error=state.error_for("min_order_amount") />
            </div>
        </div>

        <div class="form-control">
            <label class="label cursor-pointer">
                <span class="label-text font-bold">"Set expiry date"</span>
                <input type="checkbox" class="toggle toggle-primary"
                    prop:checked=move || state.has_expiry.get()
                    on:change=move |ev| state.has_expiry.set(event_target_checked(&ev))
                />
            </label>
        </div>

        {move || if state.has_expiry.get() {
            view! {
                <div class="form-control bg-base-200 p-4 rounded-lg">
                    <label class="label">
                        <span class="label-text">"Expires on"</span>
                    </label>
                    <input type="date"
                        class="input input-bordered w-full"
                        prop:value=move || state.expiry.get()
                        on:input=move |ev| state.expiry.set(event_target_value(&ev))
                    />
                    <FieldHint error=state.error_for("expiry") />
                </div>
            }.into_any()
        } else {
            view! { <></> }.into_any()
        }}

        <div class="form-control">
            <label class="label cursor-pointer">
                <span class="label-text">"Activate immediately"</span>
                <input type="checkbox" class="toggle toggle-success"
                    prop:checked=move || state.active.get()
                    on:change=move |ev| state.active.set(event_target_checked(&ev))
                />
            </label>
        </div>
    }
}
