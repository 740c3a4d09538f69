//! 优惠码基础信息：代码、类型、数值、说明与目标人群

use leptos::prelude::*;
use sakayhub_shared::forms::{Audience, PromoKind};

use crate::components::list_view::FieldHint;
use super::form_state::FormState;

#[component]
pub fn DetailsForm(state: FormState) -> impl IntoView {
    let value_label = move || match state.kind.get() {
        Some(PromoKind::Discount) => "Discount (%)",
        Some(PromoKind::Fixed) | Some(PromoKind::Referral) => "Amount ($)",
        Some(PromoKind::FreeRide) => "Max ride value ($)",
        None => "Value",
    };

    view! {
        <div class="grid grid-cols-2 gap-4">
            <div class="form-control">
                <label for="promo_code" class="label">
                    <span class="label-text">"Promo code"</span>
                </label>
                <input id="promo_code" required
                    type="text"
                    placeholder="SAKAY20"
                    class="input input-bordered w-full uppercase"
                    on:input=move |ev| state.code.set(event_target_value(&ev))
                    prop:value=move || state.code.get()
                />
                <FieldHint error=state.error_for("code") />
            </div>
            <div class="form-control">
                <label for="promo_kind" class="label">
                    <span class="label-text">"Promo type"</span>
                </label>
                <select id="promo_kind"
                    class="select select-bordered w-full"
                    on:change=move |ev| state.kind.set(PromoKind::from_value(&event_target_value(&ev)))
                >
                    <option value="" selected=move || state.kind.get().is_none()>"Select type"</option>
                    {PromoKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <option value=kind.value() selected=move || state.kind.get() == Some(kind)>
                                    {kind.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <FieldHint error=state.error_for("kind") />
            </div>
        </div>

        <div class="grid grid-cols-2 gap-4">
            <div class="form-control">
                <label for="promo_value" class="label">
                    <span class="label-text">{value_label}</span>
                </label>
                <input id="promo_value" required
                    type="number"
                    min="0"
                    step="any"
                    class="input input-bordered w-full"
                    on:input=move |ev| state.value.set(event_target_value(&ev))
                    prop:value=move || state.value.get()
                />
                <FieldHint error=state.error_for("value") />
            </div>
            <div class="form-control">
                <label for="promo_audience" class="label">
                    <span class="label-text">"Target audience"</span>
                </label>
                <select id="promo_audience"
                    class="select select-bordered w-full"
                    on:change=move |ev| state.audience.set(Audience::from_value(&event_target_value(&ev)))
                >
                    <option value="" selected=move || state.audience.get().is_none()>"Everyone"</option>
                    {Audience::ALL
                        .into_iter()
                        .map(|audience| {
                            view! {
                                <option value=audience.value() selected=move || state.audience.get() == Some(audience)>
                                    {audience.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>

        <div class="form-control">
            <label for="promo_description" class="label">
                <span class="label-text">"Description (optional)"</span>
            </label>
            <textarea id="promo_description"
                class="textarea textarea-bordered w-full"
                placeholder="20% off for new riders"
                on:input=move |ev| state.description.set(event_target_value(&ev))
                prop:value=move || state.description.get()
            ></textarea>
        </div>
    }
}
