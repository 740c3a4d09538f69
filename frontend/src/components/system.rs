//! 系统设置：优惠码管理与 API 连接信息

use crate::api::use_api;
use crate::components::icons::*;
use crate::components::list_view::{EmptyRow, status_badge};
use crate::components::promo_dialog::{PromoDialog, use_promos};
use leptos::prelude::*;
use sakayhub_shared::HEADER_CSRF;
use sakayhub_shared::format::{format_date, status_label};

#[component]
fn PromoCodesCard() -> impl IntoView {
    let promos = use_promos();
    let codes = promos.codes();
    let is_empty = Signal::derive(move || codes.with(Vec::is_empty));

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 p-6 pb-2">
                    <div>
                        <h3 class="card-title gap-2"><Gift attr:class="h-5 w-5" /> "Promo Codes"</h3>
                        <p class="text-base-content/70 text-sm">"Discounts currently configured for riders and senders."</p>
                    </div>
                    <PromoDialog />
                </div>
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Code"</th>
                                <th>"Type"</th>
                                <th>"Value"</th>
                                <th class="hidden md:table-cell">"Usage"</th>
                                <th>"Status"</th>
                                <th class="hidden md:table-cell">"Expires"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <EmptyRow colspan=6 when=is_empty message="No promo codes yet." />
                            <For
                                each=move || codes.get()
                                key=|c| c.code.clone()
                                children=move |promo| {
                                    let expires = promo
                                        .expires
                                        .as_deref()
                                        .map_or_else(|| "No expiry".to_string(), format_date);
                                    view! {
                                        <tr>
                                            <td class="font-mono font-bold">{promo.code.clone()}</td>
                                            <td>{status_label(&promo.kind)}</td>
                                            <td>{promo.value.clone()}</td>
                                            <td class="hidden md:table-cell">{promo.usage()}</td>
                                            <td>{status_badge(&promo.status)}</td>
                                            <td class="hidden md:table-cell text-sm">{expires}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ApiSettingsCard() -> impl IntoView {
    let api = use_api();
    let base_url = api.base_url();
    let same_origin = base_url.starts_with('/');

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title gap-2"><Settings attr:class="h-5 w-5" /> "API Settings"</h3>
                <p class="text-base-content/70 text-sm">"Resolved once when the dashboard loads."</p>
                <div class="overflow-x-auto">
                    <table class="table">
                        <tbody>
                            <tr>
                                <th>"Base URL"</th>
                                <td class="font-mono text-sm">
                                    {base_url}
                                    <Show when=move || same_origin>
                                        <span class="badge badge-ghost ml-2">"same origin"</span>
                                    </Show>
                                </td>
                            </tr>
                            <tr>
                                <th>"Credentials"</th>
                                <td>"Session cookie (include)"</td>
                            </tr>
                            <tr>
                                <th>"CSRF header"</th>
                                <td class="font-mono text-sm">{HEADER_CSRF}</td>
                            </tr>
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SystemPage() -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-bold">"System"</h2>
            <p class="text-base-content/70 text-sm">"Platform configuration."</p>
        </div>
        <PromoCodesCard />
        <ApiSettingsCard />
    }
}
