use crate::api::use_api;
use crate::components::icons::*;
use crate::components::list_view::{
    EmptyRow, Pagination, PhaseBanner, SearchBox, StatusFilterMenu, status_badge, use_paginated,
};
use crate::components::suspend_dialog::{SuspendDialog, SuspendPrompt, apply_suspension};
use crate::components::toast::use_toast;
use leptos::prelude::*;
use sakayhub_shared::CustomerAccount;
use sakayhub_shared::Suspendable;
use sakayhub_shared::filter::StatusFilter;
use sakayhub_shared::format::{format_count, format_date, format_money};

const USER_STATUSES: &[&str] = &["active", "suspended", "pending"];

/// 乘客账号列表
#[component]
pub fn UsersPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toast();
    let list = use_paginated::<CustomerAccount>();

    // 状态过滤只作用于当前页
    let filter = RwSignal::new(StatusFilter::default());
    let visible = move || {
        let filter = filter.get();
        list.items()
            .into_iter()
            .filter(|u| filter.matches(&u.status))
            .collect::<Vec<_>>()
    };

    let prompt = RwSignal::new(Option::<SuspendPrompt<CustomerAccount>>::None);
    let busy = RwSignal::new(false);
    let on_confirm = move |p: SuspendPrompt<CustomerAccount>| {
        apply_suspension(api, list, toasts, "User", p, busy);
    };

    let is_empty = Signal::derive(move || !list.state.with(|s| s.is_loading()) && visible().is_empty());

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 p-6 pb-2">
                    <div>
                        <h3 class="card-title">"Customers"</h3>
                        <p class="text-base-content/70 text-sm">"Riders and senders registered on the platform."</p>
                    </div>
                    <div class="flex items-center gap-2">
                        <SearchBox
                            value=list.search()
                            on_input=move |term| list.set_search(term)
                            placeholder="Search by name, email or phone"
                        />
                        <StatusFilterMenu filter=filter options=USER_STATUSES />
                    </div>
                </div>

                <PhaseBanner phase=list.phase() />

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Customer"</th>
                                <th class="hidden md:table-cell">"Phone"</th>
                                <th>"Status"</th>
                                <th class="hidden md:table-cell">"KYC"</th>
                                <th class="hidden lg:table-cell">"Rides"</th>
                                <th class="hidden lg:table-cell">"Total spent"</th>
                                <th class="hidden lg:table-cell">"Joined"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <EmptyRow colspan=8 when=is_empty message="No customers match your filters." />
                            <For
                                each=visible
                                key=|u| (u.id, u.status.clone())
                                children=move |user| {
                                    let suspended = user.is_suspended();
                                    let row = user.clone();
                                    let open = move |_| {
                                        prompt.set(Some(SuspendPrompt {
                                            name: row.name.clone(),
                                            row: row.clone(),
                                        }))
                                    };
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="font-bold">{user.name.clone()}</div>
                                                <div class="text-sm opacity-60">{user.email.clone()}</div>
                                            </td>
                                            <td class="hidden md:table-cell">{user.phone.clone()}</td>
                                            <td>{status_badge(&user.status)}</td>
                                            <td class="hidden md:table-cell">{status_badge(&user.kyc_status)}</td>
                                            <td class="hidden lg:table-cell">{format_count(user.total_rides)}</td>
                                            <td class="hidden lg:table-cell">{format_money(&user.total_spent)}</td>
                                            <td class="hidden lg:table-cell">{format_date(&user.join_date)}</td>
                                            <td>
                                                <button
                                                    class=if suspended { "btn btn-ghost btn-sm text-success" } else { "btn btn-ghost btn-sm text-error" }
                                                    disabled=move || busy.get()
                                                    on:click=open
                                                >
                                                    {if suspended {
                                                        view! { <CheckCircle attr:class="h-4 w-4" /> "Unsuspend" }.into_any()
                                                    } else {
                                                        view! { <Ban attr:class="h-4 w-4" /> "Suspend" }.into_any()
                                                    }}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <Pagination pager=list.pager() on_change=move |p| list.set_page(p) />
            </div>
        </div>

        <SuspendDialog prompt=prompt noun="User" busy=busy on_confirm=on_confirm />
    }
}
