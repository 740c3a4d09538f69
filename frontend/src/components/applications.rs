use crate::components::icons::*;
use crate::components::list_view::{
    EmptyRow, Pagination, PhaseBanner, SearchBox, StatCard, StatusFilterMenu, status_badge,
    use_paginated, use_widget, widget_count,
};
use crate::components::verification_dialog::VerificationDialog;
use leptos::prelude::*;
use sakayhub_shared::filter::StatusFilter;
use sakayhub_shared::format::{format_date, status_label};
use sakayhub_shared::{ApplicationStats, DriverApplication};

const APPLICATION_STATUSES: &[&str] = &["pending", "under_review", "approved", "rejected"];

/// 司机入驻申请
#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let list = use_paginated::<DriverApplication>();
    let stats = use_widget::<ApplicationStats>();

    let filter = RwSignal::new(StatusFilter::default());
    let visible = move || {
        let filter = filter.get();
        list.items()
            .into_iter()
            .filter(|a| filter.matches(&a.status))
            .collect::<Vec<_>>()
    };
    let is_empty = Signal::derive(move || !list.state.with(|s| s.is_loading()) && visible().is_empty());

    let reviewing = RwSignal::new(Option::<DriverApplication>::None);

    view! {
        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <StatCard title="Pending" value=widget_count(stats, |s| s.pending) hint="Awaiting first review">
                <ClipboardCheck attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Under Review" value=widget_count(stats, |s| s.under_review) hint="Documents being checked">
                <Search attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Approved Today" value=widget_count(stats, |s| s.approved_today) hint="New drivers">
                <CheckCircle attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="This Month" value=widget_count(stats, |s| s.total_month) hint="Applications received">
                <UsersIcon attr:class="h-8 w-8" />
            </StatCard>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 p-6 pb-2">
                    <div>
                        <h3 class="card-title">"Driver Applications"</h3>
                        <p class="text-base-content/70 text-sm">"Review new drivers before they can accept trips."</p>
                    </div>
                    <div class="flex items-center gap-2">
                        <SearchBox
                            value=list.search()
                            on_input=move |term| list.set_search(term)
                            placeholder="Search applicants"
                        />
                        <StatusFilterMenu filter=filter options=APPLICATION_STATUSES />
                    </div>
                </div>

                <PhaseBanner phase=list.phase() />

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Applicant"</th>
                                <th class="hidden md:table-cell">"Vehicle"</th>
                                <th class="hidden md:table-cell">"License No."</th>
                                <th class="hidden lg:table-cell">"Applied"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <EmptyRow colspan=6 when=is_empty message="No applications match your filters." />
                            <For
                                each=visible
                                key=|a| (a.id, a.status.clone())
                                children=move |app| {
                                    let row = app.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="font-bold">{app.name.clone()}</div>
                                                <div class="text-sm opacity-60">{app.email.clone()}</div>
                                            </td>
                                            <td class="hidden md:table-cell">{status_label(&app.vehicle_type)}</td>
                                            <td class="hidden md:table-cell font-mono text-sm">{app.license_number.clone()}</td>
                                            <td class="hidden lg:table-cell">{format_date(&app.applied_at)}</td>
                                            <td>{status_badge(&app.status)}</td>
                                            <td>
                                                <button
                                                    class="btn btn-ghost btn-sm"
                                                    on:click=move |_| reviewing.set(Some(row.clone()))
                                                >
                                                    "Review"
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

        <VerificationDialog application=reviewing />
    }
}
