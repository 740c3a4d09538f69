//! 客服工单
//!
//! 工单全部在本地，搜索、状态和优先级过滤作用于整个列表。

use crate::components::fixtures::tickets;
use crate::components::icons::*;
use crate::components::list_view::{
    EmptyRow, FacetOption, Pagination, SearchBox, StatCard, StatusFilterMenu, status_badge,
};
use leptos::prelude::*;
use sakayhub_shared::filter::{FacetSet, StatusFilter, matches_search};
use sakayhub_shared::format::{format_count, format_datetime, status_label};
use sakayhub_shared::pagination::{DEFAULT_PAGE_SIZE, Pager};

const TICKET_STATUSES: &[&str] = &["open", "resolving", "resolved"];
const PRIORITIES: &[&str] = &["high", "medium", "low"];

fn priority_badge(priority: &str) -> impl IntoView + use<> {
    let tone = match priority {
        "high" => "badge-error",
        "medium" => "badge-warning",
        _ => "badge-ghost",
    };
    view! { <span class=format!("badge {}", tone)>{status_label(priority)}</span> }
}

#[component]
pub fn SupportPage() -> impl IntoView {
    let rows = StoredValue::new(tickets());
    let (search, set_search) = signal(String::new());
    let filter = RwSignal::new(StatusFilter::default());
    let priority = RwSignal::new(FacetSet::default());
    let (page, set_page) = signal(1u32);

    let count_status = move |status: &'static str| {
        rows.with_value(|r| format_count(r.iter().filter(|t| t.status == status).count() as u64))
    };

    let matching = move || {
        let term = search.get();
        let filter = filter.get();
        let priority = priority.get();
        rows.with_value(|rows| {
            rows.iter()
                .filter(|t| matches_search([t.id, t.customer, t.subject, t.assignee], &term))
                .filter(|t| filter.matches(t.status) && priority.matches(t.priority))
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let pager = Signal::derive(move || {
        Pager::new(matching().len() as u64, DEFAULT_PAGE_SIZE, page.get())
    });
    let visible = move || pager.with(|p| p.slice(&matching()).to_vec());
    let is_empty = Signal::derive(move || pager.with(|p| p.count == 0));

    Effect::new(move |_| {
        search.track();
        filter.track();
        priority.track();
        set_page.set(1);
    });

    view! {
        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <StatCard title="Open" value=count_status("open") hint="Waiting for an agent">
                <AlertCircle attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Resolving" value=count_status("resolving") hint="In progress">
                <RefreshCw attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Resolved" value=count_status("resolved") hint="Closed tickets">
                <CheckCircle attr:class="h-8 w-8" />
            </StatCard>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 p-6 pb-2">
                    <div>
                        <h3 class="card-title">"Support Tickets"</h3>
                        <p class="text-base-content/70 text-sm">"Complaints, refunds and technical issues."</p>
                    </div>
                    <div class="flex items-center gap-2">
                        <SearchBox value=search on_input=move |term| set_search.set(term) placeholder="Search tickets" />
                        <StatusFilterMenu filter=filter options=TICKET_STATUSES />
                        <div class="dropdown dropdown-end">
                            <div tabindex="0" role="button" class="btn btn-outline gap-2">
                                <Filter attr:class="h-4 w-4" />
                                "Priority"
                                <Show when=move || !priority.with(FacetSet::is_empty)>
                                    <span class="badge badge-primary badge-sm">{move || priority.with(FacetSet::len)}</span>
                                </Show>
                            </div>
                            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                                {PRIORITIES
                                    .iter()
                                    .map(|&value| {
                                        view! {
                                            <FacetOption
                                                value=value
                                                checked=Signal::derive(move || priority.with(|p| p.contains(value)))
                                                on_toggle=move |v: &'static str| priority.update(|p| p.toggle(v))
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Ticket"</th>
                                <th>"Customer"</th>
                                <th>"Subject"</th>
                                <th class="hidden md:table-cell">"Category"</th>
                                <th>"Priority"</th>
                                <th>"Status"</th>
                                <th class="hidden lg:table-cell">"Assignee"</th>
                                <th class="hidden lg:table-cell">"Last reply"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <EmptyRow colspan=8 when=is_empty message="No tickets match your filters." />
                            <For
                                each=visible
                                key=|t| t.id
                                children=move |ticket| {
                                    view! {
                                        <tr>
                                            <td class="font-mono text-sm">{ticket.id}</td>
                                            <td>{ticket.customer}</td>
                                            <td class="max-w-xs truncate">{ticket.subject}</td>
                                            <td class="hidden md:table-cell">{status_label(ticket.category)}</td>
                                            <td>{priority_badge(ticket.priority)}</td>
                                            <td>{status_badge(ticket.status)}</td>
                                            <td class="hidden lg:table-cell">{ticket.assignee}</td>
                                            <td class="hidden lg:table-cell text-sm">{format_datetime(ticket.last_reply)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <Pagination pager=pager on_change=move |p| set_page.set(pager.get_untracked().clamp(p)) />
            </div>
        </div>
    }
}
