//! 财务概览：交易流水、司机提现、报表导出与优惠码

use crate::components::export_dialog::ExportDialog;
use crate::components::fixtures::{Payout, Transaction, payouts, transactions};
use crate::components::icons::*;
use crate::components::list_view::{
    EmptyRow, Pagination, SearchBox, StatCard, StatusFilterMenu, status_badge,
};
use crate::components::promo_dialog::{PromoDialog, use_promos};
use leptos::prelude::*;
use sakayhub_shared::filter::{StatusFilter, matches_search};
use sakayhub_shared::format::{format_amount, format_count, format_datetime, format_date};
use sakayhub_shared::pagination::{DEFAULT_PAGE_SIZE, Pager};

const TRANSACTION_STATUSES: &[&str] = &["completed", "processed", "pending"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Transactions,
    Payouts,
}

fn revenue(rows: &[Transaction]) -> f64 {
    rows.iter().filter(|t| t.amount > 0.0).map(|t| t.amount).sum()
}

fn commission(rows: &[Transaction]) -> f64 {
    rows.iter().map(|t| t.commission).sum()
}

fn pending_payouts(rows: &[Payout]) -> f64 {
    rows.iter().filter(|p| p.status == "pending").map(|p| p.amount).sum()
}

#[component]
fn TransactionsPanel() -> impl IntoView {
    let rows = StoredValue::new(transactions());
    let (search, set_search) = signal(String::new());
    let filter = RwSignal::new(StatusFilter::default());
    let (page, set_page) = signal(1u32);

    let matching = move || {
        let term = search.get();
        let filter = filter.get();
        rows.with_value(|rows| {
            rows.iter()
                .filter(|t| matches_search([t.id, t.customer, t.driver], &term))
                .filter(|t| filter.matches(t.status))
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let pager = Signal::derive(move || {
        Pager::new(matching().len() as u64, DEFAULT_PAGE_SIZE, page.get())
    });
    let visible = move || pager.with(|p| p.slice(&matching()).to_vec());
    let is_empty = Signal::derive(move || pager.with(|p| p.count == 0));

    // 条件变化后回到第一页
    Effect::new(move |_| {
        search.track();
        filter.track();
        set_page.set(1);
    });

    view! {
        <div class="flex flex-col md:flex-row md:items-center justify-end gap-2 px-6 pt-4">
            <SearchBox value=search on_input=move |term| set_search.set(term) placeholder="Search transactions" />
            <StatusFilterMenu filter=filter options=TRANSACTION_STATUSES />
        </div>
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Transaction"</th>
                        <th>"Type"</th>
                        <th>"Amount"</th>
                        <th class="hidden md:table-cell">"Commission"</th>
                        <th class="hidden lg:table-cell">"Customer"</th>
                        <th class="hidden lg:table-cell">"Driver"</th>
                        <th>"Status"</th>
                        <th class="hidden md:table-cell">"Time"</th>
                    </tr>
                </thead>
                <tbody>
                    <EmptyRow colspan=8 when=is_empty message="No transactions found." />
                    <For
                        each=visible
                        key=|t| t.id
                        children=move |txn| {
                            let tone = if txn.amount < 0.0 { "text-error" } else { "" };
                            view! {
                                <tr>
                                    <td class="font-mono text-sm">{txn.id}</td>
                                    <td>{status_badge(txn.kind)}</td>
                                    <td class=tone>{format_amount(txn.amount)}</td>
                                    <td class="hidden md:table-cell">{format_amount(txn.commission)}</td>
                                    <td class="hidden lg:table-cell">{txn.customer}</td>
                                    <td class="hidden lg:table-cell">{txn.driver}</td>
                                    <td>{status_badge(txn.status)}</td>
                                    <td class="hidden md:table-cell text-sm">{format_datetime(txn.timestamp)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
        <Pagination pager=pager on_change=move |p| set_page.set(pager.get_untracked().clamp(p)) />
    }
}

#[component]
fn PayoutsPanel() -> impl IntoView {
    let rows = StoredValue::new(payouts());
    let (page, set_page) = signal(1u32);
    let pager = Signal::derive(move || {
        Pager::new(rows.with_value(|r| r.len() as u64), DEFAULT_PAGE_SIZE, page.get())
    });
    let visible = move || rows.with_value(|r| pager.with(|p| p.slice(r).to_vec()));

    view! {
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Payout"</th>
                        <th>"Driver"</th>
                        <th>"Amount"</th>
                        <th class="hidden md:table-cell">"Rides"</th>
                        <th>"Status"</th>
                        <th class="hidden md:table-cell">"Requested"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|p| p.id
                        children=move |payout| {
                            view! {
                                <tr>
                                    <td class="font-mono text-sm">{payout.id}</td>
                                    <td>{payout.driver}</td>
                                    <td>{format_amount(payout.amount)}</td>
                                    <td class="hidden md:table-cell">{payout.rides}</td>
                                    <td>{status_badge(payout.status)}</td>
                                    <td class="hidden md:table-cell text-sm">{format_date(payout.requested)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
        <Pagination pager=pager on_change=move |p| set_page.set(pager.get_untracked().clamp(p)) />
    }
}

#[component]
pub fn FinancialPage() -> impl IntoView {
    let promos = use_promos();
    let (tab, set_tab) = signal(Tab::Transactions);

    let txns = transactions();
    let total_revenue = format_amount(revenue(&txns));
    let total_commission = format_amount(commission(&txns));
    let pending = format_amount(pending_payouts(&payouts()));
    let active_promos = Signal::derive(move || {
        promos.codes().with(|codes| {
            format_count(codes.iter().filter(|c| c.status == "active").count() as u64)
        })
    });

    let tab_class = move |t: Tab| {
        if tab.get() == t { "tab tab-active" } else { "tab" }
    };

    view! {
        <div class="flex flex-col md:flex-row md:items-center justify-between gap-4">
            <div>
                <h2 class="text-2xl font-bold">"Financial"</h2>
                <p class="text-base-content/70 text-sm">"Revenue, commissions and driver payouts."</p>
            </div>
            <div class="flex gap-2">
                <ExportDialog />
                <PromoDialog />
            </div>
        </div>

        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <StatCard title="Total Revenue" value=total_revenue hint="All completed trips">
                <Wallet attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Commission" value=total_commission hint="Platform share">
                <Activity attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Pending Payouts" value=pending hint="Awaiting approval">
                <RefreshCw attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Active Promos" value=active_promos hint="Currently redeemable">
                <Gift attr:class="h-8 w-8" />
            </StatCard>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div role="tablist" class="tabs tabs-bordered px-6 pt-4">
                    <a role="tab" class=move || tab_class(Tab::Transactions) on:click=move |_| set_tab.set(Tab::Transactions)>
                        "Transactions"
                    </a>
                    <a role="tab" class=move || tab_class(Tab::Payouts) on:click=move |_| set_tab.set(Tab::Payouts)>
                        "Driver Payouts"
                    </a>
                </div>
                {move || match tab.get() {
                    Tab::Transactions => view! { <TransactionsPanel /> }.into_any(),
                    Tab::Payouts => view! { <PayoutsPanel /> }.into_any(),
                }}
            </div>
        </div>
    }
}
