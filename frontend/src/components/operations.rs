//! 行程与配送
//!
//! 两个标签页各自挂载自己的分页列表，切换标签时另一个的请求会被取消。

use crate::components::icons::*;
use crate::components::list_view::{
    EmptyRow, Pagination, PhaseBanner, SearchBox, StatCard, StatusFilterMenu, status_badge,
    use_paginated, use_widget, widget_count,
};
use leptos::prelude::*;
use sakayhub_shared::filter::StatusFilter;
use sakayhub_shared::format::{format_datetime, format_money};
use sakayhub_shared::{Delivery, DeliveryStats, Ride, RideStats};

const RIDE_STATUSES: &[&str] = &["requested", "ongoing", "completed", "cancelled"];
const DELIVERY_STATUSES: &[&str] = &["pending", "shipping", "delivered", "cancelled"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Rides,
    Deliveries,
}

#[component]
fn RidesPanel() -> impl IntoView {
    let list = use_paginated::<Ride>();
    let filter = RwSignal::new(StatusFilter::default());
    let visible = move || {
        let filter = filter.get();
        list.items()
            .into_iter()
            .filter(|r| filter.matches(&r.status))
            .collect::<Vec<_>>()
    };
    let is_empty = Signal::derive(move || !list.state.with(|s| s.is_loading()) && visible().is_empty());

    view! {
        <div class="flex flex-col md:flex-row md:items-center justify-end gap-2 px-6 pt-4">
            <SearchBox value=list.search() on_input=move |term| list.set_search(term) placeholder="Search rides" />
            <StatusFilterMenu filter=filter options=RIDE_STATUSES />
        </div>
        <PhaseBanner phase=list.phase() />
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Ride"</th>
                        <th>"Customer"</th>
                        <th class="hidden md:table-cell">"Driver"</th>
                        <th class="hidden lg:table-cell">"Route"</th>
                        <th>"Fare"</th>
                        <th>"Status"</th>
                        <th class="hidden lg:table-cell">"Time"</th>
                    </tr>
                </thead>
                <tbody>
                    <EmptyRow colspan=7 when=is_empty message="No rides found." />
                    <For
                        each=visible
                        key=|r| (r.id, r.status.clone())
                        children=move |ride| {
                            view! {
                                <tr>
                                    <td class="font-mono text-sm">{format!("R{:03}", ride.id)}</td>
                                    <td>{ride.customer.clone()}</td>
                                    <td class="hidden md:table-cell">{ride.driver.clone()}</td>
                                    <td class="hidden lg:table-cell text-sm">
                                        <div>{ride.pickup.clone()}</div>
                                        <div class="opacity-60">{format!("→ {}", ride.destination)}</div>
                                    </td>
                                    <td>{format_money(&ride.fare)}</td>
                                    <td>{status_badge(&ride.status)}</td>
                                    <td class="hidden lg:table-cell text-sm">{format_datetime(&ride.time)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
        <Pagination pager=list.pager() on_change=move |p| list.set_page(p) />
    }
}

#[component]
fn DeliveriesPanel() -> impl IntoView {
    let list = use_paginated::<Delivery>();
    let filter = RwSignal::new(StatusFilter::default());
    let visible = move || {
        let filter = filter.get();
        list.items()
            .into_iter()
            .filter(|d| filter.matches(&d.status))
            .collect::<Vec<_>>()
    };
    let is_empty = Signal::derive(move || !list.state.with(|s| s.is_loading()) && visible().is_empty());

    view! {
        <div class="flex flex-col md:flex-row md:items-center justify-end gap-2 px-6 pt-4">
            <SearchBox value=list.search() on_input=move |term| list.set_search(term) placeholder="Search deliveries" />
            <StatusFilterMenu filter=filter options=DELIVERY_STATUSES />
        </div>
        <PhaseBanner phase=list.phase() />
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Delivery"</th>
                        <th>"Sender"</th>
                        <th class="hidden md:table-cell">"Receiver"</th>
                        <th class="hidden md:table-cell">"Package"</th>
                        <th class="hidden lg:table-cell">"Driver"</th>
                        <th>"Fee"</th>
                        <th>"Status"</th>
                        <th class="hidden lg:table-cell">"Time"</th>
                    </tr>
                </thead>
                <tbody>
                    <EmptyRow colspan=8 when=is_empty message="No deliveries found." />
                    <For
                        each=visible
                        key=|d| (d.id, d.status.clone())
                        children=move |delivery| {
                            view! {
                                <tr>
                                    <td class="font-mono text-sm">{format!("D{:03}", delivery.id)}</td>
                                    <td>{delivery.sender.clone()}</td>
                                    <td class="hidden md:table-cell">{delivery.receiver.clone()}</td>
                                    <td class="hidden md:table-cell">{delivery.package.clone()}</td>
                                    <td class="hidden lg:table-cell">{delivery.driver.clone()}</td>
                                    <td>{format_money(&delivery.fee)}</td>
                                    <td>{status_badge(&delivery.status)}</td>
                                    <td class="hidden lg:table-cell text-sm">{format_datetime(&delivery.time)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
        <Pagination pager=list.pager() on_change=move |p| list.set_page(p) />
    }
}

#[component]
pub fn OperationsPage() -> impl IntoView {
    let rides = use_widget::<RideStats>();
    let deliveries = use_widget::<DeliveryStats>();
    let (tab, set_tab) = signal(Tab::Rides);

    let tab_class = move |t: Tab| {
        if tab.get() == t { "tab tab-active" } else { "tab" }
    };

    view! {
        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <StatCard title="Active Rides" value=widget_count(rides, |s| s.active_rides) hint="Currently ongoing">
                <Car attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Active Deliveries" value=widget_count(deliveries, |s| s.active_deliveries) hint="In transit">
                <Package attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Weekly Rides" value=widget_count(rides, |s| s.weekly_rides) hint="This week">
                <Car attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Weekly Deliveries" value=widget_count(deliveries, |s| s.weekly_deliveries) hint="This week">
                <Package attr:class="h-8 w-8" />
            </StatCard>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div role="tablist" class="tabs tabs-bordered px-6 pt-4">
                    <a role="tab" class=move || tab_class(Tab::Rides) on:click=move |_| set_tab.set(Tab::Rides)>
                        "Rides"
                    </a>
                    <a role="tab" class=move || tab_class(Tab::Deliveries) on:click=move |_| set_tab.set(Tab::Deliveries)>
                        "Deliveries"
                    </a>
                </div>
                {move || match tab.get() {
                    Tab::Rides => view! { <RidesPanel /> }.into_any(),
                    Tab::Deliveries => view! { <DeliveriesPanel /> }.into_any(),
                }}
            </div>
        </div>
    }
}
