use crate::api::use_api;
use crate::components::icons::*;
use crate::components::list_view::{
    EmptyRow, FacetOption, Pagination, PhaseBanner, SearchBox, StatCard, status_badge,
    use_paginated, use_widget, widget_count,
};
use crate::components::suspend_dialog::{SuspendDialog, SuspendPrompt, apply_suspension};
use crate::components::toast::use_toast;
use leptos::prelude::*;
use sakayhub_shared::filter::{
    DRIVER_STATUS_OPTIONS, DriverFilter, FacetSet, LICENSE_OPTIONS, PRESENCE_OPTIONS,
    VEHICLE_OPTIONS,
};
use sakayhub_shared::format::{format_amount, format_count, format_money, status_label};
use sakayhub_shared::{Driver, DriverStats, Suspendable};

fn presence_facet(f: &DriverFilter) -> &FacetSet {
    &f.presence
}

fn status_facet(f: &DriverFilter) -> &FacetSet {
    &f.status
}

fn vehicle_facet(f: &DriverFilter) -> &FacetSet {
    &f.vehicle
}

fn license_facet(f: &DriverFilter) -> &FacetSet {
    &f.license
}

/// 过滤菜单中的一组选项
#[component]
fn FacetGroup(
    title: &'static str,
    options: &'static [&'static str],
    filter: RwSignal<DriverFilter>,
    select: fn(&DriverFilter) -> &FacetSet,
    toggle: fn(&mut DriverFilter, &str),
) -> impl IntoView {
    view! {
        <li class="menu-title">{title}</li>
        {options
            .iter()
            .map(|&value| {
                view! {
                    <FacetOption
                        value=value
                        checked=Signal::derive(move || filter.with(|f| select(f).contains(value)))
                        on_toggle=move |v: &'static str| filter.update(|f| toggle(f, v))
                    />
                }
            })
            .collect_view()}
    }
}

#[component]
pub fn DriversPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toast();
    let list = use_paginated::<Driver>();
    let stats = use_widget::<DriverStats>();

    // 四组过滤条件只作用于当前页
    let filter = RwSignal::new(DriverFilter::default());
    let visible = move || {
        let filter = filter.get();
        list.items()
            .into_iter()
            .filter(|d| filter.matches(d))
            .collect::<Vec<_>>()
    };
    let is_empty = Signal::derive(move || !list.state.with(|s| s.is_loading()) && visible().is_empty());

    let prompt = RwSignal::new(Option::<SuspendPrompt<Driver>>::None);
    let busy = RwSignal::new(false);
    let on_confirm = move |p: SuspendPrompt<Driver>| {
        apply_suspension(api, list, toasts, "Driver", p, busy);
    };

    let rating = Signal::derive(move || stats.with(|w| w.display(|s| format!("{:.1}", s.avg_rating))));
    let earnings = Signal::derive(move || stats.with(|w| w.display(|s| format_amount(s.total_earnings))));

    view! {
        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <StatCard title="Online Now" value=widget_count(stats, |s| s.online) hint="Drivers accepting trips">
                <Activity attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Verified" value=widget_count(stats, |s| s.verified) hint="License verified">
                <ShieldCheck attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Average Rating" value=rating hint="All drivers">
                <Star attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Total Earnings" value=earnings hint="Paid out to drivers">
                <Wallet attr:class="h-8 w-8" />
            </StatCard>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 p-6 pb-2">
                    <div>
                        <h3 class="card-title">"Drivers"</h3>
                        <p class="text-base-content/70 text-sm">"Manage driver accounts, vehicles and licenses."</p>
                    </div>
                    <div class="flex items-center gap-2">
                        <SearchBox
                            value=list.search()
                            on_input=move |term| list.set_search(term)
                            placeholder="Search drivers"
                        />
                        <div class="dropdown dropdown-end">
                            <div tabindex="0" role="button" class="btn btn-outline gap-2">
                                <Filter attr:class="h-4 w-4" />
                                "Filters"
                                <Show when=move || filter.with(DriverFilter::is_active)>
                                    <span class="badge badge-primary badge-sm">
                                        {move || filter.with(DriverFilter::active_count)}
                                    </span>
                                </Show>
                            </div>
                            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-60 max-h-96 overflow-y-auto flex-nowrap">
                                <FacetGroup
                                    title="Availability"
                                    options=&PRESENCE_OPTIONS
                                    filter=filter
                                    select=presence_facet
                                    toggle=DriverFilter::toggle_presence
                                />
                                <FacetGroup
                                    title="Account status"
                                    options=&DRIVER_STATUS_OPTIONS
                                    filter=filter
                                    select=status_facet
                                    toggle=DriverFilter::toggle_status
                                />
                                <FacetGroup
                                    title="Vehicle"
                                    options=&VEHICLE_OPTIONS
                                    filter=filter
                                    select=vehicle_facet
                                    toggle=DriverFilter::toggle_vehicle
                                />
                                <FacetGroup
                                    title="License"
                                    options=&LICENSE_OPTIONS
                                    filter=filter
                                    select=license_facet
                                    toggle=DriverFilter::toggle_license
                                />
                                <li>
                                    <a on:click=move |_| filter.update(DriverFilter::clear)>"Clear filters"</a>
                                </li>
                            </ul>
                        </div>
                    </div>
                </div>

                <PhaseBanner phase=list.phase() />

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Driver"</th>
                                <th>"Status"</th>
                                <th class="hidden md:table-cell">"Vehicle"</th>
                                <th class="hidden md:table-cell">"License"</th>
                                <th class="hidden lg:table-cell">"Rating"</th>
                                <th class="hidden lg:table-cell">"Trips"</th>
                                <th class="hidden lg:table-cell">"Earnings"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <EmptyRow colspan=8 when=is_empty message="No drivers match your filters." />
                            <For
                                each=visible
                                key=|d| (d.id, d.status.clone())
                                children=move |driver| {
                                    let suspended = driver.is_suspended();
                                    let row = driver.clone();
                                    let open = move |_| {
                                        prompt.set(Some(SuspendPrompt {
                                            name: row.name.clone(),
                                            row: row.clone(),
                                        }))
                                    };
                                    let presence = if driver.online { "badge badge-success badge-xs" } else { "badge badge-ghost badge-xs" };
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="flex items-center gap-2">
                                                    <span class=presence></span>
                                                    <div>
                                                        <div class="font-bold">{driver.name.clone()}</div>
                                                        <div class="text-sm opacity-60">{driver.email.clone()}</div>
                                                    </div>
                                                </div>
                                            </td>
                                            <td>{status_badge(&driver.status)}</td>
                                            <td class="hidden md:table-cell">{status_label(&driver.vehicle_type)}</td>
                                            <td class="hidden md:table-cell">{status_badge(&driver.license_status)}</td>
                                            <td class="hidden lg:table-cell">
                                                <span class="flex items-center gap-1">
                                                    <Star attr:class="h-3 w-3 text-warning" />
                                                    {format!("{:.1}", driver.rating)}
                                                </span>
                                            </td>
                                            <td class="hidden lg:table-cell">{format_count(driver.total_rides)}</td>
                                            <td class="hidden lg:table-cell">{format_money(&driver.earnings)}</td>
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

        <SuspendDialog prompt=prompt noun="Driver" busy=busy on_confirm=on_confirm />
    }
}
