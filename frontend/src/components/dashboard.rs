use crate::auth::use_auth;
use crate::components::icons::*;
use crate::components::list_view::{StatCard, use_widget, widget_count};
use crate::web::router::Link;
use leptos::prelude::*;
use sakayhub_admin::AppRoute;
use sakayhub_shared::format::format_amount;
use sakayhub_shared::{ApplicationStats, DeliveryStats, DriverStats, RideStats};

/// 总览页
///
/// 四组统计各自独立加载，任意一组失败只显示占位符。
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let identity = auth.identity();

    let drivers = use_widget::<DriverStats>();
    let rides = use_widget::<RideStats>();
    let deliveries = use_widget::<DeliveryStats>();
    let applications = use_widget::<ApplicationStats>();

    let greeting = move || {
        identity
            .get()
            .map(|u| format!("Welcome back, {}", u.username))
            .unwrap_or_else(|| "Welcome back".to_string())
    };
    let earnings = Signal::derive(move || {
        drivers.with(|w| w.display(|s| format_amount(s.total_earnings)))
    });
    let rating = Signal::derive(move || drivers.with(|w| w.display(|s| format!("{:.1}", s.avg_rating))));

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">{greeting}</h1>
                <p class="text-base-content/70">"Here is what is happening on the platform today."</p>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <StatCard title="Online Drivers" value=widget_count(drivers, |s| s.online) hint="Available right now">
                    <Car attr:class="h-8 w-8" />
                </StatCard>
                <StatCard title="Active Rides" value=widget_count(rides, |s| s.active_rides) hint="Currently ongoing">
                    <Activity attr:class="h-8 w-8" />
                </StatCard>
                <StatCard title="Active Deliveries" value=widget_count(deliveries, |s| s.active_deliveries) hint="In transit">
                    <Package attr:class="h-8 w-8" />
                </StatCard>
                <StatCard title="Pending Applications" value=widget_count(applications, |s| s.pending) hint="Awaiting review">
                    <ClipboardCheck attr:class="h-8 w-8" />
                </StatCard>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <StatCard title="Driver Earnings" value=earnings hint="All time">
                    <Wallet attr:class="h-8 w-8" />
                </StatCard>
                <StatCard title="Average Rating" value=rating hint="Across verified drivers">
                    <Star attr:class="h-8 w-8" />
                </StatCard>
                <StatCard title="Weekly Rides" value=widget_count(rides, |s| s.weekly_rides) hint="This week">
                    <Car attr:class="h-8 w-8" />
                </StatCard>
                <StatCard title="Weekly Deliveries" value=widget_count(deliveries, |s| s.weekly_deliveries) hint="This week">
                    <Package attr:class="h-8 w-8" />
                </StatCard>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Quick actions"</h3>
                    <div class="flex flex-wrap gap-2">
                        <Link route=AppRoute::Applications class="btn btn-outline btn-sm">
                            <ClipboardCheck attr:class="h-4 w-4" /> "Review applications"
                        </Link>
                        <Link route=AppRoute::Drivers class="btn btn-outline btn-sm">
                            <Car attr:class="h-4 w-4" /> "Manage drivers"
                        </Link>
                        <Link route=AppRoute::Support class="btn btn-outline btn-sm">
                            <LifeBuoy attr:class="h-4 w-4" /> "Open tickets"
                        </Link>
                        <Link route=AppRoute::Financial class="btn btn-outline btn-sm">
                            <Download attr:class="h-4 w-4" /> "Export reports"
                        </Link>
                    </div>
                </div>
            </div>
        </div>
    }
}
