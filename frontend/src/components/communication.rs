//! 通知与公告：广播公告、推送记录与邮件/短信活动

use crate::components::fixtures::{Campaign, announcements, campaigns, notifications};
use crate::components::icons::*;
use crate::components::list_view::{EmptyRow, StatCard, status_badge};
use leptos::prelude::*;
use sakayhub_shared::format::{format_count, format_date, status_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Announcements,
    Notifications,
    Campaigns,
}

fn kind_badge(kind: &str) -> impl IntoView + use<> {
    let tone = match kind {
        "success" => "badge-success",
        "warning" => "badge-warning",
        "info" => "badge-info",
        "promo" => "badge-secondary",
        _ => "badge-ghost",
    };
    view! { <span class=format!("badge {}", tone)>{status_label(kind)}</span> }
}

/// 百分比，分母为 0 时显示 0%
fn rate(part: u64, whole: u64) -> String {
    if whole == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / whole as f64)
}

#[component]
fn AnnouncementsPanel() -> impl IntoView {
    let rows = announcements();
    let is_empty = rows.is_empty();

    view! {
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Message"</th>
                        <th class="hidden md:table-cell">"Audience"</th>
                        <th class="hidden md:table-cell">"Date"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <EmptyRow colspan=5 when=is_empty message="No announcements yet." />
                    {rows
                        .into_iter()
                        .map(|a| {
                            view! {
                                <tr>
                                    <td class="font-medium">{a.title}</td>
                                    <td class="max-w-xs truncate">{a.message}</td>
                                    <td class="hidden md:table-cell">{a.audience}</td>
                                    <td class="hidden md:table-cell">{format_date(a.date)}</td>
                                    <td>{status_badge(a.status)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn NotificationsPanel() -> impl IntoView {
    let rows = notifications();
    let is_empty = rows.is_empty();

    view! {
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Message"</th>
                        <th>"Type"</th>
                        <th class="hidden md:table-cell">"Sent"</th>
                    </tr>
                </thead>
                <tbody>
                    <EmptyRow colspan=4 when=is_empty message="No notifications sent." />
                    {rows
                        .into_iter()
                        .map(|n| {
                            view! {
                                <tr>
                                    <td class="font-medium">{n.title}</td>
                                    <td class="max-w-xs truncate">{n.message}</td>
                                    <td>{kind_badge(n.kind)}</td>
                                    <td class="hidden md:table-cell text-sm">{n.sent}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn CampaignsPanel() -> impl IntoView {
    let rows = campaigns();
    let is_empty = rows.is_empty();

    view! {
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Campaign"</th>
                        <th>"Channel"</th>
                        <th>"Recipients"</th>
                        <th class="hidden md:table-cell">"Opened / Delivered"</th>
                        <th class="hidden md:table-cell">"Clicked"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <EmptyRow colspan=6 when=is_empty message="No campaigns yet." />
                    {rows
                        .into_iter()
                        .map(|c: Campaign| {
                            let reached = format!("{} {}", format_count(c.reached), c.reached_label().to_lowercase());
                            view! {
                                <tr>
                                    <td class="font-medium">{c.name}</td>
                                    <td><span class="badge badge-outline uppercase">{c.channel}</span></td>
                                    <td>{format_count(c.recipients)}</td>
                                    <td class="hidden md:table-cell">{reached}</td>
                                    <td class="hidden md:table-cell">{format_count(c.clicked)}</td>
                                    <td>{status_badge(c.status)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn CommunicationPage() -> impl IntoView {
    let (tab, set_tab) = signal(Tab::Announcements);

    let list = campaigns();
    let recipients: u64 = list.iter().map(|c| c.recipients).sum();
    let reached: u64 = list.iter().map(|c| c.reached).sum();
    let clicked: u64 = list.iter().map(|c| c.clicked).sum();
    let scheduled = announcements().iter().filter(|a| a.status == "scheduled").count() as u64;

    let tab_class = move |t: Tab| {
        if tab.get() == t { "tab tab-active" } else { "tab" }
    };

    view! {
        <div>
            <h2 class="text-2xl font-bold">"Communication"</h2>
            <p class="text-base-content/70 text-sm">"Announcements, push notifications and campaigns."</p>
        </div>

        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <StatCard title="Total Recipients" value=format_count(recipients) hint="Across all campaigns">
                <UsersIcon attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Open Rate" value=rate(reached, recipients) hint="Opened or delivered">
                <Mail attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Click Rate" value=rate(clicked, recipients) hint="Of all recipients">
                <Activity attr:class="h-8 w-8" />
            </StatCard>
            <StatCard title="Scheduled" value=format_count(scheduled) hint="Announcements queued">
                <Bell attr:class="h-8 w-8" />
            </StatCard>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div role="tablist" class="tabs tabs-bordered px-6 pt-4">
                    <a role="tab" class=move || tab_class(Tab::Announcements) on:click=move |_| set_tab.set(Tab::Announcements)>
                        "Announcements"
                    </a>
                    <a role="tab" class=move || tab_class(Tab::Notifications) on:click=move |_| set_tab.set(Tab::Notifications)>
                        "Push Notifications"
                    </a>
                    <a role="tab" class=move || tab_class(Tab::Campaigns) on:click=move |_| set_tab.set(Tab::Campaigns)>
                        "Email/SMS Campaigns"
                    </a>
                </div>
                {move || match tab.get() {
                    Tab::Announcements => view! { <AnnouncementsPanel /> }.into_any(),
                    Tab::Notifications => view! { <NotificationsPanel /> }.into_any(),
                    Tab::Campaigns => view! { <CampaignsPanel /> }.into_any(),
                }}
            </div>
        </div>
    }
}
