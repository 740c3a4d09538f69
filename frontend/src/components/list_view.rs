//! 列表页公共部件
//!
//! - `use_paginated`: 把核心库的分页资源挂到组件生命周期上
//! - `use_widget`: 独立加载的统计卡片
//! - 分页条、搜索框、统计卡片、状态提示

use crate::api::{SignalSlot, use_api};
use crate::components::icons::{ChevronLeft, ChevronRight, Filter, Search};
use leptos::prelude::*;
use leptos::task::spawn_local;
use sakayhub_admin::request::CancelToken;
use sakayhub_admin::resource::load_widget;
use sakayhub_admin::{ListState, PaginatedResource, Phase, Widget};
use sakayhub_shared::Pager;
use sakayhub_shared::filter::StatusFilter;
use sakayhub_shared::format::format_count;
use sakayhub_shared::protocol::{Resource, StatsPayload};
use std::rc::Rc;

type Paginated<R> = PaginatedResource<R, SignalSlot<ListState<R>>>;

/// 一个列表页的句柄
///
/// 页码或搜索词变化时自动重新拉取；组件卸载时中止未完成的请求。
pub struct ListHandle<R: Resource + Send + Sync> {
    pub state: RwSignal<ListState<R>>,
    page: RwSignal<u32>,
    search: RwSignal<String>,
    resource: StoredValue<Rc<Paginated<R>>, LocalStorage>,
}

impl<R: Resource + Send + Sync> Clone for ListHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource + Send + Sync> Copy for ListHandle<R> {}

impl<R> ListHandle<R>
where
    R: Resource + Send + Sync,
{
    pub fn search(&self) -> Signal<String> {
        self.search.into()
    }

    pub fn pager(&self) -> Signal<Pager> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.pager()))
    }

    pub fn phase(&self) -> Signal<Phase> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.phase.clone()))
    }

    /// 当前页的行
    pub fn items(&self) -> Vec<R> {
        self.state.with(|s| s.items.clone())
    }

    pub fn set_page(&self, page: u32) {
        let page = self.resource.with_value(|r| r.set_page(page));
        self.page.set(page);
    }

    /// 新搜索词从第一页开始
    pub fn set_search(&self, term: String) {
        self.search.set(term);
        self.page.set(1);
    }

    /// 用服务端返回的实体替换对应行
    pub fn patch(&self, row: R) -> bool {
        self.resource.with_value(|r| r.patch(row))
    }
}

pub fn use_paginated<R>() -> ListHandle<R>
where
    R: Resource + Send + Sync,
{
    let api = use_api();
    let state = RwSignal::new(ListState::<R>::default());
    let page = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let resource = StoredValue::new_local(Rc::new(PaginatedResource::new(SignalSlot(state))));

    Effect::new(move |_| {
        let page = page.get();
        let search = search.get();
        let resource = resource.get_value();
        let gateway = api.gateway();
        spawn_local(async move {
            resource.load(&gateway, page, &search).await;
        });
    });

    on_cleanup(move || {
        let _ = resource.try_with_value(|r| r.cancel());
    });

    ListHandle {
        state,
        page,
        search,
        resource,
    }
}

/// 挂载时拉取一次统计数据，失败只影响这一张卡片
pub fn use_widget<S>() -> RwSignal<Widget<S>>
where
    S: StatsPayload + Clone + Send + Sync + 'static,
{
    let api = use_api();
    let widget = RwSignal::new(Widget::<S>::Pending);
    let cancel = CancelToken::new();
    let token = StoredValue::new_local(cancel.clone());

    let gateway = api.gateway();
    spawn_local(async move {
        let result = load_widget::<S, _>(&gateway, Some(&cancel)).await;
        if !cancel.is_cancelled() {
            let _ = widget.try_set(result);
        }
    });

    on_cleanup(move || {
        let _ = token.try_with_value(|t| t.cancel());
    });

    widget
}

/// 统计卡片
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] hint: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-figure text-primary">{children()}</div>
            <div class="stat-title">{title}</div>
            <div class="stat-value text-2xl">{value}</div>
            <div class="stat-desc">{hint}</div>
        </div>
    }
}

/// 统计卡片显示的计数
pub fn widget_count<S: Clone + Send + Sync + 'static>(
    widget: RwSignal<Widget<S>>,
    field: fn(&S) -> u64,
) -> Signal<String> {
    Signal::derive(move || widget.with(|w| w.display(|s| format_count(field(s)))))
}

#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="input input-bordered flex items-center gap-2 w-full md:w-80">
            <Search attr:class="h-4 w-4 opacity-50" />
            <input
                type="search"
                class="grow"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// 加载与错误提示，以行内文字呈现
#[component]
pub fn PhaseBanner(#[prop(into)] phase: Signal<Phase>) -> impl IntoView {
    move || match phase.get() {
        Phase::Loading => view! {
            <div class="flex items-center gap-2 text-sm text-base-content/60 px-6 py-2">
                <span class="loading loading-spinner loading-sm"></span> "Loading..."
            </div>
        }
        .into_any(),
        Phase::Errored(message) => view! {
            <div role="alert" class="alert alert-error text-sm mx-6 my-2 py-2">
                <span>{message}</span>
            </div>
        }
        .into_any(),
        Phase::Idle | Phase::Loaded => ().into_any(),
    }
}

/// 表格无数据时的占位行
#[component]
pub fn EmptyRow(colspan: u32, #[prop(into)] when: Signal<bool>, message: &'static str) -> impl IntoView {
    view! {
        <Show when=move || when.get()>
            <tr>
                <td colspan=colspan class="text-center py-8 text-base-content/50">
                    {message}
                </td>
            </tr>
        </Show>
    }
}

#[component]
pub fn Pagination(
    #[prop(into)] pager: Signal<Pager>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    let showing = move || match pager.get().showing() {
        Some((first, last)) => format!(
            "Showing {}–{} of {}",
            first,
            last,
            format_count(pager.get().count)
        ),
        None => "No results".to_string(),
    };

    view! {
        <div class="flex flex-col md:flex-row items-center justify-between gap-2 p-4">
            <span class="text-sm text-base-content/60">{showing}</span>
            <div class="join">
                <button
                    class="join-item btn btn-sm"
                    disabled=move || !pager.get().has_previous()
                    on:click=move |_| on_change.run(pager.get_untracked().page.saturating_sub(1))
                >
                    <ChevronLeft attr:class="h-4 w-4" />
                </button>
                <For
                    each=move || pager.get().visible_pages(5)
                    key=|p| *p
                    children=move |p| {
                        view! {
                            <button
                                class=move || {
                                    if pager.get().page == p {
                                        "join-item btn btn-sm btn-active"
                                    } else {
                                        "join-item btn btn-sm"
                                    }
                                }
                                on:click=move |_| on_change.run(p)
                            >
                                {p}
                            </button>
                        }
                    }
                />
                <button
                    class="join-item btn btn-sm"
                    disabled=move || !pager.get().has_next()
                    on:click=move |_| on_change.run(pager.get_untracked().page + 1)
                >
                    <ChevronRight attr:class="h-4 w-4" />
                </button>
            </div>
        </div>
    }
}

/// 状态徽章
pub fn status_badge(status: &str) -> impl IntoView + use<> {
    let tone = match status {
        "active" | "completed" | "delivered" | "approved" | "verified" | "resolved" => "badge-success",
        "suspended" | "cancelled" | "rejected" | "expired" | "inactive" => "badge-error",
        "pending" | "under_review" | "processing" | "resolving" => "badge-warning",
        "ongoing" | "shipping" | "processed" | "open" | "scheduled" => "badge-info",
        _ => "badge-ghost",
    };
    view! {
        <span class=format!("badge badge-outline {}", tone)>
            {sakayhub_shared::format::status_label(status)}
        </span>
    }
}

/// 可切换的过滤选项（复选框下拉菜单中的一项）
#[component]
pub fn FacetOption(
    value: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <li>
            <label class="label cursor-pointer justify-start gap-2">
                <input
                    type="checkbox"
                    class="checkbox checkbox-sm"
                    prop:checked=checked
                    on:change=move |_| on_toggle.run(value)
                />
                <span class="label-text">{sakayhub_shared::format::status_label(value)}</span>
            </label>
        </li>
    }
}

/// 单组状态过滤下拉菜单
#[component]
pub fn StatusFilterMenu(
    filter: RwSignal<StatusFilter>,
    options: &'static [&'static str],
    #[prop(default = "Status")] label: &'static str,
) -> impl IntoView {
    view! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-outline gap-2">
                <Filter attr:class="h-4 w-4" />
                {label}
                <Show when=move || filter.with(StatusFilter::is_active)>
                    <span class="badge badge-primary badge-sm">
                        {move || filter.with(|f| f.statuses.len())}
                    </span>
                </Show>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                {options
                    .iter()
                    .map(|&status| {
                        view! {
                            <FacetOption
                                value=status
                                checked=Signal::derive(move || filter.with(|f| f.statuses.contains(status)))
                                on_toggle=move |s: &'static str| filter.update(|f| f.toggle(s))
                            />
                        }
                    })
                    .collect_view()}
                <li>
                    <a on:click=move |_| filter.update(StatusFilter::clear)>"Clear filters"</a>
                </li>
            </ul>
        </div>
    }
}

/// 表单字段下方的错误提示
#[component]
pub fn FieldHint(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <label class="label">
                    <span class="label-text-alt text-error">{message}</span>
                </label>
            }
        })
    }
}
