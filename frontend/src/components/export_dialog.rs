//! 报表导出
//!
//! 按选定的报表类型、日期范围、类型与状态过滤后在浏览器里生成 CSV 并触发下载。

use crate::components::fixtures::{payouts, transactions};
use crate::components::icons::Download;
use crate::components::list_view::FieldHint;
use crate::components::promo_dialog::use_promos;
use crate::components::toast::use_toast;
use crate::web::download_text;
use leptos::prelude::*;
use sakayhub_shared::MIME_CSV;
use sakayhub_shared::export::to_csv;
use sakayhub_shared::format::parse_day;
use sakayhub_shared::forms::{Choice, ExportDraft, FieldError, ReportKind};

/// "all" 选项映射为不过滤
fn choice_value(raw: String) -> Option<String> {
    if raw.is_empty() || raw == "all" { None } else { Some(raw) }
}

fn day_value(day: Option<chrono::NaiveDate>) -> String {
    day.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

#[component]
fn ChoiceSelect(
    label: &'static str,
    #[prop(into)] options: Signal<&'static [Choice]>,
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <select
                class="select select-bordered w-full"
                on:change=move |ev| on_change.run(choice_value(event_target_value(&ev)))
            >
                <option value="all" selected=move || selected.with(Option::is_none)>"All"</option>
                {move || {
                    options
                        .get()
                        .iter()
                        .map(|&(value, text)| {
                            view! {
                                <option
                                    value=value
                                    selected=move || selected.with(|s| s.as_deref() == Some(value))
                                >
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
pub fn ExportDialog() -> impl IntoView {
    let toasts = use_toast();
    let promos = use_promos();
    let (open, set_open) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let draft = RwSignal::new(ExportDraft::default());
    let error = RwSignal::new(None::<FieldError>);

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let close = move || {
        set_open.set(false);
        draft.set(ExportDraft::default());
        error.set(None);
    };

    let error_for = move |field: &'static str| {
        Signal::derive(move || {
            error.with(|e| e.as_ref().filter(|e| e.field == field).map(|e| e.message.clone()))
        })
    };

    let type_options = Signal::derive(move || {
        draft.with(|d| d.report.map_or(&[] as &[Choice], |r| r.type_options()))
    });
    let status_options = Signal::derive(move || {
        draft.with(|d| d.report.map_or(&[] as &[Choice], |r| r.status_options()))
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let current = draft.get_untracked();
        let report = match current.validate() {
            Ok(report) => report,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };

        let csv = match report {
            ReportKind::Transactions => to_csv(&transactions(), &current),
            ReportKind::Payouts => to_csv(&payouts(), &current),
            ReportKind::Promos => promos.codes().with_untracked(|codes| to_csv(codes, &current)),
        };
        let filename = current.filename();

        match download_text(&filename, MIME_CSV, &csv) {
            Ok(()) => {
                log::info!("exported {} report to {}", report.value(), filename);
                toasts.success(
                    "Report exported",
                    format!("{} report saved as {}.", report.label(), filename),
                );
                close();
            }
            Err(e) => {
                log::error!("report export failed: {}", e);
                toasts.error("Export failed", e);
            }
        }
    };

    view! {
        <button class="btn btn-outline gap-2" on:click=move |_| set_open.set(true)>
            <Download attr:class="h-4 w-4" /> "Export Report"
        </button>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| close()>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Export Report"</h3>
                <p class="py-4 text-base-content/70">"Download a CSV of the selected records."</p>

                <form on:submit=on_submit class="space-y-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Report type"</span>
                        </label>
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                let report = ReportKind::from_value(&event_target_value(&ev));
                                draft.update(|d| d.set_report(report));
                                error.set(None);
                            }
                        >
                            <option value="" selected=move || draft.with(|d| d.report.is_none())>
                                "Select report"
                            </option>
                            {ReportKind::ALL
                                .into_iter()
                                .map(|report| {
                                    view! {
                                        <option
                                            value=report.value()
                                            selected=move || draft.with(|d| d.report == Some(report))
                                        >
                                            {report.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <FieldHint error=error_for("report") />
                    </div>

                    <Show when=move || draft.with(|d| d.report.is_some())>
                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"From"</span>
                                </label>
                                <input type="date"
                                    class="input input-bordered w-full"
                                    prop:value=move || draft.with(|d| day_value(d.from))
                                    on:input=move |ev| {
                                        let day = parse_day(&event_target_value(&ev));
                                        draft.update(|d| d.from = day);
                                    }
                                />
                            </div>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"To"</span>
                                </label>
                                <input type="date"
                                    class="input input-bordered w-full"
                                    prop:value=move || draft.with(|d| day_value(d.to))
                                    on:input=move |ev| {
                                        let day = parse_day(&event_target_value(&ev));
                                        draft.update(|d| d.to = day);
                                    }
                                />
                                <FieldHint error=error_for("to") />
                            </div>
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <Show when=move || !type_options.get().is_empty()>
                                <ChoiceSelect
                                    label="Type"
                                    options=type_options
                                    selected=Signal::derive(move || draft.with(|d| d.kind.clone()))
                                    on_change={move |kind: Option<String>| draft.update(|d| d.kind = kind)}
                                />
                            </Show>
                            <ChoiceSelect
                                label="Status"
                                options=status_options
                                selected=Signal::derive(move || draft.with(|d| d.status.clone()))
                                on_change={move |status: Option<String>| draft.update(|d| d.status = status)}
                            />
                        </div>

                        <button
                            type="button"
                            class="btn btn-link btn-sm px-0"
                            on:click=move |_| draft.update(ExportDraft::reset_filters)
                        >
                            "Reset filters"
                        </button>
                    </Show>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| close()>"Cancel"</button>
                        <button
                            type="submit"
                            class="btn btn-primary gap-2"
                            disabled=move || draft.with(|d| d.report.is_none())
                        >
                            <Download attr:class="h-4 w-4" /> "Export"
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
