//! Analytics View
//!
//! Pure read/derive view: one aggregate fetch, client-side ratios for
//! display, nothing written back.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::format::{format_currency, format_compact_currency};
use crate::metrics::{
    funnel_stages, insights, max_stage_value, DerivedMetrics, InsightKind,
};
use crate::models::{Analytics, DealStage};

#[component]
pub fn AnalyticsView() -> impl IntoView {
    let (analytics, set_analytics) = signal(None::<Analytics>);
    let (is_loading, set_is_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_analytics().await {
                Ok(payload) => set_analytics.set(Some(payload)),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[ANALYTICS] load failed: {}", err).into(),
                    );
                }
            }
            set_is_loading.set(false);
        });
    });

    view! {
        <div class="view analytics-view">
            {move || {
                if is_loading.get() {
                    return view! {
                        <div class="view-loading">
                            <div class="spinner"></div>
                        </div>
                    }
                    .into_any();
                }
                let Some(payload) = analytics.get() else {
                    return view! {
                        <div class="view-failed">
                            <p>"Failed to load analytics data"</p>
                        </div>
                    }
                    .into_any();
                };
                let metrics = DerivedMetrics::from_analytics(&payload);
                let stages = funnel_stages(&payload);
                let max_value = max_stage_value(&stages);
                let lost = payload
                    .deals_by_stage
                    .iter()
                    .find(|s| s.stage == DealStage::ClosedLost)
                    .cloned();
                let headline = insights(&metrics, &payload);
                let total_contacts = payload.total_contacts.max(1);
                let contact_rows = [
                    ("Leads", metrics.leads, "bar-violet"),
                    ("Prospects", metrics.prospects, "bar-purple"),
                    ("Customers", metrics.customers, "bar-emerald"),
                    ("Churned", metrics.churned, "bar-gray"),
                ];
                let task_tiles = [
                    ("Pending", metrics.pending_tasks, "tile-amber"),
                    ("Active", metrics.in_progress_tasks, "tile-blue"),
                    ("Done", metrics.completed_tasks, "tile-emerald"),
                ];

                view! {
                    // Key metric cards
                    <div class="stat-grid">
                        <div class="stat-card">
                            <p class="stat-value">{format_currency(payload.total_deal_value)}</p>
                            <p class="stat-label">
                                {format!("Pipeline Value · {} deals", payload.total_deals)}
                            </p>
                        </div>
                        <div class="stat-card">
                            <p class="stat-value">{format!("{:.0}%", metrics.win_rate)}</p>
                            <p class="stat-label">
                                {format!(
                                    "Win Rate · {}/{} closed",
                                    metrics.won_count,
                                    metrics.closed_count,
                                )}
                            </p>
                        </div>
                        <div class="stat-card">
                            <p class="stat-value">{format_currency(metrics.avg_deal_value)}</p>
                            <p class="stat-label">"Avg Deal · Per deal"</p>
                        </div>
                        <div class="stat-card">
                            <p class="stat-value">
                                {format!("{:.0}%", payload.conversion_rate)}
                            </p>
                            <p class="stat-label">
                                {format!("Conversion · {} customers", metrics.customers)}
                            </p>
                        </div>
                    </div>

                    <div class="panel-grid">
                        // Sales funnel, lost reported separately below
                        <div class="panel panel-wide">
                            <div class="panel-header">
                                <h3 class="panel-title">"Sales Funnel"</h3>
                                <span class="panel-accent">
                                    {format_currency(payload.total_deal_value)}
                                </span>
                            </div>
                            <div class="funnel">
                                {stages
                                    .iter()
                                    .map(|stage| {
                                        let width =
                                            ((stage.total_value / max_value) * 100.0).max(5.0);
                                        view! {
                                            <div class="funnel-row">
                                                <span class="funnel-label">{stage.stage.label()}</span>
                                                <div class="funnel-track">
                                                    <div
                                                        class="funnel-bar"
                                                        style=format!("width: {:.0}%;", width)
                                                    >
                                                        <span class="funnel-amount">
                                                            {format_compact_currency(stage.total_value)}
                                                        </span>
                                                    </div>
                                                </div>
                                                <span class="funnel-count">{stage.count}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            {lost
                                .filter(|l| l.count > 0)
                                .map(|l| {
                                    view! {
                                        <div class="funnel-lost">
                                            <span>"Lost"</span>
                                            <span class="funnel-lost-value">
                                                {format!(
                                                    "{} ({})",
                                                    l.count,
                                                    format_currency(l.total_value),
                                                )}
                                            </span>
                                        </div>
                                    }
                                })}
                        </div>

                        // Insight messages
                        <div class="panel">
                            <h3 class="panel-title">"Insights"</h3>
                            {if headline.is_empty() {
                                view! {
                                    <p class="panel-placeholder">"Add more data for insights"</p>
                                }
                                .into_any()
                            } else {
                                headline
                                    .iter()
                                    .map(|insight| {
                                        let class = match insight.kind {
                                            InsightKind::Success => "insight success",
                                            InsightKind::Warning => "insight warning",
                                            InsightKind::Info => "insight info",
                                        };
                                        view! { <div class=class>{insight.text.clone()}</div> }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </div>
                    </div>

                    <div class="panel-grid three">
                        // Contact status breakdown
                        <div class="panel">
                            <h3 class="panel-title">"Contacts"</h3>
                            <div class="breakdown">
                                {contact_rows
                                    .iter()
                                    .map(|&(label, count, bar_class)| {
                                        let width =
                                            f64::from(count) / f64::from(total_contacts) * 100.0;
                                        view! {
                                            <div class="breakdown-row">
                                                <span class="breakdown-label">{label}</span>
                                                <div class="breakdown-track">
                                                    <div
                                                        class=format!("breakdown-bar {}", bar_class)
                                                        style=format!("width: {:.0}%;", width)
                                                    ></div>
                                                </div>
                                                <span class="breakdown-count">{count}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="panel-footer">
                                <span>{format!("Total: {}", payload.total_contacts)}</span>
                                <span class="panel-accent">
                                    {format!("{:.0}% converted", payload.conversion_rate)}
                                </span>
                            </div>
                        </div>

                        // Task productivity
                        <div class="panel">
                            <h3 class="panel-title">"Tasks"</h3>
                            <div class="tile-row">
                                {task_tiles
                                    .iter()
                                    .map(|&(label, count, tile_class)| {
                                        view! {
                                            <div class=format!("tile {}", tile_class)>
                                                <p class="tile-value">{count}</p>
                                                <p class="tile-label">{label}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="progress-row">
                                <div class="progress-track">
                                    <div
                                        class="progress-bar"
                                        style=format!(
                                            "width: {:.0}%;",
                                            metrics.task_completion_rate,
                                        )
                                    ></div>
                                </div>
                                <span class="progress-value">
                                    {format!("{:.0}%", metrics.task_completion_rate)}
                                </span>
                            </div>
                            <p class="panel-note">
                                {format!(
                                    "{} completed this week",
                                    payload.tasks_completed_this_week,
                                )}
                            </p>
                        </div>

                        // Performance summary
                        <div class="panel">
                            <h3 class="panel-title">"Performance"</h3>
                            <div class="perf-grid">
                                <div class="perf-item">
                                    <p class="perf-value">
                                        {format_currency(metrics.avg_deal_value)}
                                    </p>
                                    <p class="perf-label">"Avg Deal"</p>
                                </div>
                                <div class="perf-item">
                                    <p class="perf-value">{format!("{:.0}%", metrics.win_rate)}</p>
                                    <p class="perf-label">"Win Rate"</p>
                                </div>
                                <div class="perf-item">
                                    <p class="perf-value">
                                        {if payload.total_deals > 0 {
                                            format!(
                                                "{:.1}",
                                                f64::from(payload.total_contacts)
                                                    / f64::from(payload.total_deals),
                                            )
                                        } else {
                                            "0".to_string()
                                        }}
                                    </p>
                                    <p class="perf-label">"Contacts Per Deal"</p>
                                </div>
                                <div class="perf-item">
                                    <p class="perf-value">{payload.deals_closed_this_month}</p>
                                    <p class="perf-label">"This Month"</p>
                                </div>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
