//! Dashboard View
//!
//! Analytics stat cards, the revenue chart with a period toggle, and the
//! recent-sales table. When the workspace is empty a seed button loads the
//! backend's demo data set.

use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::{Avatar, AvatarSize, Badge, Button};
use crate::format::{format_compact_currency, format_currency, month_short};
use crate::metrics::{average_monthly, chart_points, growth_rate, max_revenue, ChartPeriod};
use crate::models::Analytics;

/// Static showcase rows shown until real activity exists
const SAMPLE_TRANSACTIONS: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "FR128934",
        "Livia Torff",
        "liviator@mail.com",
        "Support Package",
        "$780.00",
        "Oct 10, 2024",
    ),
    (
        "FR128944",
        "Mira Baptista",
        "miraba@mail.com",
        "Software License",
        "$1,829.00",
        "Oct 23, 2024",
    ),
    (
        "FR128954",
        "Ahmad Levin",
        "ahmadlev@mail.com",
        "Premium Plan",
        "$2,450.00",
        "Oct 25, 2024",
    ),
];

#[component]
fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into)] change: String,
    #[prop(into)] href: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card-title">{title}</p>
            <div class="stat-card-body">
                <div>
                    <p class="stat-card-value">{value}</p>
                    <p class="stat-card-change">
                        "vs last month " <span class="positive">{change}</span>
                    </p>
                </div>
                <A href=href attr:class="stat-card-link">
                    "See Details"
                </A>
            </div>
        </div>
    }
}

#[component]
fn CountryProgress(
    #[prop(into)] country: String,
    #[prop(into)] value: String,
    percentage: u32,
) -> impl IntoView {
    view! {
        <div class="country-row">
            <div class="country-main">
                <div class="country-head">
                    <span class="country-name">{country}</span>
                    <span class="country-value">{format!("{} ({}%)", value, percentage)}</span>
                </div>
                <div class="country-track">
                    <div class="country-bar" style=format!("width: {}%;", percentage)></div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardView() -> impl IntoView {
    let (analytics, set_analytics) = signal(None::<Analytics>);
    let (is_loading, set_is_loading) = signal(true);
    let (is_seeding, set_is_seeding) = signal(false);
    let (chart_period, set_chart_period) = signal(ChartPeriod::Monthly);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match api::fetch_analytics().await {
                Ok(payload) => set_analytics.set(Some(payload)),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[DASHBOARD] load failed: {}", err).into(),
                    );
                }
            }
            set_is_loading.set(false);
        });
    });

    let seed_demo = move |_| {
        set_is_seeding.set(true);
        spawn_local(async move {
            match api::seed_demo_data().await {
                Ok(()) => set_reload_trigger.update(|n| *n += 1),
                Err(err) => {
                    web_sys::console::error_1(&format!("[DASHBOARD] seed failed: {}", err).into());
                }
            }
            set_is_seeding.set(false);
        });
    };

    let period_button = move |period: ChartPeriod, label: &'static str| {
        view! {
            <button
                class=move || {
                    if chart_period.get() == period { "period-btn active" } else { "period-btn" }
                }
                on:click=move |_| set_chart_period.set(period)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="view dashboard-view">
            {move || {
                if is_loading.get() {
                    return view! {
                        <div class="view-loading">
                            <div class="spinner"></div>
                        </div>
                    }
                    .into_any();
                }
                let payload = analytics.get();
                let total_deal_value =
                    payload.as_ref().map(|a| a.total_deal_value).unwrap_or(0.0);
                let total_deals = payload.as_ref().map(|a| a.total_deals).unwrap_or(0);
                let is_empty = payload
                    .as_ref()
                    .map(|a| a.total_contacts == 0 && a.total_deals == 0)
                    .unwrap_or(false);
                let monthly = payload
                    .as_ref()
                    .map(|a| a.monthly_revenue.clone())
                    .unwrap_or_default();
                let current_month = Utc::now().month();
                let growth = growth_rate(&monthly, current_month);
                let avg = average_monthly(&monthly);
                let points = payload
                    .as_ref()
                    .map(|a| chart_points(a, chart_period.get()))
                    .unwrap_or_default();
                let highest = max_revenue(&points);
                let current_month_label = month_short(current_month);
                let activities = payload
                    .as_ref()
                    .map(|a| a.recent_activities.clone())
                    .unwrap_or_default();

                view! {
                    <Show when=move || is_empty>
                        <div class="seed-banner">
                            <Button on_press=Callback::new(seed_demo) is_loading=is_seeding>
                                "Load Example Data"
                            </Button>
                        </div>
                    </Show>

                    <div class="stat-row">
                        <StatCard
                            title="Active Sales"
                            value=format_currency(total_deal_value)
                            change="+12%"
                            href="/deals"
                        />
                        <StatCard
                            title="Product Revenue"
                            value=format_currency(total_deal_value * 0.6)
                            change="+18%"
                            href="/deals"
                        />
                        <StatCard
                            title="Product Sold"
                            value=total_deals.to_string()
                            change="+8%"
                            href="/contacts"
                        />
                    </div>

                    <div class="dashboard-grid">
                        <div class="panel panel-wide">
                            <div class="panel-header">
                                <div>
                                    <h3 class="panel-title">"Revenue Analytics"</h3>
                                    <p class="panel-sub">
                                        {chart_period.get().description()}
                                    </p>
                                </div>
                                <div class="period-toggle">
                                    {period_button(ChartPeriod::Weekly, "Weekly")}
                                    {period_button(ChartPeriod::Monthly, "Monthly")}
                                    {period_button(ChartPeriod::Yearly, "Yearly")}
                                </div>
                            </div>

                            <div class="chart-summary">
                                <div class="summary-item">
                                    <p class="summary-label">"Total Revenue"</p>
                                    <p class="summary-value">
                                        {format_currency(total_deal_value)}
                                    </p>
                                </div>
                                <div class="summary-item">
                                    <p class="summary-label">"Growth Rate"</p>
                                    <p class={if growth >= 0.0 {
                                        "summary-value positive"
                                    } else {
                                        "summary-value negative"
                                    }}>
                                        {format!(
                                            "{}{:.1}%",
                                            if growth >= 0.0 { "+" } else { "" },
                                            growth,
                                        )}
                                    </p>
                                </div>
                                <div class="summary-item">
                                    <p class="summary-label">"Avg. Monthly"</p>
                                    <p class="summary-value">{format_currency(avg)}</p>
                                </div>
                            </div>

                            <div class="chart">
                                <div class="chart-axis">
                                    {[1.0, 0.75, 0.5, 0.25, 0.0]
                                        .iter()
                                        .map(|&frac| {
                                            view! {
                                                <span class="axis-label">
                                                    {format_compact_currency(highest * frac)}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <div class="chart-bars">
                                    {points
                                        .iter()
                                        .map(|point| {
                                            let height = if highest > 0.0 {
                                                ((point.revenue / highest) * 100.0).max(2.0)
                                            } else {
                                                2.0
                                            };
                                            let highlighted = chart_period.get()
                                                == ChartPeriod::Monthly
                                                && point.label == current_month_label;
                                            let bar_class = if highlighted {
                                                "chart-bar highlighted"
                                            } else if point.revenue > 0.0 {
                                                "chart-bar"
                                            } else {
                                                "chart-bar empty"
                                            };
                                            view! {
                                                <div class="chart-col">
                                                    <div
                                                        class=bar_class
                                                        style=format!("height: {:.0}%;", height)
                                                        title=format!(
                                                            "{}: {} · {} deals",
                                                            point.label,
                                                            format_currency(point.revenue),
                                                            point.deals,
                                                        )
                                                    ></div>
                                                    <span class={if highlighted {
                                                        "chart-label highlighted"
                                                    } else {
                                                        "chart-label"
                                                    }}>
                                                        {point.label.clone()}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>

                        // Static showcase widget kept from the original design
                        <div class="panel">
                            <h3 class="panel-title">"Customers Active"</h3>
                            <p class="accounts-value">
                                {format!(
                                    "{}",
                                    payload
                                        .as_ref()
                                        .map(|a| u64::from(a.total_contacts) * 100 + 48_928)
                                        .unwrap_or(48_928),
                                )}
                                <span class="accounts-unit">" Accounts"</span>
                            </p>
                            <p class="accounts-note">
                                "Compare from last month is 36,738 accounts"
                            </p>
                            <div class="country-list">
                                <CountryProgress
                                    country="United States"
                                    value="19,814"
                                    percentage=87
                                />
                                <CountryProgress country="Italy" value="12,650" percentage=64 />
                                <CountryProgress country="Germany" value="16,431" percentage=78 />
                            </div>
                        </div>
                    </div>

                    <div class="panel">
                        <div class="panel-header">
                            <h3 class="panel-title">"Sales Data Table"</h3>
                        </div>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Transaction ID"</th>
                                    <th>"Customer Name"</th>
                                    <th>"Customer Email"</th>
                                    <th>"Product/Service"</th>
                                    <th>"Deal Value"</th>
                                    <th>"Date"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if activities.is_empty() {
                                    SAMPLE_TRANSACTIONS
                                        .iter()
                                        .map(|&(id, name, email, product, value, date)| {
                                            view! {
                                                <tr>
                                                    <td>{id}</td>
                                                    <td>
                                                        <div class="cell-person">
                                                            <Avatar name=name size=AvatarSize::Small />
                                                            <span class="cell-name">{name}</span>
                                                        </div>
                                                    </td>
                                                    <td>{email}</td>
                                                    <td>
                                                        <Badge color="badge-amber">{product}</Badge>
                                                    </td>
                                                    <td>{value}</td>
                                                    <td>{date}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                } else {
                                    activities
                                        .into_iter()
                                        .take(3)
                                        .enumerate()
                                        .map(|(index, activity)| {
                                            view! {
                                                <tr>
                                                    <td>{format!("FR12893{}", index)}</td>
                                                    <td>
                                                        <div class="cell-person">
                                                            <Avatar
                                                                name=activity.title.clone()
                                                                size=AvatarSize::Small
                                                            />
                                                            <span class="cell-name">
                                                                {activity.title.clone()}
                                                            </span>
                                                        </div>
                                                    </td>
                                                    <td>{activity.action.clone()}</td>
                                                    <td>
                                                        <Badge color="badge-amber">
                                                            {activity.activity_type.clone()}
                                                        </Badge>
                                                    </td>
                                                    <td>"—"</td>
                                                    <td>
                                                        {crate::format::format_relative_time(
                                                            &activity.timestamp,
                                                        )}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
