//! Derived Metrics
//!
//! Client-side computations over one analytics payload. Everything here is
//! recomputed from scratch on each load and never sent back to the backend.

use crate::models::{Analytics, ContactStatus, DealStage, DealsByStage, MonthlyRevenue, TaskStatus};

/// Numbers the analytics and dashboard views derive from one payload
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedMetrics {
    pub avg_deal_value: f64,
    pub won_count: u32,
    pub lost_count: u32,
    pub closed_count: u32,
    /// Percent, 0..=100
    pub win_rate: f64,
    pub pending_tasks: u32,
    pub in_progress_tasks: u32,
    pub completed_tasks: u32,
    /// Percent, 0..=100
    pub task_completion_rate: f64,
    pub leads: u32,
    pub prospects: u32,
    pub customers: u32,
    pub churned: u32,
}

impl DerivedMetrics {
    pub fn from_analytics(analytics: &Analytics) -> Self {
        let stage_count = |stage: DealStage| {
            analytics
                .deals_by_stage
                .iter()
                .find(|s| s.stage == stage)
                .map(|s| s.count)
                .unwrap_or(0)
        };
        let task_count = |status: TaskStatus| {
            analytics
                .tasks_by_status
                .iter()
                .find(|t| t.status == status)
                .map(|t| t.count)
                .unwrap_or(0)
        };
        let contact_count = |status: ContactStatus| {
            analytics
                .contacts_by_status
                .iter()
                .find(|c| c.status == status)
                .map(|c| c.count)
                .unwrap_or(0)
        };

        let won_count = stage_count(DealStage::ClosedWon);
        let lost_count = stage_count(DealStage::ClosedLost);
        let closed_count = won_count + lost_count;
        let win_rate = if closed_count > 0 {
            f64::from(won_count) / f64::from(closed_count) * 100.0
        } else {
            0.0
        };

        let completed_tasks = task_count(TaskStatus::Completed);
        let task_completion_rate = if analytics.total_tasks > 0 {
            f64::from(completed_tasks) / f64::from(analytics.total_tasks) * 100.0
        } else {
            0.0
        };

        let avg_deal_value = if analytics.total_deals > 0 {
            analytics.total_deal_value / f64::from(analytics.total_deals)
        } else {
            0.0
        };

        Self {
            avg_deal_value,
            won_count,
            lost_count,
            closed_count,
            win_rate,
            pending_tasks: task_count(TaskStatus::Pending),
            in_progress_tasks: task_count(TaskStatus::InProgress),
            completed_tasks,
            task_completion_rate,
            leads: contact_count(ContactStatus::Lead),
            prospects: contact_count(ContactStatus::Prospect),
            customers: contact_count(ContactStatus::Customer),
            churned: contact_count(ContactStatus::Churned),
        }
    }
}

/// Funnel rows in pipeline order; lost deals are reported separately
pub fn funnel_stages(analytics: &Analytics) -> Vec<DealsByStage> {
    let mut stages: Vec<DealsByStage> = analytics
        .deals_by_stage
        .iter()
        .filter(|s| s.stage != DealStage::ClosedLost)
        .cloned()
        .collect();
    stages.sort_by_key(|s| s.stage.order());
    stages
}

/// Widest funnel bar, floored at 1 so ratios stay finite on empty data
pub fn max_stage_value(stages: &[DealsByStage]) -> f64 {
    stages.iter().map(|s| s.total_value).fold(1.0, f64::max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
}

/// Threshold-based headline messages for the analytics view
pub fn insights(metrics: &DerivedMetrics, analytics: &Analytics) -> Vec<Insight> {
    let mut out = Vec::new();
    if metrics.win_rate >= 50.0 {
        out.push(Insight {
            kind: InsightKind::Success,
            text: format!("{:.0}% win rate - above average!", metrics.win_rate),
        });
    } else if metrics.closed_count > 0 && metrics.win_rate < 30.0 {
        out.push(Insight {
            kind: InsightKind::Warning,
            text: format!("{:.0}% win rate needs attention", metrics.win_rate),
        });
    }
    if metrics.task_completion_rate >= 70.0 {
        out.push(Insight {
            kind: InsightKind::Success,
            text: format!("{:.0}% tasks completed", metrics.task_completion_rate),
        });
    } else if analytics.total_tasks > 0 && metrics.task_completion_rate < 40.0 {
        out.push(Insight {
            kind: InsightKind::Warning,
            text: format!("Only {:.0}% tasks done", metrics.task_completion_rate),
        });
    }
    if metrics.leads > metrics.customers * 3 {
        out.push(Insight {
            kind: InsightKind::Info,
            text: format!("{} leads to convert", metrics.leads),
        });
    }
    out
}

// ========================
// Revenue chart
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl ChartPeriod {
    pub fn description(&self) -> &'static str {
        match self {
            ChartPeriod::Weekly => "Last 7 weeks",
            ChartPeriod::Monthly => "Monthly revenue this year",
            ChartPeriod::Yearly => "Yearly revenue trends",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub revenue: f64,
    pub deals: u32,
}

/// Bars for the selected period, labeled for the x-axis
pub fn chart_points(analytics: &Analytics, period: ChartPeriod) -> Vec<ChartPoint> {
    match period {
        ChartPeriod::Monthly => analytics
            .monthly_revenue
            .iter()
            .map(|m| ChartPoint {
                label: crate::format::month_short(m.month).to_string(),
                revenue: m.revenue,
                deals: m.deals_count,
            })
            .collect(),
        ChartPeriod::Weekly => analytics
            .weekly_revenue
            .iter()
            .map(|w| ChartPoint {
                label: week_label(&w.week_start),
                revenue: w.revenue,
                deals: w.deals_count,
            })
            .collect(),
        ChartPeriod::Yearly => analytics
            .yearly_revenue
            .iter()
            .map(|y| ChartPoint {
                label: y.year.to_string(),
                revenue: y.revenue,
                deals: y.deals_count,
            })
            .collect(),
    }
}

/// "10/7" from "2024-10-07"
fn week_label(week_start: &str) -> String {
    let mut parts = week_start.split('T').next().unwrap_or(week_start).split('-');
    let _year = parts.next();
    match (parts.next(), parts.next()) {
        (Some(month), Some(day)) => format!(
            "{}/{}",
            month.trim_start_matches('0'),
            day.trim_start_matches('0')
        ),
        _ => week_start.to_string(),
    }
}

pub fn max_revenue(points: &[ChartPoint]) -> f64 {
    points.iter().map(|p| p.revenue).fold(1.0, f64::max)
}

/// Month-over-month growth in percent; zero when last month had no revenue
pub fn growth_rate(monthly: &[MonthlyRevenue], current_month: u32) -> f64 {
    let revenue_of = |month: u32| {
        monthly
            .iter()
            .find(|m| m.month == month)
            .map(|m| m.revenue)
            .unwrap_or(0.0)
    };
    if current_month <= 1 {
        return 0.0;
    }
    let current = revenue_of(current_month);
    let previous = revenue_of(current_month - 1);
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        0.0
    }
}

/// Average over months that actually had revenue
pub fn average_monthly(monthly: &[MonthlyRevenue]) -> f64 {
    let active = monthly.iter().filter(|m| m.revenue > 0.0).count();
    if active == 0 {
        return 0.0;
    }
    monthly.iter().map(|m| m.revenue).sum::<f64>() / active as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactsByStatus, TasksByStatus, WeeklyRevenue};

    fn sample_analytics() -> Analytics {
        Analytics {
            total_contacts: 10,
            total_deals: 8,
            total_tasks: 4,
            total_deal_value: 40_000.0,
            deals_by_stage: vec![
                DealsByStage {
                    stage: DealStage::ClosedLost,
                    count: 1,
                    total_value: 2_000.0,
                },
                DealsByStage {
                    stage: DealStage::ClosedWon,
                    count: 3,
                    total_value: 18_000.0,
                },
                DealsByStage {
                    stage: DealStage::Lead,
                    count: 4,
                    total_value: 20_000.0,
                },
            ],
            tasks_by_status: vec![
                TasksByStatus {
                    status: TaskStatus::Completed,
                    count: 3,
                },
                TasksByStatus {
                    status: TaskStatus::Pending,
                    count: 1,
                },
            ],
            contacts_by_status: vec![
                ContactsByStatus {
                    status: ContactStatus::Lead,
                    count: 7,
                },
                ContactsByStatus {
                    status: ContactStatus::Customer,
                    count: 2,
                },
            ],
            conversion_rate: 20.0,
            tasks_completed_this_week: 2,
            deals_closed_this_month: 1,
            recent_activities: vec![],
            monthly_revenue: vec![
                MonthlyRevenue {
                    month: 9,
                    year: 2024,
                    revenue: 10_000.0,
                    deals_count: 2,
                },
                MonthlyRevenue {
                    month: 10,
                    year: 2024,
                    revenue: 15_000.0,
                    deals_count: 3,
                },
            ],
            weekly_revenue: vec![WeeklyRevenue {
                week_start: "2024-10-07".into(),
                revenue: 5_000.0,
                deals_count: 1,
            }],
            yearly_revenue: vec![],
        }
    }

    #[test]
    fn win_rate_is_won_over_closed() {
        let metrics = DerivedMetrics::from_analytics(&sample_analytics());
        assert_eq!(metrics.won_count, 3);
        assert_eq!(metrics.lost_count, 1);
        assert!((metrics.win_rate - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rates_are_zero_on_empty_data() {
        let mut analytics = sample_analytics();
        analytics.deals_by_stage.clear();
        analytics.tasks_by_status.clear();
        analytics.total_tasks = 0;
        analytics.total_deals = 0;
        let metrics = DerivedMetrics::from_analytics(&analytics);
        assert_eq!(metrics.win_rate, 0.0);
        assert_eq!(metrics.task_completion_rate, 0.0);
        assert_eq!(metrics.avg_deal_value, 0.0);
    }

    #[test]
    fn task_completion_uses_total_tasks() {
        let metrics = DerivedMetrics::from_analytics(&sample_analytics());
        assert!((metrics.task_completion_rate - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn avg_deal_value_divides_by_total() {
        let metrics = DerivedMetrics::from_analytics(&sample_analytics());
        assert!((metrics.avg_deal_value - 5_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn funnel_excludes_lost_and_sorts_by_pipeline() {
        let stages = funnel_stages(&sample_analytics());
        let order: Vec<DealStage> = stages.iter().map(|s| s.stage).collect();
        assert_eq!(order, vec![DealStage::Lead, DealStage::ClosedWon]);
        assert!((max_stage_value(&stages) - 20_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn max_stage_value_floors_at_one() {
        assert_eq!(max_stage_value(&[]), 1.0);
    }

    #[test]
    fn insights_fire_on_thresholds() {
        let analytics = sample_analytics();
        let metrics = DerivedMetrics::from_analytics(&analytics);
        let messages = insights(&metrics, &analytics);
        assert!(messages
            .iter()
            .any(|i| i.kind == InsightKind::Success && i.text.contains("75% win rate")));
        // 7 leads > 3 * 2 customers
        assert!(messages.iter().any(|i| i.kind == InsightKind::Info));
    }

    #[test]
    fn chart_points_follow_period() {
        let analytics = sample_analytics();
        let monthly = chart_points(&analytics, ChartPeriod::Monthly);
        assert_eq!(monthly[0].label, "Sep");
        let weekly = chart_points(&analytics, ChartPeriod::Weekly);
        assert_eq!(weekly[0].label, "10/7");
        assert!(chart_points(&analytics, ChartPeriod::Yearly).is_empty());
    }

    #[test]
    fn growth_rate_compares_adjacent_months() {
        let analytics = sample_analytics();
        let rate = growth_rate(&analytics.monthly_revenue, 10);
        assert!((rate - 50.0).abs() < f64::EPSILON);
        assert_eq!(growth_rate(&analytics.monthly_revenue, 1), 0.0);
        assert_eq!(growth_rate(&analytics.monthly_revenue, 5), 0.0);
    }

    #[test]
    fn average_skips_empty_months() {
        let analytics = sample_analytics();
        assert!((average_monthly(&analytics.monthly_revenue) - 12_500.0).abs() < f64::EPSILON);
        assert_eq!(average_monthly(&[]), 0.0);
    }
}
