//! Frontend Models
//!
//! Data structures matching backend entities. Date/time fields stay strings
//! exactly as received; parsing happens only at the display layer.

use serde::{Deserialize, Serialize};

/// Session user (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Result of the startup session check
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthCheck {
    pub authenticated: bool,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    Lead,
    Prospect,
    Customer,
    Churned,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 4] = [
        ContactStatus::Lead,
        ContactStatus::Prospect,
        ContactStatus::Customer,
        ContactStatus::Churned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Lead => "lead",
            ContactStatus::Prospect => "prospect",
            ContactStatus::Customer => "customer",
            ContactStatus::Churned => "churned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactStatus::Lead => "Lead",
            ContactStatus::Prospect => "Prospect",
            ContactStatus::Customer => "Customer",
            ContactStatus::Churned => "Churned",
        }
    }

    pub fn parse(value: &str) -> Option<ContactStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Contact data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub owner_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub status: ContactStatus,
    pub source: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Pipeline stages in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    #[default]
    Lead,
    Qualified,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl DealStage {
    /// Column order of the pipeline board
    pub const PIPELINE: [DealStage; 6] = [
        DealStage::Lead,
        DealStage::Qualified,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::ClosedWon,
        DealStage::ClosedLost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DealStage::Lead => "lead",
            DealStage::Qualified => "qualified",
            DealStage::Proposal => "proposal",
            DealStage::Negotiation => "negotiation",
            DealStage::ClosedWon => "closed_won",
            DealStage::ClosedLost => "closed_lost",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DealStage::Lead => "Lead",
            DealStage::Qualified => "Qualified",
            DealStage::Proposal => "Proposal",
            DealStage::Negotiation => "Negotiation",
            DealStage::ClosedWon => "Won",
            DealStage::ClosedLost => "Lost",
        }
    }

    pub fn parse(value: &str) -> Option<DealStage> {
        Self::PIPELINE.iter().copied().find(|s| s.as_str() == value)
    }

    /// Position in the pipeline, used for funnel sorting
    pub fn order(&self) -> usize {
        Self::PIPELINE
            .iter()
            .position(|s| s == self)
            .unwrap_or(Self::PIPELINE.len())
    }
}

/// Deal data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub owner_id: String,
    pub contact_id: Option<String>,
    pub title: String,
    pub value: f64,
    pub currency: String,
    pub stage: DealStage,
    pub probability: i32,
    pub expected_close_date: Option<String>,
    pub actual_close_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    #[default]
    Task,
    Call,
    Meeting,
    Email,
    FollowUp,
}

impl TaskType {
    pub const ALL: [TaskType; 5] = [
        TaskType::Task,
        TaskType::Call,
        TaskType::Meeting,
        TaskType::Email,
        TaskType::FollowUp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Task => "task",
            TaskType::Call => "call",
            TaskType::Meeting => "meeting",
            TaskType::Email => "email",
            TaskType::FollowUp => "follow_up",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskType::Task => "Task",
            TaskType::Call => "Call",
            TaskType::Meeting => "Meeting",
            TaskType::Email => "Email",
            TaskType::FollowUp => "Follow Up",
        }
    }

    pub fn parse(value: &str) -> Option<TaskType> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Urgent => "Urgent",
        }
    }

    pub fn parse(value: &str) -> Option<TaskPriority> {
        Self::ALL.iter().copied().find(|p| p.as_str() == value)
    }

    /// Sort rank, most urgent first
    pub fn rank(&self) -> u8 {
        match self {
            TaskPriority::Urgent => 0,
            TaskPriority::High => 1,
            TaskPriority::Medium => 2,
            TaskPriority::Low => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<TaskStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Task data structure (matches backend)
///
/// `is_completed` and `status` are maintained as separate fields by the
/// backend; the client never derives one from the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub owner_id: String,
    pub contact_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub is_completed: bool,
    pub due_date: Option<String>,
    pub completed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

// ========================
// Analytics payload
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DealsByStage {
    pub stage: DealStage,
    pub count: u32,
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TasksByStatus {
    pub status: TaskStatus,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactsByStatus {
    pub status: ContactStatus,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentActivity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub action: String,
    pub title: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyRevenue {
    pub month: u32,
    pub year: i32,
    pub revenue: f64,
    pub deals_count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeeklyRevenue {
    pub week_start: String,
    pub revenue: f64,
    pub deals_count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct YearlyRevenue {
    pub year: i32,
    pub revenue: f64,
    pub deals_count: u32,
}

/// Server-computed aggregate consumed read-only by dashboard and analytics
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Analytics {
    pub total_contacts: u32,
    pub total_deals: u32,
    pub total_tasks: u32,
    pub total_deal_value: f64,
    pub deals_by_stage: Vec<DealsByStage>,
    pub tasks_by_status: Vec<TasksByStatus>,
    pub contacts_by_status: Vec<ContactsByStatus>,
    pub conversion_rate: f64,
    pub tasks_completed_this_week: u32,
    pub deals_closed_this_month: u32,
    pub recent_activities: Vec<RecentActivity>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub weekly_revenue: Vec<WeeklyRevenue>,
    pub yearly_revenue: Vec<YearlyRevenue>,
}

// ========================
// Create/update payloads
// ========================

/// An empty or whitespace form input becomes an absent field on the wire
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial update payload; only present fields reach the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DealPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<DealStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_close_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
}

impl DealPayload {
    /// The board issues single-field stage moves
    pub fn stage_only(stage: DealStage) -> Self {
        Self {
            stage: Some(stage),
            ..Self::default()
        }
    }
}

/// Partial update payload; only present fields reach the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl TaskPayload {
    /// The completion checkbox flips exactly this one field
    pub fn completion(done: bool) -> Self {
        Self {
            is_completed: Some(done),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_serializes_snake_case() {
        let json = serde_json::to_string(&DealStage::ClosedWon).unwrap();
        assert_eq!(json, "\"closed_won\"");
        assert_eq!(DealStage::parse("closed_lost"), Some(DealStage::ClosedLost));
        assert_eq!(DealStage::parse("bogus"), None);
    }

    #[test]
    fn pipeline_order_is_linear() {
        assert_eq!(DealStage::Lead.order(), 0);
        assert_eq!(DealStage::ClosedLost.order(), 5);
    }

    #[test]
    fn completion_payload_contains_only_is_completed() {
        let payload = TaskPayload::completion(true);
        let json = serde_json::to_value(&payload).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("is_completed").unwrap(), &serde_json::json!(true));
    }

    #[test]
    fn stage_only_payload_contains_only_stage() {
        let payload = DealPayload::stage_only(DealStage::Negotiation);
        let json = serde_json::to_value(&payload).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("stage").unwrap(), &serde_json::json!("negotiation"));
    }

    #[test]
    fn empty_optional_fields_stay_off_the_wire() {
        let payload = ContactPayload {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: non_empty("  "),
            company: non_empty("Analytical Engines"),
            ..ContactPayload::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.get("email").is_none());
        assert_eq!(
            obj.get("company").unwrap(),
            &serde_json::json!("Analytical Engines")
        );
    }

    #[test]
    fn priority_rank_sorts_urgent_first() {
        let mut priorities = vec![TaskPriority::Low, TaskPriority::Urgent, TaskPriority::High];
        priorities.sort_by_key(|p| p.rank());
        assert_eq!(
            priorities,
            vec![TaskPriority::Urgent, TaskPriority::High, TaskPriority::Low]
        );
    }
}
