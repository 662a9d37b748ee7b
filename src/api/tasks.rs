//! Task endpoints.

use super::{delete, get_json, post_for_json, post_json, put_json, ApiResult, Query};
use crate::models::{Task, TaskPayload, TaskPriority, TaskStatus};

#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub search: Option<String>,
}

pub async fn list_tasks(filter: &TaskFilter) -> ApiResult<Vec<Task>> {
    let mut query = Query::new();
    query.push_opt("status", filter.status.map(|s| s.as_str()));
    query.push_opt("priority", filter.priority.map(|p| p.as_str()));
    query.push_opt("search", filter.search.as_deref());
    get_json(&format!("/tasks{}", query)).await
}

pub async fn get_task(id: &str) -> ApiResult<Task> {
    get_json(&format!("/tasks/{}", id)).await
}

pub async fn create_task(payload: &TaskPayload) -> ApiResult<Task> {
    post_json("/tasks", payload).await
}

pub async fn update_task(id: &str, payload: &TaskPayload) -> ApiResult<Task> {
    put_json(&format!("/tasks/{}", id), payload).await
}

pub async fn delete_task(id: &str) -> ApiResult<()> {
    delete(&format!("/tasks/{}", id)).await
}

/// Backend shortcut that marks a task done and stamps `completed_at`
pub async fn complete_task(id: &str) -> ApiResult<Task> {
    post_for_json(&format!("/tasks/{}/complete", id)).await
}
