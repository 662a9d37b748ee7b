//! Contact endpoints.

use super::{delete, get_json, post_json, put_json, ApiResult, Query};
use crate::models::{Contact, ContactPayload, ContactStatus};

#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    pub status: Option<ContactStatus>,
    pub search: Option<String>,
}

pub async fn list_contacts(filter: &ContactFilter) -> ApiResult<Vec<Contact>> {
    let mut query = Query::new();
    query.push_opt("status", filter.status.map(|s| s.as_str()));
    query.push_opt("search", filter.search.as_deref());
    get_json(&format!("/contacts{}", query)).await
}

pub async fn get_contact(id: &str) -> ApiResult<Contact> {
    get_json(&format!("/contacts/{}", id)).await
}

pub async fn create_contact(payload: &ContactPayload) -> ApiResult<Contact> {
    post_json("/contacts", payload).await
}

pub async fn update_contact(id: &str, payload: &ContactPayload) -> ApiResult<Contact> {
    put_json(&format!("/contacts/{}", id), payload).await
}

pub async fn delete_contact(id: &str) -> ApiResult<()> {
    delete(&format!("/contacts/{}", id)).await
}
