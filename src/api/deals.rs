//! Deal endpoints.

use super::{delete, get_json, post_json, put_json, ApiResult, Query};
use crate::models::{Deal, DealPayload, DealStage};

#[derive(Debug, Clone, Default)]
pub struct DealFilter {
    pub stage: Option<DealStage>,
    pub search: Option<String>,
}

pub async fn list_deals(filter: &DealFilter) -> ApiResult<Vec<Deal>> {
    let mut query = Query::new();
    query.push_opt("stage", filter.stage.map(|s| s.as_str()));
    query.push_opt("search", filter.search.as_deref());
    get_json(&format!("/deals{}", query)).await
}

pub async fn get_deal(id: &str) -> ApiResult<Deal> {
    get_json(&format!("/deals/{}", id)).await
}

pub async fn create_deal(payload: &DealPayload) -> ApiResult<Deal> {
    post_json("/deals", payload).await
}

pub async fn update_deal(id: &str, payload: &DealPayload) -> ApiResult<Deal> {
    put_json(&format!("/deals/{}", id), payload).await
}

pub async fn delete_deal(id: &str) -> ApiResult<()> {
    delete(&format!("/deals/{}", id)).await
}
