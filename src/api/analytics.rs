//! Analytics endpoint.

use super::{get_json, ApiResult};
use crate::models::Analytics;

pub async fn fetch_analytics() -> ApiResult<Analytics> {
    get_json("/analytics").await
}
