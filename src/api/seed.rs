//! Demo-data seeding trigger.

use super::{post_empty, ApiResult};

pub async fn seed_demo_data() -> ApiResult<()> {
    post_empty("/seed").await
}
