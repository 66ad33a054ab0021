pub mod query;
pub mod snowflake;
pub mod types;

pub use query::WEEKLY_USAGE_QUERY;
pub use snowflake::SnowflakeSource;
pub use types::RawUsageRow;

use crate::error::Result;

/// Anything that can produce the trailing two weeks of usage per account
#[async_trait::async_trait(?Send)]
pub trait UsageSource {
    /// Rows come back in the warehouse's order; an empty list is not an error
    async fn fetch_weekly_usage(&self) -> Result<Vec<RawUsageRow>>;
}
