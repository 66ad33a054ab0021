pub const SNOWFLAKE_ACCOUNT: &str = "SNOWFLAKE_ACCOUNT";
pub const SNOWFLAKE_USER: &str = "SNOWFLAKE_USER";
pub const SNOWFLAKE_PASSWORD: &str = "SNOWFLAKE_PASSWORD";
pub const SNOWFLAKE_WAREHOUSE: &str = "SNOWFLAKE_WAREHOUSE";
pub const SNOWFLAKE_DATABASE: &str = "SNOWFLAKE_DATABASE";
pub const SNOWFLAKE_SCHEMA: &str = "SNOWFLAKE_SCHEMA";
pub const SLACK_TOKEN: &str = "SLACK_TOKEN";
pub const SLACK_CHANNELS: &str = "SLACK_CHANNELS";

/// Variables the report cannot run without
pub const REQUIRED_VARS: [&str; 8] = [
    SNOWFLAKE_ACCOUNT,
    SNOWFLAKE_USER,
    SNOWFLAKE_PASSWORD,
    SNOWFLAKE_WAREHOUSE,
    SNOWFLAKE_DATABASE,
    SNOWFLAKE_SCHEMA,
    SLACK_TOKEN,
    SLACK_CHANNELS,
];

/// `skip` (default) or `report`
pub const ZERO_PRIOR_VAR: &str = "USAGE_REPORT_ZERO_PRIOR";

/// Any non-empty value turns on dry-run mode
pub const DRY_RUN_VAR: &str = "USAGE_REPORT_DRY_RUN";
