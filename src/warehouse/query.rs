/// Per-account usage for the two trailing 7-day windows ending yesterday and
/// eight days before that, each with a "YYYY-MM-DD to YYYY-MM-DD" label.
pub const WEEKLY_USAGE_QUERY: &str = r#"
SELECT account_name,
    ROUND(SUM(CASE WHEN usage_date BETWEEN DATEADD(week, -2, CURRENT_DATE) AND DATEADD(day, -1, DATEADD(week, -1, CURRENT_DATE)) THEN usage_in_currency ELSE 0 END), 2) AS usage_last_by_one_week,
    TO_CHAR(DATEADD(week, -2, CURRENT_DATE), 'YYYY-MM-DD') || ' to ' || TO_CHAR(DATEADD(day, -1, DATEADD(week, -1, CURRENT_DATE)), 'YYYY-MM-DD') AS date_range_last_by_one_week,
    ROUND(SUM(CASE WHEN usage_date BETWEEN DATEADD(week, -1, CURRENT_DATE) AND DATEADD(day, -1, CURRENT_DATE) THEN usage_in_currency ELSE 0 END), 2) AS usage_last_week,
    TO_CHAR(DATEADD(week, -1, CURRENT_DATE), 'YYYY-MM-DD') || ' to ' || TO_CHAR(DATEADD(day, -1, CURRENT_DATE), 'YYYY-MM-DD') AS date_range_last_week
FROM snowflake.organization_usage.usage_in_currency_daily
WHERE usage_date BETWEEN DATEADD(week, -2, CURRENT_DATE) AND DATEADD(day, -1, CURRENT_DATE)
GROUP BY 1
ORDER BY 2 DESC, 4 DESC
"#;

// Column aliases as Snowflake reports them (unquoted identifiers are upper-cased)
pub const COL_ACCOUNT_NAME: &str = "ACCOUNT_NAME";
pub const COL_USAGE_PRIOR: &str = "USAGE_LAST_BY_ONE_WEEK";
pub const COL_RANGE_PRIOR: &str = "DATE_RANGE_LAST_BY_ONE_WEEK";
pub const COL_USAGE_LATEST: &str = "USAGE_LAST_WEEK";
pub const COL_RANGE_LATEST: &str = "DATE_RANGE_LAST_WEEK";
