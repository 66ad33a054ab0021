use super::query::{
    COL_ACCOUNT_NAME, COL_RANGE_LATEST, COL_RANGE_PRIOR, COL_USAGE_LATEST, COL_USAGE_PRIOR,
    WEEKLY_USAGE_QUERY,
};
use super::{RawUsageRow, UsageSource};
use crate::config::{
    required, Settings, SNOWFLAKE_ACCOUNT, SNOWFLAKE_PASSWORD, SNOWFLAKE_USER,
};
use crate::error::{ReportError, Result};
use snowflake_connector_rs::{
    SnowflakeAuthMethod, SnowflakeClient, SnowflakeClientConfig, SnowflakeRow,
};

/// Reads weekly usage from Snowflake's organization usage view
pub struct SnowflakeSource {
    client: SnowflakeClient,
}

impl SnowflakeSource {
    /// Build a client from the settings. No connection is opened yet.
    pub fn new(settings: &Settings) -> Result<Self> {
        let user = required(&settings.snowflake_user, SNOWFLAKE_USER)?;
        let password = required(&settings.snowflake_password, SNOWFLAKE_PASSWORD)?;
        let account = required(&settings.snowflake_account, SNOWFLAKE_ACCOUNT)?;

        let client = SnowflakeClient::new(
            user,
            SnowflakeAuthMethod::Password(password.to_string()),
            SnowflakeClientConfig {
                account: account.to_string(),
                role: None,
                warehouse: settings.snowflake_warehouse.clone(),
                database: settings.snowflake_database.clone(),
                schema: settings.snowflake_schema.clone(),
                timeout: None,
            },
        )?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait(?Send)]
impl UsageSource for SnowflakeSource {
    async fn fetch_weekly_usage(&self) -> Result<Vec<RawUsageRow>> {
        // The session lives only in this scope; it is dropped on every return path
        let session = self.client.create_session().await?;
        let rows = session.query(WEEKLY_USAGE_QUERY).await?;
        drop(session);

        rows.iter().map(snowflake_row).collect()
    }
}

/// Map one result row onto a [`RawUsageRow`], reading each column by alias
fn raw_row<F, E>(get: F) -> Result<RawUsageRow>
where
    F: Fn(&str) -> std::result::Result<String, E>,
    E: std::fmt::Display,
{
    let column = |name: &str, account: &str| {
        get(name).map_err(|e| ReportError::Format {
            account: account.to_string(),
            value: format!("column {}: {}", name, e),
        })
    };

    let account_name = column(COL_ACCOUNT_NAME, "<unknown>")?;
    Ok(RawUsageRow {
        amount_a: column(COL_USAGE_PRIOR, &account_name)?,
        label_a: column(COL_RANGE_PRIOR, &account_name)?,
        amount_b: column(COL_USAGE_LATEST, &account_name)?,
        label_b: column(COL_RANGE_LATEST, &account_name)?,
        account_name,
    })
}

fn snowflake_row(row: &SnowflakeRow) -> Result<RawUsageRow> {
    raw_row(|name| row.get::<String>(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(
        columns: &[(&str, &str)],
    ) -> impl Fn(&str) -> std::result::Result<String, String> {
        let map: HashMap<String, String> = columns
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned().ok_or_else(|| "no such column".to_string())
    }

    #[test]
    fn test_raw_row_maps_older_window_first() {
        let row = raw_row(lookup(&[
            (COL_ACCOUNT_NAME, "Acme"),
            (COL_USAGE_PRIOR, "80.00"),
            (COL_RANGE_PRIOR, "2024-05-01 to 2024-05-07"),
            (COL_USAGE_LATEST, "60.00"),
            (COL_RANGE_LATEST, "2024-05-08 to 2024-05-14"),
        ]))
        .unwrap();

        assert_eq!(
            row,
            RawUsageRow::from_tuple((
                "Acme",
                "80.00",
                "2024-05-01 to 2024-05-07",
                "60.00",
                "2024-05-08 to 2024-05-14",
            ))
        );
    }

    #[test]
    fn test_raw_row_missing_column_is_format_error() {
        let result = raw_row(lookup(&[
            (COL_ACCOUNT_NAME, "Acme"),
            (COL_USAGE_PRIOR, "80.00"),
            (COL_RANGE_PRIOR, "2024-05-01 to 2024-05-07"),
        ]));

        match result {
            Err(ReportError::Format { account, value }) => {
                assert_eq!(account, "Acme");
                assert!(value.contains(COL_USAGE_LATEST));
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }
}
