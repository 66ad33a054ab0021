use super::shaper::{UsageRecord, ACCOUNT_NAME_KEY};
use comfy_table::{ContentArrangement, Table};

/// Printed instead of an empty console table
pub const NO_DATA_NOTICE: &str = "No data available to display.";

/// Org-mode style: `|` columns, `|---+---|` under the header, no outer box
const NOTIFICATION_PRESET: &str = "||  |-+||          ";

/// Boxed ASCII: `+---+` rules around the table and under the header only
const CONSOLE_PRESET: &str = "||--+-++|    ++++++";

/// Display copy with every amount prefixed by `$`; the input is left untouched
pub fn with_currency(records: &[UsageRecord]) -> Vec<UsageRecord> {
    records
        .iter()
        .map(|record| UsageRecord {
            account_name: record.account_name.clone(),
            periods: record
                .periods
                .iter()
                .map(|(label, amount)| (label.clone(), format!("${}", amount)))
                .collect(),
        })
        .collect()
}

/// Plain aligned table used in the Slack message. Empty input renders as "".
pub fn render_notification_table(records: &[UsageRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }
    build_table(&with_currency(records), NOTIFICATION_PRESET).to_string()
}

/// Boxed table for stdout, or [`NO_DATA_NOTICE`] when there is nothing to show
pub fn render_console_table(records: &[UsageRecord]) -> String {
    if records.is_empty() {
        return NO_DATA_NOTICE.to_string();
    }
    build_table(&with_currency(records), CONSOLE_PRESET).to_string()
}

fn build_table(records: &[UsageRecord], preset: &str) -> Table {
    // Headers come from the first record; later records fill missing keys with ""
    let headers: Vec<&str> = records
        .first()
        .map(|first| first.keys().collect())
        .unwrap_or_else(|| vec![ACCOUNT_NAME_KEY]);

    let mut table = Table::new();
    table
        .load_preset(preset)
        .force_no_tty()
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(headers.clone());

    for record in records {
        let row: Vec<&str> = headers
            .iter()
            .map(|key| record.get(key).unwrap_or(""))
            .collect();
        table.add_row(row);
    }
    table
}
