pub mod shaper;
pub mod summary;
pub mod table;

pub use shaper::{shape_rows, UsageRecord, ACCOUNT_NAME_KEY};
pub use summary::summarize;
pub use table::{render_console_table, render_notification_table, with_currency, NO_DATA_NOTICE};

/// Wrap the table and summary in a Slack code block
pub fn message_text(table: &str, summary: &str) -> String {
    format!("```\n{}\n\n{}```", table, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_text() {
        assert_eq!(message_text("| a |", "up"), "```\n| a |\n\nup```");
        assert_eq!(message_text("| a |", ""), "```\n| a |\n\n```");
    }
}
