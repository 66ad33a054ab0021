/// One account's row exactly as the warehouse returned it.
///
/// Amounts are kept as the warehouse's text rendering; the row shaper is
/// responsible for turning them into numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct RawUsageRow {
    pub account_name: String,
    /// Usage for the older window
    pub amount_a: String,
    pub label_a: String,
    /// Usage for the most recent window
    pub amount_b: String,
    pub label_b: String,
}

impl RawUsageRow {
    /// Build from the positional (account, amount, label, amount, label) form
    pub fn from_tuple(
        (account_name, amount_a, label_a, amount_b, label_b): (&str, &str, &str, &str, &str),
    ) -> Self {
        Self {
            account_name: account_name.to_string(),
            amount_a: amount_a.to_string(),
            label_a: label_a.to_string(),
            amount_b: amount_b.to_string(),
            label_b: label_b.to_string(),
        }
    }
}
