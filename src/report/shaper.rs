use crate::error::{ReportError, Result};
use crate::warehouse::RawUsageRow;
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Column heading for the account, always first in a record
pub const ACCOUNT_NAME_KEY: &str = "Account Name";

/// One account's usage keyed by the date-range labels the query produced
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRecord {
    pub account_name: String,
    /// Label -> amount with exactly two decimals, in query order
    pub periods: IndexMap<String, String>,
}

impl UsageRecord {
    /// `"Account Name"` followed by the period labels in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(ACCOUNT_NAME_KEY).chain(self.periods.keys().map(String::as_str))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        if key == ACCOUNT_NAME_KEY {
            Some(&self.account_name)
        } else {
            self.periods.get(key).map(String::as_str)
        }
    }
}

/// Parse a warehouse amount; accepts plain and scientific notation
pub fn parse_amount(account: &str, value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ReportError::Format {
            account: account.to_string(),
            value: value.to_string(),
        })
}

/// Round half away from zero and render with exactly `dp` decimals
pub fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(dp);
    rounded.to_string()
}

pub fn shape_row(row: &RawUsageRow) -> Result<UsageRecord> {
    let mut periods = IndexMap::with_capacity(2);
    for (label, amount) in [(&row.label_a, &row.amount_a), (&row.label_b, &row.amount_b)] {
        let amount = parse_amount(&row.account_name, amount)?;
        periods.insert(label.clone(), fixed(amount, 2));
    }

    Ok(UsageRecord {
        account_name: row.account_name.clone(),
        periods,
    })
}

/// Shape every row, keeping input order. The first malformed row fails the run.
pub fn shape_rows(rows: &[RawUsageRow]) -> Result<Vec<UsageRecord>> {
    rows.iter().map(shape_row).collect()
}
