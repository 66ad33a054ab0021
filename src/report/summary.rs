use super::shaper::{fixed, parse_amount, UsageRecord};
use crate::config::ZeroPriorPolicy;
use crate::error::Result;
use rust_decimal::Decimal;

/// Week-over-week sentences, one per qualifying account, joined by newlines
pub fn summarize(records: &[UsageRecord], policy: ZeroPriorPolicy) -> Result<String> {
    let mut messages = Vec::new();
    for record in records {
        if let Some(line) = summarize_record(record, policy)? {
            messages.push(line);
        }
    }
    Ok(messages.join("\n"))
}

fn summarize_record(record: &UsageRecord, policy: ZeroPriorPolicy) -> Result<Option<String>> {
    // Labels start with the ISO start date, so lexical order is chronological
    let mut labels: Vec<&String> = record.periods.keys().collect();
    labels.sort();

    let [.., prior_label, latest_label] = labels.as_slice() else {
        return Ok(None);
    };

    let account = &record.account_name;
    let prior = parse_amount(account, &record.periods[*prior_label])?;
    let latest = parse_amount(account, &record.periods[*latest_label])?;

    if prior.is_zero() {
        return Ok(match policy {
            ZeroPriorPolicy::Skip => None,
            ZeroPriorPolicy::Report if latest.is_zero() => None,
            ZeroPriorPolicy::Report => Some(format!(
                "The usage for {} last week was ${} with no usage the week before.",
                account,
                fixed(latest, 2)
            )),
        });
    }

    let Some(percentage_diff) = (latest - prior)
        .checked_div(prior)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    else {
        tracing::warn!("Skipping trend for {}: percentage out of range", account);
        return Ok(None);
    };

    let direction = if percentage_diff > Decimal::ZERO {
        "higher"
    } else {
        "lower"
    };

    Ok(Some(format!(
        "The usage for {} last week was {}% {} than the week before.",
        account,
        fixed(percentage_diff.abs(), 2),
        direction
    )))
}
