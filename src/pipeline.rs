use crate::config::Settings;
use crate::error::Result;
use crate::notify::{notify_channels, ChatTransport, DeliveryReport};
use crate::report::{
    message_text, render_console_table, render_notification_table, shape_rows, summarize,
};
use crate::warehouse::UsageSource;
use std::io::Write;

/// How a report run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// The warehouse returned no rows; nothing was sent
    NoData,
    /// The message was printed instead of posted
    DryRun,
    Reported(DeliveryReport),
}

/// Fetch, shape, summarise and publish one weekly report.
///
/// Stages run strictly in order. Console output (the boxed table, the
/// no-data notice, or the dry-run message) goes to `out`.
pub async fn run<S, T, W>(
    source: &S,
    transport: &T,
    settings: &Settings,
    out: &mut W,
) -> Result<RunOutcome>
where
    S: UsageSource + ?Sized,
    T: ChatTransport + ?Sized,
    W: Write,
{
    tracing::info!("Getting data from the warehouse...");
    let rows = source.fetch_weekly_usage().await?;
    tracing::info!("Data received: {} rows.", rows.len());

    tracing::info!("Ordering data...");
    let records = shape_rows(&rows)?;
    tracing::debug!("Data: {:?}", records);

    if records.is_empty() {
        tracing::info!("No data to send to Slack.");
        writeln!(out, "{}", render_console_table(&records))?;
        return Ok(RunOutcome::NoData);
    }

    let table = render_notification_table(&records);
    let summary = summarize(&records, settings.zero_prior)?;
    let text = message_text(&table, &summary);

    let outcome = if settings.dry_run {
        tracing::info!("Dry run, not sending to Slack.");
        writeln!(out, "{}", text)?;
        RunOutcome::DryRun
    } else {
        let channels = settings.channels()?;
        tracing::info!("Sending the table to Slack...");
        let report = notify_channels(transport, &channels, &text).await;
        if !report.all_delivered() {
            tracing::warn!(
                "{} of {} channels failed",
                report.failed.len(),
                channels.len()
            );
        }
        RunOutcome::Reported(report)
    };

    writeln!(out, "{}", render_console_table(&records))?;
    Ok(outcome)
}
