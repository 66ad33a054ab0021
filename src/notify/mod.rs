pub mod slack;

pub use slack::{SlackClient, SLACK_POST_MESSAGE_URL};

use crate::config::ChannelId;
use crate::error::{ReportError, Result};

/// HTTP status and raw body of one post
#[derive(Debug, Clone, PartialEq)]
pub struct PostResponse {
    pub status: u16,
    pub body: String,
}

/// Delivers a text message to a single channel
#[async_trait::async_trait(?Send)]
pub trait ChatTransport {
    async fn post_message(&self, channel: &ChannelId, text: &str) -> Result<PostResponse>;
}

/// Per-channel outcome of a notification round
#[derive(Debug, Default)]
pub struct DeliveryReport {
    pub delivered: Vec<ChannelId>,
    pub failed: Vec<(ChannelId, ReportError)>,
}

impl DeliveryReport {
    pub fn all_delivered(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Post `text` to every channel in order.
///
/// A failing channel is logged and recorded; the remaining channels are
/// still attempted and nothing is returned as an error.
pub async fn notify_channels<T>(
    transport: &T,
    channels: &[ChannelId],
    text: &str,
) -> DeliveryReport
where
    T: ChatTransport + ?Sized,
{
    let mut report = DeliveryReport::default();

    for channel in channels {
        tracing::info!("Sending the table to Slack channel: {}...", channel);

        let outcome = match transport.post_message(channel, text).await {
            Ok(response) if response.status == 200 => {
                tracing::info!("Message sent successfully");
                tracing::info!("Response: {}", response.body);
                Ok(())
            }
            Ok(response) => Err(ReportError::Notification {
                channel: channel.to_string(),
                status: response.status,
                body: response.body,
            }),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                tracing::info!("Data sent to Slack for the {}", channel);
                report.delivered.push(channel.clone());
            }
            Err(e) => {
                tracing::error!("Failed to send message to {}: {}", channel, e);
                report.failed.push((channel.clone(), e));
            }
        }
    }

    report
}
