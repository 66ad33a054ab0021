use super::{ChatTransport, PostResponse};
use crate::config::{required, ChannelId, Settings, SLACK_TOKEN};
use crate::error::Result;
use serde::Serialize;

/// Slack Web API endpoint for posting a message
pub const SLACK_POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

#[derive(Debug, Serialize)]
struct PostMessage<'a> {
    channel: &'a str,
    text: &'a str,
}

/// `chat.postMessage` client authenticated with a bot token
pub struct SlackClient {
    http: reqwest::Client,
    token: Option<String>,
    url: String,
}

impl SlackClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: settings.slack_token.clone(),
            url: SLACK_POST_MESSAGE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (e.g. a proxy)
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

#[async_trait::async_trait(?Send)]
impl ChatTransport for SlackClient {
    async fn post_message(&self, channel: &ChannelId, text: &str) -> Result<PostResponse> {
        let token = required(&self.token, SLACK_TOKEN)?;

        // Slack reports most failures as 200 with `"ok": false`; only the status is checked
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(token)
            .json(&PostMessage {
                channel: channel.as_str(),
                text,
            })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(PostResponse { status, body })
    }
}
