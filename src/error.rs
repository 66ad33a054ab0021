/// Errors raised while producing the weekly usage report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("environment variable {name} is not set")]
    ConfigMissing { name: &'static str },

    #[error("SLACK_CHANNELS is not a JSON list of channel ids: {0}")]
    InvalidChannels(#[source] serde_json::Error),

    #[error("warehouse error: {0}")]
    Connection(String),

    #[error("cannot format usage amount {value:?} for account {account:?}")]
    Format { account: String, value: String },

    #[error("failed to post to channel {channel}: status {status}: {body}")]
    Notification {
        channel: String,
        status: u16,
        body: String,
    },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to write report output: {0}")]
    Io(#[from] std::io::Error),
}

impl From<snowflake_connector_rs::Error> for ReportError {
    fn from(error: snowflake_connector_rs::Error) -> Self {
        ReportError::Connection(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
