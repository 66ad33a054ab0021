use super::defaults::SLACK_CHANNELS;
use crate::error::{ReportError, Result};
use serde::Deserialize;
use std::fmt;

/// Opaque Slack destination, e.g. `C0123456789` or `#finance`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub String);

impl ChannelId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(value: &str) -> Self {
        ChannelId(value.to_string())
    }
}

/// What the trend summary does with an account that had no usage the week before
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroPriorPolicy {
    /// Leave the account out of the summary
    #[default]
    Skip,
    /// Mention the account's new usage instead of a percentage
    Report,
}

impl ZeroPriorPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skip" => Some(ZeroPriorPolicy::Skip),
            "report" => Some(ZeroPriorPolicy::Report),
            _ => None,
        }
    }
}

/// Everything one report run needs, resolved once at startup
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub snowflake_account: Option<String>,
    pub snowflake_user: Option<String>,
    pub snowflake_password: Option<String>,
    pub snowflake_warehouse: Option<String>,
    pub snowflake_database: Option<String>,
    pub snowflake_schema: Option<String>,
    pub slack_token: Option<String>,
    /// Raw JSON list, parsed by [`Settings::channels`]
    pub slack_channels: Option<String>,
    pub zero_prior: ZeroPriorPolicy,
    pub dry_run: bool,
}

impl Settings {
    /// Parse `SLACK_CHANNELS` into channel ids
    pub fn channels(&self) -> Result<Vec<ChannelId>> {
        let raw = required(&self.slack_channels, SLACK_CHANNELS)?;
        serde_json::from_str(raw).map_err(ReportError::InvalidChannels)
    }
}

/// Turn a setting that was absent at load time into a `ConfigMissing` error
pub fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or(ReportError::ConfigMissing { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_parse_json_list() {
        let settings = Settings {
            slack_channels: Some(r##"["C01", "#finance"]"##.to_string()),
            ..Default::default()
        };
        let channels = settings.channels().unwrap();
        assert_eq!(channels, vec![ChannelId::from("C01"), ChannelId::from("#finance")]);
    }

    #[test]
    fn test_channels_missing_or_invalid() {
        let settings = Settings::default();
        assert!(matches!(
            settings.channels(),
            Err(ReportError::ConfigMissing {
                name: "SLACK_CHANNELS"
            })
        ));

        let settings = Settings {
            slack_channels: Some("C01,C02".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            settings.channels(),
            Err(ReportError::InvalidChannels(_))
        ));
    }

    #[test]
    fn test_zero_prior_policy_parse() {
        assert_eq!(ZeroPriorPolicy::parse("skip"), Some(ZeroPriorPolicy::Skip));
        assert_eq!(ZeroPriorPolicy::parse(" Report "), Some(ZeroPriorPolicy::Report));
        assert_eq!(ZeroPriorPolicy::parse("loud"), None);
        assert_eq!(ZeroPriorPolicy::default(), ZeroPriorPolicy::Skip);
    }
}
