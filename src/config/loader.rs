use super::defaults::*;
use super::types::{Settings, ZeroPriorPolicy};
use std::collections::HashMap;

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through `lookup`.
    ///
    /// Missing required values are logged and left as `None`; the run only
    /// fails once something actually needs them.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut values: HashMap<&str, String> = HashMap::new();
        for name in REQUIRED_VARS {
            match lookup(name) {
                Some(value) if !value.is_empty() => {
                    values.insert(name, value);
                }
                _ => tracing::error!("Environment variable {} is not set.", name),
            }
        }

        let zero_prior = match lookup(ZERO_PRIOR_VAR) {
            Some(value) if !value.is_empty() => ZeroPriorPolicy::parse(&value).unwrap_or_else(|| {
                tracing::warn!(
                    "Ignoring {}={:?}, expected `skip` or `report`",
                    ZERO_PRIOR_VAR,
                    value
                );
                ZeroPriorPolicy::default()
            }),
            _ => ZeroPriorPolicy::default(),
        };

        Settings {
            snowflake_account: values.remove(SNOWFLAKE_ACCOUNT),
            snowflake_user: values.remove(SNOWFLAKE_USER),
            snowflake_password: values.remove(SNOWFLAKE_PASSWORD),
            snowflake_warehouse: values.remove(SNOWFLAKE_WAREHOUSE),
            snowflake_database: values.remove(SNOWFLAKE_DATABASE),
            snowflake_schema: values.remove(SNOWFLAKE_SCHEMA),
            slack_token: values.remove(SLACK_TOKEN),
            slack_channels: values.remove(SLACK_CHANNELS),
            zero_prior,
            dry_run: lookup(DRY_RUN_VAR).is_some_and(|v| !v.is_empty()),
        }
    }
}

/// Dump every environment variable at info level.
///
/// Values are logged verbatim, secrets included; only use where the log
/// sink is trusted.
pub fn print_variables() {
    for (name, value) in std::env::vars() {
        tracing::info!("{}: {}", name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_all_required() {
        let pairs: Vec<(&str, &str)> = REQUIRED_VARS.iter().map(|name| (*name, "x")).collect();
        let settings = Settings::from_lookup(lookup_from(&pairs));

        assert_eq!(settings.snowflake_account.as_deref(), Some("x"));
        assert_eq!(settings.snowflake_schema.as_deref(), Some("x"));
        assert_eq!(settings.slack_token.as_deref(), Some("x"));
        assert_eq!(settings.zero_prior, ZeroPriorPolicy::Skip);
        assert!(!settings.dry_run);
    }

    fn populated(settings: &Settings) -> Vec<&Option<String>> {
        [
            &settings.snowflake_account,
            &settings.snowflake_user,
            &settings.snowflake_password,
            &settings.snowflake_warehouse,
            &settings.snowflake_database,
            &settings.snowflake_schema,
            &settings.slack_token,
            &settings.slack_channels,
        ]
        .into_iter()
        .filter(|value| value.is_some())
        .collect()
    }

    #[test]
    fn test_each_required_var_fills_its_own_field() {
        for name in REQUIRED_VARS {
            let settings = Settings::from_lookup(lookup_from(&[(name, name)]));
            let filled = populated(&settings);
            assert_eq!(filled.len(), 1, "{} filled {} fields", name, filled.len());
            assert_eq!(filled[0].as_deref(), Some(name));
        }

        let settings = Settings::from_lookup(lookup_from(&[(SNOWFLAKE_WAREHOUSE, "COMPUTE_WH")]));
        assert_eq!(settings.snowflake_warehouse.as_deref(), Some("COMPUTE_WH"));
    }

    #[test]
    fn test_from_lookup_empty_is_missing() {
        let settings = Settings::from_lookup(lookup_from(&[
            (SNOWFLAKE_USER, ""),
            (SLACK_TOKEN, "xoxb-token"),
        ]));

        assert!(settings.snowflake_user.is_none());
        assert!(settings.snowflake_password.is_none());
        assert_eq!(settings.slack_token.as_deref(), Some("xoxb-token"));
    }

    #[test]
    fn test_from_lookup_optional_knobs() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ZERO_PRIOR_VAR, "report"),
            (DRY_RUN_VAR, "1"),
        ]));
        assert_eq!(settings.zero_prior, ZeroPriorPolicy::Report);
        assert!(settings.dry_run);

        let settings = Settings::from_lookup(lookup_from(&[(ZERO_PRIOR_VAR, "bogus")]));
        assert_eq!(settings.zero_prior, ZeroPriorPolicy::Skip);
    }
}
