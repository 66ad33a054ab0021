use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "usage-report")]
#[command(version, about = "Post last week's warehouse usage per account to Slack")]
pub struct Cli {
    /// Log every environment variable before running (values included)
    #[arg(long = "print-env")]
    pub print_env: bool,

    /// Build the report and print the Slack message instead of sending it
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["usage-report"]).unwrap();
        assert!(!cli.print_env);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["usage-report", "--print-env", "--dry-run"]).unwrap();
        assert!(cli.print_env && cli.dry_run);
        assert!(Cli::try_parse_from(["usage-report", "--verbose"]).is_err());
    }
}
