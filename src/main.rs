use std::io;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};
use usage_report::cli::Cli;
use usage_report::config::{print_variables, Settings};
use usage_report::notify::SlackClient;
use usage_report::pipeline;
use usage_report::utils::block_on;
use usage_report::warehouse::SnowflakeSource;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Diagnostics go to stderr; stdout only carries the report table
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Application started");

    if cli.print_env {
        print_variables();
    }

    let mut settings = Settings::from_env();
    settings.dry_run |= cli.dry_run;

    let source = SnowflakeSource::new(&settings)?;
    let transport = SlackClient::new(&settings);
    let stdout = io::stdout();

    block_on(pipeline::run(
        &source,
        &transport,
        &settings,
        &mut stdout.lock(),
    ))?;

    tracing::info!("Application finished");
    Ok(())
}
