use std::path::PathBuf;

use clap::Args;
use dockwatch_core::integrations::{credentials, sheets::SheetSource};
use dockwatch_core::{alert, clock, config, Config};

#[derive(Args)]
pub struct PreviewArgs {
    /// Path to the config file (defaults to the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: PreviewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_async(args))
}

async fn run_async(args: PreviewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args.config.as_deref())?;
    let spreadsheet_id = config::require_env(config::ENV_SPREADSHEET_ID)?;
    let creds = credentials::from_env()?;

    let now = clock::now();
    let source = SheetSource::new(spreadsheet_id, creds.access_token);
    let tasks = source
        .fetch(&config.sheet.worksheet, &config.sheet.range)
        .await?;

    let buckets = alert::bucket_tasks(&tasks, now);
    match alert::compose(&buckets) {
        Some(report) => println!("{report}"),
        None => println!("no departures within alert range"),
    }
    Ok(())
}
