use std::path::PathBuf;

use clap::Args;
use dockwatch_core::integrations::{credentials, sheets::SheetSource, webhook::WebhookClient};
use dockwatch_core::{alert, clock, config, shift, Config};

#[derive(Args)]
pub struct RunArgs {
    /// Path to the config file (defaults to the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Skip the companion image even if it exists on disk
    #[arg(long)]
    pub no_image: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_async(args))
}

async fn run_async(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args.config.as_deref())?;
    let webhook_url = config::require_env(config::ENV_WEBHOOK_URL)?;
    let spreadsheet_id = config::require_env(config::ENV_SPREADSHEET_ID)?;
    let creds = credentials::from_env()?;

    // One "now" for the whole invocation: the same instant drives the
    // shift lookup and every minutes-remaining computation.
    let now = clock::now();

    let source = SheetSource::new(spreadsheet_id, creds.access_token);
    let tasks = source
        .fetch(&config.sheet.worksheet, &config.sheet.range)
        .await?;

    let buckets = alert::bucket_tasks(&tasks, now);
    let Some(report) = alert::compose(&buckets) else {
        println!("no departures within alert range, nothing sent");
        return Ok(());
    };

    let ctx = shift::resolve(now);
    let recipients = config.roster.on_duty(ctx.shift, ctx.reference_date);
    println!(
        "active shift: {} ({} of {} on duty)",
        ctx.shift.display_name(),
        recipients.len(),
        config.roster.assigned(ctx.shift).len()
    );

    let webhook = WebhookClient::new(webhook_url);
    webhook.send_text(&report, &recipients).await?;
    if !args.no_image {
        webhook.send_image(&config.alert.image_path).await?;
    }
    println!("alert sent");
    Ok(())
}
