use std::path::PathBuf;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use clap::Args;
use dockwatch_core::{clock, shift, Config};

#[derive(Args)]
pub struct ShiftArgs {
    /// Path to the config file (defaults to the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Evaluate at this local time instead of now (format: DD/MM/YYYY HH:MM)
    #[arg(long)]
    pub at: Option<String>,
}

pub fn run(args: ShiftArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args.config.as_deref())?;
    let now = match &args.at {
        Some(raw) => parse_local(raw)?,
        None => clock::now(),
    };

    let ctx = shift::resolve(now);
    let assigned = config.roster.assigned(ctx.shift);
    let on_duty = config.roster.on_duty(ctx.shift, ctx.reference_date);

    println!("shift: {}", ctx.shift.display_name());
    println!(
        "reference day: {} (weekday {})",
        ctx.reference_date,
        ctx.reference_weekday()
    );
    println!("assigned: {}", assigned.join(", "));
    println!("on duty: {}", on_duty.join(", "));
    Ok(())
}

fn parse_local(raw: &str) -> Result<DateTime<Tz>, Box<dyn std::error::Error>> {
    let naive = NaiveDateTime::parse_from_str(raw.trim(), "%d/%m/%Y %H:%M")?;
    clock::ZONE
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| format!("'{raw}' is not a unique local time").into())
}
