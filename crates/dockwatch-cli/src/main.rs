use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dockwatch", version, about = "Dockwatch departure alert bot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full alert pipeline: fetch, compose, deliver
    Run(commands::run::RunArgs),
    /// Compose the report from the sheet without sending anything
    Preview(commands::preview::PreviewArgs),
    /// Show the active shift and who is on duty
    Shift(commands::shift::ShiftArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Preview(args) => commands::preview::run(args),
        Commands::Shift(args) => commands::shift::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
