use std::path::PathBuf;

use clap::Subcommand;
use dockwatch_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show {
        /// Path to the config file (defaults to the user config dir)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { config } => {
            let config = Config::load(config.as_deref())?;
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
