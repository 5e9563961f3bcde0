pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

/// Config-driven commands dispatched through [`run_command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Summary,
    Progress,
    Proposals,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Studio tracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Summary => cli::summary::run(&config.projects, &config.currency),
        AppCommand::Progress => cli::progress::run(&config.projects),
        AppCommand::Proposals => cli::proposal::run(&config.proposals, &config.currency),
    }
}
