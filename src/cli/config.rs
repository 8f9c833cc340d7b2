use std::path::Path;

use anyhow::Context;
use registry::Config;
use tracing::instrument;

use crate::cli::terminal::Colorize;

/// Create or inspect the configuration file
///
/// Available configuration keys:
///   `admin_username`  Username for the admin dashboard (default: admin)
///   `admin_password`  Password for the admin dashboard (default: admin123)
///   colors           Allow coloured output (default: true)
#[derive(Debug, clap::Parser)]
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },

    /// Show the configuration in effect
    Show,
}

impl Command {
    #[instrument]
    pub fn run(self, path: &Path) -> anyhow::Result<()> {
        match self.command {
            ConfigCommand::Init { force } => Self::init(path, force),
            ConfigCommand::Show => Self::show(path),
        }
    }

    fn init(path: &Path, force: bool) -> anyhow::Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite it)",
                path.display()
            );
        }

        Config::default()
            .save(path)
            .with_context(|| format!("failed to create {}", path.display()))?;

        println!("{}", format!("✅ Created {}", path.display()).success());
        Ok(())
    }

    fn show(path: &Path) -> anyhow::Result<()> {
        let config = if path.exists() {
            Config::load(path).with_context(|| format!("failed to load {}", path.display()))?
        } else {
            println!("{}", format!("{} not found, using defaults", path.display()).dim());
            Config::default()
        };

        println!("Configuration:");
        println!("  admin_username: {}", config.admin_username());
        println!("  admin_password: {}", "(hidden)".dim());
        println!("  colors: {}", config.colors);
        Ok(())
    }
}
