use std::path::{Path, PathBuf};

mod admin;
mod config;
mod professor;
mod prompt;
mod render;
mod session;
mod student;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use registry::{Config, Directory};
use tracing::instrument;

use self::prompt::TerminalPrompt;

/// Configuration file looked up in the working directory when `--config` is
/// not given.
const DEFAULT_CONFIG: &str = "registry.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the configuration file (default: ./registry.toml, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        match self.command.unwrap_or(Command::Session) {
            Command::Session => {
                let config = load_config(self.config.as_deref())?;
                run_session(&config)
            }
            Command::Config(command) => {
                let path = self.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
                command.run(&path)
            }
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // Dashboards own stdout.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Start an interactive session (default)
    ///
    /// The registry starts empty and is discarded when the session ends.
    Session,

    /// Manage the configuration file
    Config(config::Command),
}

#[instrument(skip(config))]
fn run_session(config: &Config) -> anyhow::Result<()> {
    terminal::set_colors_enabled(config.colors);

    let mut directory = Directory::new();
    let mut prompt = TerminalPrompt;
    session::run(&mut prompt, &mut directory, config)
}

/// Loads the configuration.
///
/// An explicitly given path must load. The default path is optional, and a
/// broken default file falls back to defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()));
    }

    let path = Path::new(DEFAULT_CONFIG);
    if !path.exists() {
        return Ok(Config::default());
    }

    Ok(Config::load(path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    }))
}
