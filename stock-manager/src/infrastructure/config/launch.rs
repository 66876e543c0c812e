//! Command-line launch options

use std::path::PathBuf;

use super::{AppConfig, ConfigError};

pub const USAGE: &str = "\
stock-manager: keeps stock records behind HTML forms and a JSON API

Usage: stock-manager [--config <file>] [--in-memory]

  -c, --config <file>   read settings from a JSON file
      --in-memory       keep rows in process memory, no PostgreSQL
  -h, --help            show this text

HOST, PORT and DATABASE_URL override the file; RUST_LOG sets the log filter.
";

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    Help,
    Serve(LaunchOptions),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub config_path: Option<PathBuf>,
    pub in_memory: bool,
}

impl Launch {
    /// Parse arguments, program name excluded
    pub fn parse<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut options = LaunchOptions::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Launch::Help),
                "-c" | "--config" => {
                    let path = args.next().ok_or_else(|| {
                        ConfigError::Invalid(format!("{arg} needs a file path"))
                    })?;
                    options.config_path = Some(PathBuf::from(path));
                }
                "--in-memory" => options.in_memory = true,
                other => {
                    return Err(ConfigError::Invalid(format!("unknown argument: {other}")));
                }
            }
        }

        Ok(Launch::Serve(options))
    }
}

impl LaunchOptions {
    /// File settings (or defaults) with environment overrides on top
    pub fn load_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading configuration");
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };
        config.apply_env()?;
        Ok(config)
    }
}
