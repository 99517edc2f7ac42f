pub mod toml_config;

use crate::domain::model::LogFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use toml_config::{TomlConfig, LOG_LEVELS};

pub const DEFAULT_PROJECT_NAME: &str = "project-init";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Parser)]
#[command(name = "project-init")]
#[command(about = "Project starter: logs startup, runs the application hook, logs readiness")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Project name shown in log lines and the greeting
    #[arg(short, long)]
    pub name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log line format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            crate::utils::validation::validate_path("config", path)?;
        }
        if let Some(name) = &self.name {
            validate_non_empty_string("name", name)?;
        }
        Ok(())
    }
}

/// Settings after merging defaults, the config file and command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Layers a config file over the defaults. The file is validated first.
    pub fn with_file(mut self, file: &TomlConfig) -> Result<Self> {
        file.validate()?;

        self.project_name = file.project.name.clone();
        if let Some(level) = file.log_level() {
            self.log_level = level.to_ascii_lowercase();
        }
        if let Some(format) = file.log_format() {
            self.log_format = format;
        }
        Ok(self)
    }

    /// 命令列參數優先於設定檔
    pub fn with_overrides(
        mut self,
        name: Option<&str>,
        verbose: bool,
        log_format: Option<LogFormat>,
    ) -> Self {
        if let Some(name) = name {
            self.project_name = name.to_string();
        }
        if verbose {
            self.verbose = true;
            self.log_level = "debug".to_string();
        }
        if let Some(format) = log_format {
            self.log_format = format;
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        cli.validate()?;

        let mut config = Self::default();
        if let Some(path) = &cli.config {
            let file = TomlConfig::from_file(path)?;
            config = config.with_file(&file)?;
        }

        let config = config.with_overrides(cli.name.as_deref(), cli.verbose, cli.log_format);
        config.validate()?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("project_name", &self.project_name)?;
        validate_one_of("log_level", &self.log_level, &LOG_LEVELS)?;
        Ok(())
    }
}
