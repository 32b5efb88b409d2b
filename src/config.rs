//! Configuration management for the skyscrapers checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (project or user level)
//!
//! Command-line values win over the config file, which wins over defaults.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::board::DEFAULT_PLACEHOLDER;

/// Board file validated when none is given.
pub const DEFAULT_BOARD: &str = "check.txt";

/// Config file looked up in the working directory.
pub const PROJECT_CONFIG: &str = "skyscrapers.toml";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// How the verdict is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `true` or `false`
    #[default]
    Text,
    /// A JSON object with the verdict and the violation found
    Json,
}

/// Command-line arguments for the skyscrapers checker
#[derive(Debug, Default, Parser)]
#[command(name = "skyscrapers-check")]
#[command(about = "Check a finished skyscrapers board against the puzzle rules")]
#[command(version)]
pub struct Args {
    /// Board file to validate
    #[arg(help = "Board file to validate (default: check.txt)")]
    pub board: Option<PathBuf>,

    /// Character marking an unfilled cell
    #[arg(long, help = "Character marking an unfilled cell (default: '?')")]
    pub placeholder: Option<char>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Describe the first broken rule when the board is rejected
    #[arg(long)]
    pub explain: bool,

    /// Explicit config file
    #[arg(long, help = "Config file (default: ./skyscrapers.toml)")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings read from a TOML config file
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub board: Option<PathBuf>,
    pub placeholder: Option<String>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Board file to validate
    pub board: PathBuf,
    /// Unfilled-cell marker
    pub placeholder: char,
    pub format: OutputFormat,
    pub explain: bool,
    pub log_level: String,
    /// Config file that was loaded, if any
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: PathBuf::from(DEFAULT_BOARD),
            placeholder: DEFAULT_PLACEHOLDER,
            format: OutputFormat::default(),
            explain: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            config_file: None,
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments and config files
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let config_file = match &args.config {
            Some(path) => Some(path.clone()),
            None => discover_config_file(),
        };

        let file = match &config_file {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };

        let mut config = Self::merge(args, file)?;
        config.config_file = config_file;
        Ok(config)
    }

    /// Layer command-line arguments over file settings over defaults
    pub fn merge(args: Args, file: FileConfig) -> Result<Self> {
        let defaults = Self::default();

        let placeholder = match (args.placeholder, file.placeholder) {
            (Some(ch), _) => ch,
            (None, Some(text)) => parse_placeholder(&text)?,
            (None, None) => defaults.placeholder,
        };

        Ok(Config {
            board: args.board.or(file.board).unwrap_or(defaults.board),
            placeholder,
            format: args.format.or(file.format).unwrap_or(defaults.format),
            explain: args.explain,
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
            config_file: None,
        })
    }
}

/// Project config in the working directory, else the user config directory
fn discover_config_file() -> Option<PathBuf> {
    let project = PathBuf::from(PROJECT_CONFIG);
    if project.is_file() {
        return Some(project);
    }

    dirs::config_dir()
        .map(|dir| dir.join("skyscrapers").join("config.toml"))
        .filter(|path| path.is_file())
}

fn parse_placeholder(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => bail!("placeholder must be a single character, got {:?}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::merge(Args::default(), FileConfig::default()).unwrap();
        assert_eq!(config.board, PathBuf::from("check.txt"));
        assert_eq!(config.placeholder, '?');
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, "warn");
        assert!(!config.explain);
    }

    #[test]
    fn test_args_override_file() {
        let args = Args {
            board: Some(PathBuf::from("puzzle.txt")),
            format: Some(OutputFormat::Json),
            ..Args::default()
        };
        let file = FileConfig {
            board: Some(PathBuf::from("other.txt")),
            placeholder: Some("_".to_string()),
            format: Some(OutputFormat::Text),
            log_level: Some("debug".to_string()),
        };

        let config = Config::merge(args, file).unwrap();
        assert_eq!(config.board, PathBuf::from("puzzle.txt"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.placeholder, '_');
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_long_placeholder() {
        let file = FileConfig {
            placeholder: Some("??".to_string()),
            ..FileConfig::default()
        };
        assert!(Config::merge(Args::default(), file).is_err());
    }

    #[test]
    fn test_parse_cli() {
        let args = Args::try_parse_from([
            "skyscrapers-check",
            "board.txt",
            "--placeholder",
            ".",
            "--format",
            "json",
            "--explain",
        ])
        .unwrap();
        assert_eq!(args.board, Some(PathBuf::from("board.txt")));
        assert_eq!(args.placeholder, Some('.'));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.explain);
    }
}
