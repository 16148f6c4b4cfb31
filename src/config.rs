use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::ContentKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log filter {directive:?}: {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to initialize tracing: {0}")]
    TracingInit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// ログの出力形式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable output on stderr
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// 集計結果の出力形式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level (`RUST_LOG` takes precedence when set)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the cluster taxonomy as JSON
    Clusters,
    /// Classify one item or a JSON array of items
    Classify {
        /// Content kind the items belong to
        #[arg(long, value_enum)]
        kind: ContentKind,

        /// Input file (defaults to stdin, `-` also means stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Summarise an inventory of assets, courses, live classrooms and search sections
    Summarise {
        /// Input file (defaults to stdin, `-` also means stdin)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn classify_parses_kebab_case_kind() {
        let cli = Cli::try_parse_from([
            "learning-clusters",
            "classify",
            "--kind",
            "live-classroom",
            "--input",
            "items.json",
        ])
        .expect("parse");
        match cli.command {
            Command::Classify { kind, input } => {
                assert_eq!(kind, ContentKind::LiveClassroom);
                assert_eq!(input, Some(PathBuf::from("items.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn summarise_accepts_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "learning-clusters",
            "summarise",
            "--format",
            "text",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .expect("parse");
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(matches!(
            cli.command,
            Command::Summarise {
                format: OutputFormat::Text,
                input: None
            }
        ));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = Cli::try_parse_from(["learning-clusters", "classify", "--kind", "podcast"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_level_maps_to_tracing_level() {
        assert_eq!(tracing::Level::from(LogLevel::Trace), tracing::Level::TRACE);
        assert_eq!(LogLevel::Warn.as_str(), "warn");
    }
}
