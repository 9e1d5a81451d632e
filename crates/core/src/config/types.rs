use std::path::PathBuf;

use serde::Deserialize;

use crate::age::DateParser;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub parsing: ParsingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Extra date formats accepted for textual birthdays.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ParsingConfig {
    /// chrono `strftime` formats, tried after the built-in shapes
    #[serde(default)]
    pub formats: Vec<String>,
}

impl ParsingConfig {
    #[must_use]
    pub fn parser(&self) -> DateParser {
        DateParser::with_formats(self.formats.iter().cloned())
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    /// Bare ages, one per line
    Quiet,
}

impl OutputFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// File the settings came from; `None` when running on built-in defaults.
    pub source: Option<PathBuf>,
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}
