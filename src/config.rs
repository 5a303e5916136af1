use crate::error::{RbResult, RecordError};
use clap::parser::ValueSource;
use clap::{ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub loader: LoaderParams,
    #[command(flatten)]
    pub report: ReportParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderParams {
    /// Field separator for batch input files
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
    /// Treat the first record of a batch file as a header
    #[arg(long, default_value_t = false)]
    pub has_headers: bool,
    /// Skip malformed records instead of failing the whole batch
    #[arg(long, default_value_t = false)]
    pub skip_invalid: bool,
}

impl Default for LoaderParams {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_headers: false,
            skip_invalid: false,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Plain,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportParams {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    /// Also list every individual record break
    #[arg(long = "events", default_value_t = false)]
    pub show_events: bool,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            show_events: false,
        }
    }
}

impl LoaderParams {
    /// The csv reader only accepts single-byte delimiters.
    pub fn delimiter_byte(&self) -> RbResult<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(|b| b.is_ascii())
            .ok_or_else(|| {
                RecordError::Config(format!(
                    "delimiter '{}' must be a single ASCII character",
                    self.delimiter
                ))
            })
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RbResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays values the user typed on the command line onto `self`.
    /// Clap defaults never override values loaded from a file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.loader.merge_from_cli(&cli.loader, matches);
        self.report.merge_from_cli(&cli.report, matches);
    }
}

// `matches` must come from a command that defines every merged argument.
macro_rules! update_if_present {
    ($target:ident, $cli:ident, $matches:ident, $field:ident, $arg_name:expr) => {
        if $matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
            $target.$field = $cli.$field.clone();
        }
    };
}

impl LoaderParams {
    pub fn merge_from_cli(&mut self, cli: &LoaderParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, delimiter, "delimiter");
        update_if_present!(self, cli, matches, has_headers, "has_headers");
        update_if_present!(self, cli, matches, skip_invalid, "skip_invalid");
    }
}

impl ReportParams {
    pub fn merge_from_cli(&mut self, cli: &ReportParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, format, "format");
        update_if_present!(self, cli, matches, show_events, "show_events");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_round_trips_through_strum() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let params = LoaderParams {
            delimiter: 'é',
            ..Default::default()
        };
        assert!(matches!(
            params.delimiter_byte(),
            Err(RecordError::Config(_))
        ));
        assert_eq!(LoaderParams::default().delimiter_byte().unwrap(), b',');
    }
}
