//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and the resolved configuration handed to the batch run.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use structopt::StructOpt;
use strum::VariantNames;
use strum_macros::{Display, EnumString, VariantNames as VariantNamesMacro};

use crate::config::constants::{
    DEFAULT_INPUT_FILE, DEFAULT_SEPARATOR, DNS_TIMEOUT_SECS, NAMESERVER, OUTPUT_EXTENSION,
    OUTPUT_SUFFIX,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, VariantNamesMacro)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, VariantNamesMacro)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Resolver configuration for one batch run.
///
/// Passed explicitly to [`crate::initialization::init_resolver`]; nothing about
/// the resolver lives in process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Nameserver every query is sent to (UDP)
    pub nameserver: SocketAddr,
    /// Per-query timeout
    pub timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            nameserver: NAMESERVER,
            timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// Built from [`Opt`] by the binary, or directly by library users.
///
/// # Examples
///
/// ```no_run
/// use dns_batch::Config;
///
/// let config = Config::new("domains.txt");
/// assert_eq!(config.output, std::path::PathBuf::from("domains-result.xlsx"));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read domains from, one per line
    pub input: PathBuf,
    /// Workbook to write
    pub output: PathBuf,
    /// Separator between multiple values in one cell
    pub separator: String,
    /// Resolver settings
    pub resolver: ResolverSettings,
}

impl Config {
    /// Creates a configuration for `input` with the derived output path and
    /// default separator and resolver settings.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = default_output_path(&input);
        Self {
            input,
            output,
            separator: DEFAULT_SEPARATOR.to_string(),
            resolver: ResolverSettings::default(),
        }
    }
}

/// Derives the output path from the input path.
///
/// `dir/name.txt` becomes `dir/name-result.xlsx`. Only the last extension is
/// removed, so `a.b.txt` becomes `a.b-result.xlsx`; a file without an
/// extension keeps its whole name.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}"))
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Read the default input file (DNS解析.txt)
/// dns_batch
///
/// # Explicit input, output next to it as domains-result.xlsx
/// dns_batch -i domains.txt
///
/// # Explicit output and newline-separated cells
/// dns_batch -i domains.txt -o out.xlsx --separator $'\n'
/// ```
#[derive(Debug, StructOpt)]
#[structopt(
    name = "dns_batch",
    about = "Resolves A, AAAA and CNAME records for a list of domains and writes them to an Excel file."
)]
pub struct Opt {
    /// The input dns query file, one domain per line
    #[structopt(short = "i", long = "input", parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// The output result file (default: <input stem>-result.xlsx next to the input)
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[structopt(
        long,
        default_value = "info",
        possible_values = LogLevel::VARIANTS,
        case_insensitive = true
    )]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[structopt(
        long,
        default_value = "plain",
        possible_values = LogFormat::VARIANTS,
        case_insensitive = true
    )]
    pub log_format: LogFormat,

    /// Separator between multiple records of the same type in one cell
    #[structopt(long, default_value = ", ")]
    pub separator: String,
}

impl Opt {
    /// Resolves defaults and converts the options into a [`Config`].
    ///
    /// Logs the input and output paths; call after the logger is initialized.
    pub fn into_config(self) -> Config {
        let input = match self.input {
            Some(input) => input,
            None => {
                info!("No input specified, using the default {DEFAULT_INPUT_FILE}");
                PathBuf::from(DEFAULT_INPUT_FILE)
            }
        };
        let output = self
            .output
            .unwrap_or_else(|| default_output_path(&input));

        info!("The input file is {}", input.display());
        info!("The output file is {}", output.display());

        Config {
            input,
            output,
            separator: self.separator,
            resolver: ResolverSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_strips_last_extension() {
        assert_eq!(
            default_output_path(Path::new("data/domains.txt")),
            PathBuf::from("data/domains-result.xlsx")
        );
        assert_eq!(
            default_output_path(Path::new("a.b.txt")),
            PathBuf::from("a.b-result.xlsx")
        );
    }

    #[test]
    fn test_default_output_path_without_extension() {
        assert_eq!(
            default_output_path(Path::new("/tmp/domains")),
            PathBuf::from("/tmp/domains-result.xlsx")
        );
    }

    #[test]
    fn test_default_output_path_non_ascii_name() {
        assert_eq!(
            default_output_path(Path::new(DEFAULT_INPUT_FILE)),
            PathBuf::from("DNS解析-result.xlsx")
        );
    }

    #[test]
    fn test_resolver_settings_default_uses_fixed_nameserver() {
        let settings = ResolverSettings::default();
        assert_eq!(settings.nameserver, NAMESERVER);
        assert_eq!(settings.nameserver.port(), 53);
        assert_eq!(settings.timeout, Duration::from_secs(DNS_TIMEOUT_SECS));
    }

    #[test]
    fn test_log_level_parsing_is_case_insensitive() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }

    #[test]
    fn test_opt_into_config_defaults() {
        let opt = Opt::from_iter_safe(["dns_batch"]).expect("no args should parse");
        let config = opt.into_config();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT_FILE));
        assert_eq!(config.output, PathBuf::from("DNS解析-result.xlsx"));
        assert_eq!(config.separator, DEFAULT_SEPARATOR);
        assert_eq!(config.resolver, ResolverSettings::default());
    }

    #[test]
    fn test_opt_into_config_explicit_output() {
        let opt = Opt::from_iter_safe(["dns_batch", "-i", "in.txt", "-o", "custom.xlsx"])
            .expect("should parse");
        let config = opt.into_config();
        assert_eq!(config.input, PathBuf::from("in.txt"));
        assert_eq!(config.output, PathBuf::from("custom.xlsx"));
    }
}
