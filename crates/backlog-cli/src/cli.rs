//! CLI argument definitions.

use std::path::PathBuf;

use backlog_catalog::{API_BASE, AUTH_ENDPOINT};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "backlog-export",
    version,
    about = "Turn a game-backlog CSV export into a report and look up IGDB metadata",
    long_about = "Rename and filter the columns of an Infinite Backlog CSV export into \
                  the backlog report schema.\n\n\
                  Also fetches game and genre records from the IGDB catalog."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a backlog report CSV from a backlog export.
    Export(ExportArgs),

    /// Show the column mapping used for reports.
    Mapping(MappingArgs),

    /// Fetch a game record from IGDB.
    Game(LookupArgs),

    /// Fetch a genre record from IGDB.
    Genre(LookupArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Backlog CSV export to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report file to write (default: <INPUT stem>-report.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON mapping file with `source_names` and `target_names` arrays.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Generate and summarize the report without writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct MappingArgs {
    /// JSON mapping file to show instead of the built-in one.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// IGDB record id.
    #[arg(value_name = "ID")]
    pub id: u64,

    #[command(flatten)]
    pub credentials: CredentialArgs,
}

#[derive(Args)]
pub struct CredentialArgs {
    /// Twitch application client id.
    #[arg(long = "client-id", env = "IGDB_CLIENT_ID")]
    pub client_id: String,

    /// Twitch application client secret.
    #[arg(long = "client-secret", env = "IGDB_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    /// OAuth token endpoint.
    #[arg(long = "auth-url", value_name = "URL", default_value = AUTH_ENDPOINT)]
    pub auth_url: String,

    /// IGDB API base URL.
    #[arg(long = "api-base", value_name = "URL", default_value = API_BASE)]
    pub api_base: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_export_flags() {
        let cli = Cli::parse_from([
            "backlog-export",
            "export",
            "backlog.csv",
            "-o",
            "report.csv",
            "--dry-run",
        ]);
        let Command::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.input, PathBuf::from("backlog.csv"));
        assert_eq!(args.output, Some(PathBuf::from("report.csv")));
        assert!(args.dry_run);
    }

    #[test]
    fn test_parses_lookup_credentials() {
        let cli = Cli::parse_from([
            "backlog-export",
            "game",
            "1234",
            "--client-id",
            "id",
            "--client-secret",
            "secret",
        ]);
        let Command::Game(args) = cli.command else {
            panic!("expected game command");
        };
        assert_eq!(args.id, 1234);
        assert_eq!(args.credentials.client_id, "id");
        assert_eq!(args.credentials.api_base, API_BASE);
    }
}
