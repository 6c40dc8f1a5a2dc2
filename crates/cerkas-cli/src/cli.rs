//! CLI argument definitions for the cerkas list view client.

use std::path::PathBuf;

use cerkas_cli::output::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cerkas",
    version,
    about = "Render cerkas admin list views from a layout/data backend",
    long_about = "Fetch a view layout and its data rows from a cerkas backend and render \
                  the layout-driven table.\n\n\
                  The layout request always completes before the data request is sent; \
                  the data request selects every field of the layout's first table."
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

    /// Settings file (default: settings.toml in the platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch and render one list view.
    View(ViewArgs),

    /// Print the effective settings as TOML.
    Config,
}

#[derive(Parser)]
pub struct ViewArgs {
    /// Route as t/{tenant}/p/{product}/o/{object}/view/{view}, or the four codes.
    #[arg(value_name = "ROUTE", num_args = 1..=4, required = true)]
    pub route: Vec<String>,

    /// Backend base URL (overrides settings and CERKAS_BASE_URL).
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Show metadata columns (created_at, id, ...) in every table.
    #[arg(long = "show-metadata")]
    pub show_metadata: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Expand the route parameter panel.
    #[arg(long = "show-params")]
    pub show_params: bool,

    /// Expand the raw layout response panel.
    #[arg(long = "show-layout-response")]
    pub show_layout_response: bool,

    /// Expand the raw data response panel.
    #[arg(long = "show-data-response")]
    pub show_data_response: bool,

    /// Page requested from the backend.
    #[arg(long = "page", value_name = "N")]
    pub page: Option<u32>,

    /// Rows per page requested from the backend.
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<u32>,

    /// Per-request timeout in seconds (default: wait indefinitely).
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Html,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => Self::Table,
            OutputFormatArg::Html => Self::Html,
            OutputFormatArg::Json => Self::Json,
        }
    }
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
