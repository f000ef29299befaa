use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Process log files and build a per-endpoint response time report
#[derive(Parser, Debug, Clone)]
#[command(
    name = "endpoint-report",
    about = "Process log files and build a per-endpoint response time report",
    version
)]
pub struct Settings {
    /// Log files to process, in order
    #[arg(long = "file", value_name = "PATH", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// Report name (a label only; the report is always printed to the console)
    #[arg(long = "report", default_value = "average")]
    pub report_name: String,

    /// Logging level
    #[arg(
        long,
        env = "ENDPOINT_REPORT_LOG_LEVEL",
        default_value = "WARNING",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]
    )]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but with an explicit argument list.
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    fn resolve(mut settings: Settings) -> Settings {
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
