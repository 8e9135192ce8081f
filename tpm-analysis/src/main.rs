use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tpm_analysis_core::chart::ChartId;
use tpm_analysis_core::cli::{self, ConfigCmd, ExportArgs};
use tpm_analysis_core::conf::load_or_default;
use tpm_analysis_core::logging::{LogFormat, init_logging};
use tpm_analysis_core::model::OperationKind;

#[derive(Parser, Debug)]
#[command(
    name = "tpm-analysis",
    version,
    about = "Compare encryption benchmark timings with and without TPM"
)]
struct Cli {
    /// Path to the config file (defaults to ./tpm-analysis.hcl when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Diagnostic log format on stderr
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load every source and print the comparison tables (default)
    Report {
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Only show charts for one operation
        #[arg(long, value_enum)]
        operation: Option<OperationKind>,
    },

    /// Export charts as PNG images
    Export {
        /// Chart to export: <source>/<operation> or combined. Exports all when omitted.
        #[arg(long)]
        chart: Option<ChartId>,

        #[arg(long)]
        width: Option<u32>,

        #[arg(long)]
        height: Option<u32>,

        /// Output directory
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.log_format);

    match args.command {
        Some(Command::Config {
            cmd: ConfigCmd::Check { path, plain },
        }) => {
            let path = path.or(args.config);
            cli::check(path.as_deref(), plain)
        }

        Some(Command::Export {
            chart,
            width,
            height,
            out,
        }) => {
            let cfg = load_or_default(args.config.as_deref())?;
            cli::run_export(
                &cfg,
                ExportArgs {
                    chart,
                    width,
                    height,
                    out,
                },
            )
        }

        Some(Command::Report { json, operation }) => {
            let cfg = load_or_default(args.config.as_deref())?;
            cli::run_report(&cfg, json, operation)
        }

        None => {
            let cfg = load_or_default(args.config.as_deref())?;
            cli::run_report(&cfg, false, None)
        }
    }
}
