#![deny(missing_docs)]
//! Searchdeck command-line interface.
//!
//! Turns extracted audit metrics into a prioritized, business-language
//! SEO audit report.

use clap::{Args, Parser, Subcommand, ValueEnum};
use searchdeck_core::{
    AreaKind, AuditContext, AuditReport, ReportBuilder, StdFileSystem, WebsiteType, analyze_area,
    load_audit_data, render_json, render_markdown, render_text, sample,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "searchdeck", version, about = "Searchdeck CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct ContextArgs {
    /// Client brand name used throughout the report.
    #[arg(long)]
    brand_name: String,
    /// Audit month label, e.g. "August 2026".
    #[arg(long)]
    month: String,
    /// Website category driving benchmark phrasing.
    #[arg(long, value_enum, default_value_t = WebsiteTypeArg::Ecommerce)]
    website_type: WebsiteTypeArg,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Output format for report data.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum WebsiteTypeArg {
    Ecommerce,
    Saas,
    Content,
    Local,
    Marketplace,
}

impl From<WebsiteTypeArg> for WebsiteType {
    fn from(value: WebsiteTypeArg) -> Self {
        match value {
            WebsiteTypeArg::Ecommerce => WebsiteType::Ecommerce,
            WebsiteTypeArg::Saas => WebsiteType::Saas,
            WebsiteTypeArg::Content => WebsiteType::Content,
            WebsiteTypeArg::Local => WebsiteType::Local,
            WebsiteTypeArg::Marketplace => WebsiteType::Marketplace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a report from a data directory of extracted audit metrics.
    Audit {
        /// Directory containing the JSON audit export.
        #[arg(long)]
        data_dir: PathBuf,
        #[command(flatten)]
        context: ContextArgs,
        #[command(flatten)]
        report: OutputArgs,
    },
    /// Emit a sample metrics export to start a new audit from.
    Sample {
        /// Write the sample export to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[cfg(not(test))]
#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Audit {
            data_dir,
            context,
            report,
        } => {
            log::info!("loading audit data from {}", data_dir.display());
            let fs = StdFileSystem::new();
            let raw = load_audit_data(&fs, &data_dir)?;
            let built = build_report(&raw.normalize(), audit_context(&context))?;
            emit_report(&built, &report).await?;
        }
        Commands::Sample { output } => {
            log::info!("emitting sample metrics export");
            let contents = render_json(&sample())?;
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                    tokio::fs::write(&path, contents).await?;
                    log::info!("sample export written to {}", path.display());
                }
                None => print!("{contents}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
fn main() {}

#[cfg(not(test))]
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn audit_context(args: &ContextArgs) -> AuditContext {
    AuditContext::new(
        args.brand_name.clone(),
        args.month.clone(),
        args.website_type.into(),
    )
}

fn build_report(
    metrics: &BTreeMap<AreaKind, searchdeck_core::MetricSet>,
    context: AuditContext,
) -> searchdeck_core::Result<AuditReport> {
    let mut builder = ReportBuilder::new(context.clone()).tool("metrics export");
    for area in AreaKind::CANONICAL {
        if let Some(metric_set) = metrics.get(&area) {
            log::debug!("classifying {area}");
            builder = builder.area(analyze_area(area, metric_set, &context));
        }
    }
    builder.build()
}

async fn emit_report(report: &AuditReport, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Markdown => render_markdown(report),
        OutputFormat::Json => render_json(report)?,
    };
    emit_output(output, contents).await
}

async fn emit_output(output: &OutputArgs, contents: String) -> CliResult<()> {
    if let Some(path) = &output.report_output {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await?;
        log::info!("report written to {}", path.display());
    } else {
        print!("{contents}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        ContextArgs, OutputArgs, OutputFormat, WebsiteTypeArg, audit_context, build_report,
        emit_report,
    };
    use searchdeck_core::{AreaKind, SearchdeckError, WebsiteType, sample};
    use std::collections::BTreeMap;

    fn context_args() -> ContextArgs {
        ContextArgs {
            brand_name: "Acme".to_string(),
            month: "August 2026".to_string(),
            website_type: WebsiteTypeArg::Saas,
        }
    }

    #[test]
    fn audit_context_maps_website_type() {
        let context = audit_context(&context_args());
        assert_eq!(context.brand_name, "Acme");
        assert_eq!(context.website_type, WebsiteType::Saas);
    }

    #[test]
    fn build_report_covers_all_areas_from_sample() {
        let report =
            build_report(&sample().normalize(), audit_context(&context_args())).expect("report");
        assert_eq!(report.areas.len(), 9);
    }

    #[test]
    fn build_report_fails_on_partial_metrics() {
        let mut metrics = sample().normalize();
        metrics.remove(&AreaKind::Engagement);
        match build_report(&metrics, audit_context(&context_args())) {
            Err(SearchdeckError::MissingArea(area)) => assert_eq!(area, AreaKind::Engagement),
            other => panic!("expected MissingArea, got {other:?}"),
        }
        let empty: BTreeMap<_, _> = BTreeMap::new();
        assert!(build_report(&empty, audit_context(&context_args())).is_err());
    }

    #[tokio::test]
    async fn emit_report_writes_requested_format() {
        let root = std::env::temp_dir().join(format!(
            "searchdeck_cli_test_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("system time")
                .as_nanos()
        ));
        let path = root.join("out/report.json");

        let report =
            build_report(&sample().normalize(), audit_context(&context_args())).expect("report");
        let output = OutputArgs {
            format: OutputFormat::Json,
            report_output: Some(path.clone()),
        };
        emit_report(&report, &output).await.expect("emit");

        let contents = std::fs::read_to_string(&path).expect("read report");
        let parsed: serde_json::Value = serde_json::from_str(&contents).expect("parse");
        assert_eq!(parsed["context"]["brandName"], "Acme");

        std::fs::remove_dir_all(&root).expect("cleanup");
    }
}
