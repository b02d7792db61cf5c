use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tabula_report::{
    DEFAULT_FIELD_WIDTH, IdentityInflector, ReportConfig, TablePattern, generate_table_report,
    generate_text_report,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// Delimited rows merged into a table pattern
    Table,
    /// `name = value` fields merged into free text
    Text,
}

/// Generate fixed-width reports by substituting data into a pattern.
///
/// Exit code 0: every report was written.
/// Exit code 1: a file could not be read, decoded or written.
#[derive(Debug, Parser)]
#[command(name = "tabula", version)]
struct Args {
    /// Pattern the data is substituted into
    #[arg(short, long)]
    pattern: PathBuf,

    /// Data files; one report is generated for each
    #[arg(short, long, num_args = 1.., required = true)]
    data: Vec<PathBuf>,

    /// Encoding of the data files (e.g. utf-8, cp1251)
    #[arg(long, default_value = "utf-8")]
    data_encoding: String,

    /// Encoding of the pattern file
    #[arg(long, default_value = "utf-8")]
    pattern_encoding: String,

    /// Read data as a table or as text fields
    #[arg(short, long, value_enum)]
    input_format: InputFormat,

    /// Width of fields that do not set one
    #[arg(short = 'l', long, env = "TABULA_DEFAULT_WIDTH", default_value_t = DEFAULT_FIELD_WIDTH)]
    default_field_width: usize,

    /// Report file name; each report is prefixed with its 1-based index
    #[arg(short, long, default_value = "generated_report.txt")]
    output_filename: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// `reports/out.txt` -> `reports/2_out.txt` for the second data file.
fn indexed_output(output: &Path, index: usize) -> PathBuf {
    let file_name = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    output.with_file_name(format!("{index}_{file_name}"))
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(false)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .build(),
        )
    }))
    .into_diagnostic()?;
    miette::set_panic_hook();

    let args = Args::parse();
    setup_logging(&args.log_level);

    let config = ReportConfig::default()
        .with_default_width(args.default_field_width)
        .with_pattern_encoding(&args.pattern_encoding)?
        .with_data_encoding(&args.data_encoding)?;

    match args.input_format {
        InputFormat::Table => {
            let pattern = TablePattern::load(&args.pattern, &config)?;
            for (idx, data) in args.data.iter().enumerate() {
                let output = indexed_output(&args.output_filename, idx + 1);
                generate_table_report(&pattern, data, &output, &config)?;
            }
        }
        InputFormat::Text => {
            let pattern = tabula_report::source::read_text(&args.pattern, config.pattern_encoding)?;
            for (idx, data) in args.data.iter().enumerate() {
                let output = indexed_output(&args.output_filename, idx + 1);
                generate_text_report(&pattern, data, &output, &config, &IdentityInflector)?;
            }
        }
    }

    Ok(())
}
