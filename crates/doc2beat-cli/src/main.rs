//! doc2beat CLI - turn documentation pages into songs

use clap::Parser;
use doc2beat::config::{DEFAULT_CONFIG_PATH, DEFAULT_CREDS_PATH};
use doc2beat::table::{read_input_records, write_result_records};
use doc2beat::{
    BatchReport, ConfigError, Credentials, InputRecord, OpenRouterClient, Pipeline, PromptVariant,
    ResultRecord, Settings,
};
use std::fmt::Display;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "doc2beat=info";
const RULE_WIDTH: usize = 80;

/// doc2beat - convert technical documentation into songs
#[derive(Parser, Debug)]
#[command(name = "doc2beat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Single document URL to process
    #[arg(long, conflicts_with = "input", required_unless_present = "input")]
    url: Option<String>,

    /// Song style for the single document (generated when omitted)
    #[arg(long, requires = "url", conflicts_with = "input")]
    style: Option<String>,

    /// Input CSV with `document_url` and optional `song_style` columns
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "output.csv")]
    output: PathBuf,

    /// Credentials file (TOML); OPENROUTER_API_KEY overrides it
    #[arg(long, default_value = DEFAULT_CREDS_PATH)]
    creds: PathBuf,

    /// Settings file (TOML)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Use experimental style prompts and the extended genre catalog
    #[arg(long)]
    extra_creative: bool,
}

impl Cli {
    fn variant(&self) -> PromptVariant {
        if self.extra_creative {
            PromptVariant::ExtraCreative
        } else {
            PromptVariant::Standard
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let pipeline = build_pipeline(&cli);

    match (&cli.url, &cli.input) {
        (Some(url), _) => run_single(&pipeline, url, cli.style.clone(), &cli.output).await,
        (None, Some(input)) => run_batch(&pipeline, input, &cli.output).await,
        // clap rejects this combination
        (None, None) => exit_with_error("either --url or --input must be provided"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_pipeline(cli: &Cli) -> Pipeline {
    let creds = Credentials::load(&cli.creds).unwrap_or_else(|e| exit_with_config_error(e));
    let settings = Settings::load(&cli.config).unwrap_or_else(|e| exit_with_config_error(e));
    debug!(
        model = %settings.lyric_model,
        base_url = %settings.api_base_url,
        variant = ?cli.variant(),
        "Loaded configuration"
    );

    let client = OpenRouterClient::new(creds.openrouter_api_key)
        .with_base_url(settings.api_base_url);

    Pipeline::builder(Arc::new(client), settings.lyric_model)
        .variant(cli.variant())
        .build()
        .unwrap_or_else(|e| exit_with_error(e))
}

async fn run_single(pipeline: &Pipeline, url: &str, style: Option<String>, output: &Path) {
    let mut input = InputRecord::new(url);
    input.song_style = style;

    let result = pipeline
        .process_single_input(&input)
        .await
        .unwrap_or_else(|e| exit_with_error(e));

    save_results(output, std::slice::from_ref(&result));
    writeln_safe(&format!("\nResults saved to {}", output.display()));
    writeln_safe(&format_result(&result));
}

async fn run_batch(pipeline: &Pipeline, input: &Path, output: &Path) {
    let inputs = read_input_records(input).unwrap_or_else(|e| exit_with_error(e));
    info!(path = %input.display(), records = inputs.len(), "Loaded input records");

    let report = pipeline.process_multiple_inputs(&inputs).await;

    save_results(output, &report.results);
    writeln_safe(&format_summary(&report, output));
}

fn save_results(output: &Path, results: &[ResultRecord]) {
    write_result_records(output, results).unwrap_or_else(|e| exit_with_error(e));
}

/// Format a single result for the terminal
fn format_result(result: &ResultRecord) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\nDocument URL: {}\nSong Style: {}\n\nSong Lyrics:\n{}\n{rule}",
        result.document_url, result.song_style, result.song_lyrics
    )
}

/// Format the closing batch summary
fn format_summary(report: &BatchReport, output: &Path) -> String {
    format!(
        "Batch processing complete: {} succeeded, {} failed, {} total\nResults saved to {}",
        report.succeeded,
        report.failed(),
        report.results.len(),
        output.display()
    )
}

fn exit_with_config_error(e: ConfigError) -> ! {
    eprintln!("Error: {}", e);
    if matches!(e, ConfigError::NotFound { .. }) {
        eprintln!("\nMake sure creds.toml and config.toml exist.");
        eprintln!(
            "Copy creds.example.toml to creds.toml and add your API key, \
             or set OPENROUTER_API_KEY."
        );
    }
    std::process::exit(1);
}

fn exit_with_error(e: impl Display) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
