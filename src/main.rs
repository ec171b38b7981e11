use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

use outline2json::{
    ConverterConfig, OutputFormat,
    document::{document_stats, load_document},
    export::{export_to_json, write_json},
    outline::{export_to_outline, write_outline},
};

#[derive(Parser)]
#[command(name = "outline2json")]
#[command(about = "Convert a numbered outline guide into nested JSON")]
#[command(version)]
struct Cli {
    /// Outline document to convert (.md, .txt)
    #[arg(required_unless_present = "init_config")]
    input: Option<PathBuf>,

    /// Output file (defaults to the input name with a .json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,

    /// Log parse progress
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    if cli.init_config {
        match ConverterConfig::init_default()? {
            Some(path) => println!("Wrote default configuration to {}", path.display()),
            None => bail!("No configuration directory available on this platform"),
        }
        return Ok(());
    }

    let Some(input) = cli.input.as_deref() else {
        bail!("No input file given");
    };

    let config = match &cli.config {
        Some(path) => ConverterConfig::load_from(path)?,
        None => ConverterConfig::load()?,
    };

    let parsed = load_document(input, &config.markers)
        .await
        .with_context(|| format!("Failed to load {}", input.display()))?;

    for diagnostic in &parsed.diagnostics {
        log::warn!("{diagnostic}");
    }

    let document = &parsed.document;
    let stats = document_stats(document);
    log::info!(
        "Parsed '{}': {} sections, {} subsections, {} sub-subsections, {} paragraphs, {} lists",
        document.title,
        stats.sections,
        stats.subsections,
        stats.subsubsections,
        stats.paragraphs,
        stats.lists
    );

    match (cli.format, cli.stdout) {
        (OutputFormat::Json, true) => {
            println!("{}", export_to_json(document, config.output.indent_width)?);
        }
        (OutputFormat::Outline, true) => print!("{}", export_to_outline(document)),
        (OutputFormat::Json, false) => {
            let output = output_path(input, cli.output.as_deref(), "json");
            write_json(document, config.output.indent_width, &output).await?;
            log::info!("Wrote JSON output to {}", output.display());
        }
        (OutputFormat::Outline, false) => {
            let output = output_path(input, cli.output.as_deref(), "outline.txt");
            write_outline(document, &output).await?;
            log::info!("Wrote outline to {}", output.display());
        }
    }

    Ok(())
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn output_path(input: &Path, explicit: Option<&Path>, extension: &str) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(extension),
    }
}
