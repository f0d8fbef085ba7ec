use crate::{
    config::Config,
    engine::{LopdfEngine, PdfDocument, PdfEngine},
    error::ExtractError,
    extract::{self, Extractor},
    output::OutputFormat,
    page_span,
};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pdf-glean")]
#[command(about = "Batch PDF text extractor (page ranges + txt/markdown output)")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Path to config TOML. If omitted, uses ./pdf-glean.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract text from a single PDF.
    Extract {
        #[arg(long)]
        input: PathBuf,
        /// Output rendering. Defaults to the configured format.
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// 1-indexed inclusive page selection, e.g. 2-10.
        #[arg(long)]
        pages: Option<String>,
    },
    /// Extract every PDF under a directory.
    Batch {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Include subdirectories.
        #[arg(long)]
        recursive: bool,
    },
    /// Report a document's page count and size without extracting.
    Probe {
        #[arg(long)]
        input: PathBuf,
    },
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let _guard = init_logging(&args, &cfg)?;

    match &args.cmd {
        Command::Extract {
            input,
            format,
            pages,
        } => extract_one(&cfg, input, *format, pages.as_deref()),
        Command::Batch {
            dir,
            format,
            recursive,
        } => batch(&cfg, dir, *format, *recursive),
        Command::Probe { input } => probe(&cfg, input),
    }
}

fn load_config(user: Option<&Path>) -> Result<Config> {
    if let Some(p) = user {
        return Config::load(p);
    }
    let default = Path::new("pdf-glean.toml");
    if default.exists() {
        Config::load(default)
    } else {
        Ok(Config::default())
    }
}

fn init_logging(args: &Args, cfg: &Config) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = if cfg.logging.write_to_file {
        let path = if cfg.logging.file_path.is_empty() {
            PathBuf::from("pdf-glean.log")
        } else {
            PathBuf::from(&cfg.logging.file_path)
        };
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn extract_one(
    cfg: &Config,
    input: &Path,
    format: Option<OutputFormat>,
    pages: Option<&str>,
) -> Result<()> {
    validate_input(input)?;

    let requested = pages.map(page_span::parse_page_spec).transpose()?;
    let format = format.unwrap_or(cfg.output.default_format);

    let extractor = Extractor::new(cfg, LopdfEngine::new(cfg));
    match extractor.extract_file(input, format, requested) {
        Ok(report) => {
            extract::print_file_report(&report);
            if cfg.global.print_summary {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(())
        }
        Err(err) => {
            extract::print_failure(input, &err);
            Err(err.into())
        }
    }
}

fn batch(cfg: &Config, dir: &Path, format: Option<OutputFormat>, recursive: bool) -> Result<()> {
    if !dir.is_dir() {
        return Err(anyhow!("directory not found: {}", dir.display()));
    }

    let format = format.unwrap_or(cfg.output.default_format);

    let extractor = Extractor::new(cfg, LopdfEngine::new(cfg));
    let tally = extractor.batch(dir, format, recursive)?;

    if cfg.global.print_summary {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    }

    Ok(())
}

fn probe(cfg: &Config, input: &Path) -> Result<()> {
    validate_input(input)?;

    let file_bytes = std::fs::metadata(input)
        .with_context(|| format!("stat {}", input.display()))?
        .len();

    let engine = LopdfEngine::new(cfg);
    let doc = engine.open(input)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "input": input,
            "file_bytes": file_bytes,
            "page_count": doc.page_count(),
        }))?
    );
    Ok(())
}

fn validate_input(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(ExtractError::NotFound {
            path: input.to_path_buf(),
        }
        .into());
    }

    match input.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => Ok(()),
        Some(_) => Err(ExtractError::invalid(format!(
            "input is not a PDF: {}",
            input.display()
        ))
        .into()),
        None => {
            warn!("input has no extension; assuming PDF: {}", input.display());
            Ok(())
        }
    }
}
