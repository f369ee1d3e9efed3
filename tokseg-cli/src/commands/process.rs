//! Process command implementation

use crate::config::{self, ConfigOverrides};
use crate::error::CliError;
use crate::input::{read_tokens, resolve_patterns, FileReader, InputFormat};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tokseg_core::{Segmenter, TokenView};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// How input files encode tokens
    #[arg(long, value_enum, default_value = "whitespace")]
    pub input_format: InputFormat,

    /// Segmenter configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "TOKSEG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Newline policy: never, always or two
    #[arg(long, value_name = "NAME")]
    pub newline_policy: Option<String>,

    /// Treat each input file as a single sentence
    #[arg(long)]
    pub one_sentence: bool,

    /// Keep sentences that end up with no tokens
    #[arg(long)]
    pub allow_empty: bool,

    /// Only segment tokens inside this XML element
    #[arg(long, value_name = "ELEMENT")]
    pub region: Option<String>,

    /// XML element whose tags force a sentence break (repeatable)
    #[arg(long = "xml-break", value_name = "ELEMENT")]
    pub xml_break: Vec<String>,

    /// Additional token to discard (repeatable)
    #[arg(long, value_name = "TOKEN")]
    pub discard: Vec<String>,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with their tokens
    Json,
    /// Markdown formatted output
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting token segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = config::resolve(self.config.as_deref(), &self.overrides())?;
        let segmenter = Segmenter::new(config)
            .map_err(CliError::from)
            .context("Invalid segmenter configuration")?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        self.init_thread_pool();

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut documents: Vec<Vec<Value>> = Vec::with_capacity(files.len());
        for path in &files {
            log::debug!(
                "Reading {} ({} bytes)",
                path.display(),
                FileReader::file_size(path)?
            );
            let content = FileReader::read_text(path)?;
            documents.push(read_tokens(&content, self.input_format, &path.display().to_string())?);
            progress.file_completed(&path.display().to_string());
        }
        progress.finish();

        let segmented = segmenter
            .segment_batch(&documents)
            .map_err(CliError::from)
            .context("Failed to segment input")?;

        let mut formatter = self.create_formatter()?;
        let mut total = 0;
        for (path, sentences) in files.iter().zip(&segmented) {
            formatter.start_file(&path.display().to_string())?;
            for sentence in sentences {
                let tokens: Vec<String> = sentence
                    .iter()
                    .map(|token| token.text().map(|t| t.into_owned()).unwrap_or_default())
                    .collect();
                formatter.format_sentence(&tokens)?;
            }
            log::info!("{}: {} sentence(s)", path.display(), sentences.len());
            total += sentences.len();
        }
        formatter.finish()?;

        log::info!("Wrote {} sentence(s) from {} file(s)", total, files.len());
        Ok(())
    }

    /// Flags that override the configuration file
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            newline_policy: self.newline_policy.clone(),
            one_sentence: self.one_sentence,
            allow_empty_sentences: self.allow_empty,
            region_element: self.region.clone(),
            xml_break_elements: self.xml_break.clone(),
            tokens_to_discard: self.discard.clone(),
        }
    }

    /// Size the global rayon pool used for batch segmentation
    fn init_thread_pool(&self) {
        let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
            Ok(()) => log::debug!("Using {} worker thread(s)", threads),
            Err(e) => log::warn!("Could not configure thread pool: {}", e),
        }
    }

    /// Create the formatter for the selected output format and destination
    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };

        let formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .context("Failed to initialize logging")?;
        }

        Ok(())
    }
}
