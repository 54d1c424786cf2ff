//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use textprep_core::{Pipeline, PipelineOptions, PunctuationOption, StopwordOption};

use crate::config::{load_collaborators, load_options};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, Record, TextFormatter};
use crate::progress::ProgressReporter;

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

    /// Pipeline options file (TOML, or JSON with a .json extension)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Lowercase the text
    #[arg(long)]
    pub lower: bool,

    /// Remove the default punctuation set
    #[arg(long)]
    pub punctuation: bool,

    /// Remove the default stopwords
    #[arg(long)]
    pub stopwords: bool,

    /// Remove runs of digits
    #[arg(long)]
    pub numbers: bool,

    /// Keep whitespace runs as they are
    #[arg(long)]
    pub no_whitespace: bool,

    /// Replace words by their lemma
    #[arg(long)]
    pub lemmatize: bool,

    /// Replace words by their stem (ignored with --lemmatize)
    #[arg(long)]
    pub stem: bool,

    /// Correct spelling (requires --dictionary)
    #[arg(long)]
    pub spellcheck: bool,

    /// Spelling dictionary with one `word [count]` entry per line
    #[arg(long, value_name = "FILE", env = "TEXTPREP_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Lemma table (TOML) replacing the built-in English one
    #[arg(long, value_name = "FILE")]
    pub lemma_table: Option<PathBuf>,

    /// Words the spell checker must accept as correct
    #[arg(long, value_name = "WORD", value_delimiter = ',')]
    pub known_words: Vec<String>,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
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
    /// One transformed line per input line
    Text,
    /// JSON array of records with source file and line number
    Json,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let options = self.pipeline_options()?;
        let collaborators =
            load_collaborators(self.dictionary.as_deref(), self.lemma_table.as_deref())?;
        let pipeline =
            Pipeline::from_options(options, collaborators).context("Failed to build pipeline")?;
        log::info!(
            "Pipeline steps: {}",
            pipeline
                .steps()
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let records = if self.parallel || self.threads.is_some() {
            self.process_parallel(&pipeline, &files, &progress)?
        } else {
            files
                .iter()
                .map(|path| process_file(&pipeline, path, &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        self.write_output(records.into_iter().flatten())
    }

    /// Options from the config file with command-line flags OR'd in
    pub fn pipeline_options(&self) -> Result<PipelineOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => PipelineOptions::default(),
        };

        options.lower |= self.lower;
        options.numbers |= self.numbers;
        options.lemmatize |= self.lemmatize;
        options.stem |= self.stem;
        options.spellcheck |= self.spellcheck;
        if self.no_whitespace {
            options.whitespace = false;
        }
        if self.punctuation && options.punctuation == PunctuationOption::Enabled(false) {
            options.punctuation = PunctuationOption::Enabled(true);
        }
        if self.stopwords && options.stopwords == StopwordOption::Enabled(false) {
            options.stopwords = StopwordOption::Enabled(true);
        }
        if !self.known_words.is_empty() {
            options
                .known_words
                .get_or_insert_with(Vec::new)
                .extend(self.known_words.iter().cloned());
        }

        Ok(options)
    }

    fn process_parallel(
        &self,
        pipeline: &Pipeline,
        files: &[PathBuf],
        progress: &ProgressReporter,
    ) -> Result<Vec<Vec<Record>>> {
        let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
        log::info!("Processing {} file(s) on {} threads", files.len(), threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create thread pool")?;

        pool.install(|| {
            files
                .par_iter()
                .map(|path| process_file(pipeline, path, progress))
                .collect()
        })
    }

    fn write_output(&self, records: impl Iterator<Item = Record>) -> Result<()> {
        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for record in records {
            formatter.format_record(&record)?;
        }
        formatter.finish()
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
            // A logger may already be installed when commands run in-process
            if let Err(e) = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init()
            {
                log::debug!("keeping existing logger: {e}");
            }
        }

        Ok(())
    }
}

/// Transform every line of one file
fn process_file(
    pipeline: &Pipeline,
    path: &Path,
    progress: &ProgressReporter,
) -> Result<Vec<Record>> {
    let source = path.display().to_string();
    let lines = FileReader::read_lines(path)?;
    log::debug!("{}: {} line(s)", source, lines.len());

    let texts = pipeline
        .transform_series(&lines)
        .map_err(|e| CliError::ProcessingError {
            file: source.clone(),
            message: e.to_string(),
        })?;
    progress.file_completed(&source);

    Ok(texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| Record {
            source: source.clone(),
            line: i + 1,
            text,
        })
        .collect())
}
