use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};

use scriptparse::config::ParserSettings;
use scriptparse::matching::{self, Comparator, Simplifier};
use scriptparse::reader::{ReaderConfig, TranscriptReader};
use scriptparse::{render, TranscriptParser};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Csv,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MatchMode {
    Exact,
    Subset,
    Wildcard,
}

#[derive(Parser, Debug)]
#[command(name = "scriptparse")]
#[command(about = "Parse speaker-attributed transcripts and search their dialogue")]
#[command(version)]
struct Args {
    /// Transcript file, one physical line per line
    transcript: PathBuf,

    /// JSON parser settings file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pattern fragment before the speaker (no capture groups)
    #[arg(long)]
    prefix: Option<String>,

    /// Pattern fragment matching the speaker (no capture groups)
    #[arg(long)]
    speaker: Option<String>,

    /// Pattern fragment between the speaker and the dialogue (no capture groups)
    #[arg(long)]
    postfix: Option<String>,

    /// Append unmatched lines to the previous turn
    #[arg(long)]
    multi_line: bool,

    /// Lines matching this pattern never join a turn (repeatable)
    #[arg(long = "non-dialogue")]
    non_dialogue: Vec<String>,

    /// Output format when not searching
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Emit one CSV row per physical line of each turn
    #[arg(long)]
    split_lines: bool,

    /// Print the first turn matching this query instead of the whole script
    #[arg(long)]
    search: Option<String>,

    /// How the query is compared with each turn
    #[arg(long = "match", value_enum, default_value_t = MatchMode::Subset)]
    match_mode: MatchMode,

    /// Wildcard marker pattern for --match wildcard
    #[arg(long, default_value = r"\*+")]
    wildcard: String,

    /// Compare case-insensitively
    #[arg(long)]
    ignore_case: bool,

    /// Compare ASCII letters only
    #[arg(long)]
    alphabet_only: bool,

    /// Debug-level logging
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn settings(&self) -> Result<ParserSettings> {
        let mut settings = match &self.config {
            Some(path) => ParserSettings::from_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => ParserSettings::default(),
        };
        if let Some(prefix) = &self.prefix {
            settings.prefix = prefix.clone();
        }
        if let Some(speaker) = &self.speaker {
            settings.speaker = speaker.clone();
        }
        if let Some(postfix) = &self.postfix {
            settings.postfix = postfix.clone();
        }
        settings.multi_line |= self.multi_line;
        settings.non_dialogue.extend(self.non_dialogue.iter().cloned());
        Ok(settings)
    }

    fn simplifiers(&self) -> Vec<Simplifier> {
        let mut simplifiers = Vec::new();
        if self.ignore_case {
            simplifiers.push(matching::ignore_case());
        }
        if self.alphabet_only {
            simplifiers.push(matching::alphabet_only());
        }
        simplifiers
    }

    fn comparator(&self) -> Result<Comparator> {
        let comparator = match self.match_mode {
            MatchMode::Exact => matching::simplify_target(matching::exact(), &self.simplifiers()),
            MatchMode::Subset => matching::simplify_target(matching::subset(), &self.simplifiers()),
            MatchMode::Wildcard => {
                // WHY: candidates lose their spaces and punctuation under alphabet_only
                // while the query phrases keep theirs, so nothing could ever match
                if self.alphabet_only {
                    anyhow::bail!("--alphabet-only cannot be combined with --match wildcard");
                }
                let target_simplifiers: Vec<Simplifier> = if self.ignore_case {
                    vec![matching::ignore_case()]
                } else {
                    Vec::new()
                };
                let wildcard = matching::wildcard_from_pattern(&self.wildcard)
                    .context("Invalid wildcard pattern")?;
                matching::simplify_target(wildcard, &target_simplifiers)
            }
        };
        Ok(comparator)
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // WHY: logs go to stderr so stdout carries only the rendered script or match
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    if !args.transcript.is_file() {
        anyhow::bail!("Transcript does not exist or is not a file: {}", args.transcript.display());
    }

    let settings = args.settings()?;
    let config = settings.compile().context("Invalid parser settings")?;
    let parser = TranscriptParser::new(config);

    let reader = TranscriptReader::new(ReaderConfig::default());
    let (script, stats) = reader
        .read_script(&args.transcript, &parser)
        .with_context(|| format!("Failed to parse {}", args.transcript.display()))?;
    info!(lines = stats.lines_read, turns = script.turns().len(), "Transcript parsed");

    let Some(query) = &args.search else {
        let stdout = io::stdout().lock();
        match args.format {
            Format::Csv => render::write_csv(stdout, &render::rows(&script, args.split_lines))?,
            Format::Json => render::write_json(stdout, &script)?,
        }
        return Ok(ExitCode::SUCCESS);
    };

    let search = script.search_function(args.comparator()?, &args.simplifiers());
    match search.search(query) {
        Some(turn) => {
            println!("{}\t{}\t{}", turn.first_line_number(), turn.speaker(), turn.text());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("no match");
            Ok(ExitCode::FAILURE)
        }
    }
}
