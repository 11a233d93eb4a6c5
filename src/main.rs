use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use termcolor::ColorChoice;
use textsearch::align::{align, render};
use textsearch::config::Config;
use textsearch::output::{self, AlignmentReport, CloseMatchReport};
use textsearch::suffix_array::{close_matches, Origin, SuffixArrayBuilder};
use textsearch::symbols::{TokenizeMode, Tokenized, Tokenizer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "textsearch")]
#[command(about = "Suffix-array close matches and Levenshtein alignment for transcripts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// How to split text into symbols (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    tokenize: Option<TokenizeMode>,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Treat positional arguments as paths to text files
    #[arg(short, long, global = true)]
    files: bool,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value = "auto")]
    color: ColorWhen,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sorted suffixes of a sequence
    SuffixArray {
        /// Text to index
        sequence: String,
    },
    /// For each query symbol, find the nearest target suffixes in sort order
    CloseMatches {
        /// Query text (e.g. an ASR transcript)
        query: String,
        /// Target text (e.g. the reference book text)
        target: String,
    },
    /// Levenshtein alignment between two texts
    Align {
        /// Source text
        source: String,
        /// Target text
        target: String,

        /// Printed in place of a missing token (overrides the config file)
        #[arg(long)]
        gap_marker: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorChoice {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorChoice::Auto,
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Never => ColorChoice::Never,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(mode) = cli.tokenize {
        config.tokenize = mode;
    }

    let input = Input {
        files: cli.files,
        json: cli.json,
        color: cli.color.into(),
    };

    match cli.command {
        Commands::SuffixArray { sequence } => run_suffix_array(&config, &input, &sequence),
        Commands::CloseMatches { query, target } => {
            run_close_matches(&config, &input, &query, &target)
        }
        Commands::Align {
            source,
            target,
            gap_marker,
        } => {
            if let Some(marker) = gap_marker {
                config.render.gap_marker = marker;
            }
            run_align(&config, &input, &source, &target)
        }
    }
}

/// Output and argument handling shared by all subcommands
struct Input {
    files: bool,
    json: bool,
    color: ColorChoice,
}

impl Input {
    /// Raw bytes of an argument, or of the file it names
    fn read(&self, arg: &str) -> Result<Vec<u8>> {
        if self.files {
            std::fs::read(arg).with_context(|| format!("Failed to read {}", arg))
        } else {
            Ok(arg.as_bytes().to_vec())
        }
    }

    fn tokenize(&self, tokenizer: &mut Tokenizer, arg: &str) -> Result<Tokenized> {
        tokenizer
            .tokenize_bytes(&self.read(arg)?)
            .with_context(|| format!("Failed to tokenize {}", arg))
    }
}

fn joiner(mode: TokenizeMode) -> &'static str {
    match mode {
        TokenizeMode::Words => " ",
        TokenizeMode::Bytes | TokenizeMode::Chars => "",
    }
}

fn tokenize_pair(
    tokenizer: &mut Tokenizer,
    input: &Input,
    first: &str,
    second: &str,
) -> Result<(Tokenized, Tokenized)> {
    let first = input.tokenize(tokenizer, first)?;
    let second = input.tokenize(tokenizer, second)?;
    Ok((first, second))
}

fn run_suffix_array(config: &Config, input: &Input, sequence: &str) -> Result<()> {
    let mut tokenizer = Tokenizer::new(config.tokenize);
    let text = input.tokenize(&mut tokenizer, sequence)?;

    let sa = SuffixArrayBuilder::new(config.suffix_array.clone())
        .build(&text.sequence)
        .context("Failed to build suffix array")?;
    info!(suffixes = sa.len(), "suffix array ready");

    // Without a query every non-sentinel suffix is reported as target-origin
    let rows = output::suffix_rows(&sa, &text.tokens, joiner(tokenizer.mode()), 0);
    if input.json {
        output::print_json(&rows)?;
    } else {
        output::print_suffix_rows(&mut output::stdout(input.color), &rows)?;
    }
    Ok(())
}

fn run_close_matches(config: &Config, input: &Input, query: &str, target: &str) -> Result<()> {
    let mut tokenizer = Tokenizer::new(config.tokenize);
    let (query, target) = tokenize_pair(&mut tokenizer, input, query, target)?;

    let (sa, query_len) = SuffixArrayBuilder::new(config.suffix_array.clone())
        .build_query_target(&query.sequence, &target.sequence)
        .context("Failed to build suffix array")?;
    let matches = close_matches(&sa, query_len)?;

    let mut tokens = query.tokens.clone();
    tokens.extend(target.tokens.iter().cloned());
    let suffixes = output::suffix_rows(&sa, &tokens, joiner(tokenizer.mode()), query_len);
    let rows = output::close_match_rows(&matches, &query.tokens);
    info!(
        query_len,
        target_len = target.len(),
        target_suffixes = suffixes.iter().filter(|r| r.origin == Origin::Target).count(),
        "close matches ready"
    );

    if input.json {
        output::print_json(&CloseMatchReport {
            query_len,
            suffixes,
            matches: rows,
        })?;
    } else {
        let mut out = output::stdout(input.color);
        output::print_suffix_rows(&mut out, &suffixes)?;
        writeln!(out)?;
        output::print_close_matches(&mut out, &rows)?;
    }
    Ok(())
}

fn run_align(config: &Config, input: &Input, source: &str, target: &str) -> Result<()> {
    let mut tokenizer = Tokenizer::new(config.tokenize);
    let (source, target) = tokenize_pair(&mut tokenizer, input, source, target)?;

    let alignment = align(&source.sequence, &target.sequence);
    let pairs = render(
        &alignment.path,
        &source.tokens,
        &target.tokens,
        &config.render.gap_marker,
    )?;

    if input.json {
        output::print_json(&AlignmentReport {
            distance: alignment.distance,
            edits: alignment.edit_string(),
            alignment: &alignment,
            pairs: &pairs,
        })?;
    } else {
        output::print_alignment(&mut output::stdout(input.color), &alignment, &pairs)?;
    }
    Ok(())
}
