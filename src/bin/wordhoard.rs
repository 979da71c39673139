//! wordhoard CLI: rank a book's rare vocabulary and show words in context.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use wordhoard::{
    highlight_spans, AnalysisConfig, AnalysisSession, Analyzer, BookAnalysis, DirectorySource,
    HoardResult,
};

#[derive(Parser)]
#[command(name = "wordhoard", version, about = "Find the rare words in a book")]
struct Cli {
    /// Log debug output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank the rare vocabulary of a book.
    Analyze {
        #[command(flatten)]
        book: BookArgs,
        /// Print the full analysis as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the passages a word appears in.
    Context {
        #[command(flatten)]
        book: BookArgs,
        /// The word to look for.
        word: String,
    },
    /// Look a word up in the online dictionary.
    #[cfg(feature = "http")]
    Define {
        /// The word to define.
        word: String,
    },
}

#[derive(Args)]
struct BookArgs {
    /// Directory of chapter files, or a single chapter file.
    path: PathBuf,
    /// Ranked word list (one word per line, most frequent first).
    #[arg(long)]
    corpus: PathBuf,
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Book title (defaults to the path name).
    #[arg(long)]
    title: Option<String>,
    /// Maximum number of ranked words (or contexts, for `context`).
    #[arg(long)]
    limit: Option<usize>,
    /// Corpus ranks below this are too common to list.
    #[arg(long)]
    min_rank: Option<u32>,
    /// Drop words seen more often than this in the book.
    #[arg(long)]
    max_book_freq: Option<u32>,
}

impl BookArgs {
    fn config(&self, limit_is_contexts: bool) -> HoardResult<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::load(path)?,
            None => AnalysisConfig::default(),
        };
        if let Some(limit) = self.limit {
            if limit_is_contexts {
                config.context_limit = limit;
            } else {
                config.limit = limit;
            }
        }
        if let Some(min_rank) = self.min_rank {
            config.min_global_rank = min_rank;
        }
        if let Some(max) = self.max_book_freq {
            config.max_book_frequency = max;
        }
        config.validate()?;
        Ok(config)
    }

    async fn process(&self, config: AnalysisConfig) -> HoardResult<AnalysisSession> {
        let corpus = wordhoard::corpus::load_global(&self.corpus)?;
        let mut session = AnalysisSession::new(Analyzer::new(corpus, config)?);

        let mut source = DirectorySource::open(&self.path)?;
        if let Some(title) = &self.title {
            source = source.with_title(title.clone());
        }
        session.process(Arc::new(source)).await?;
        Ok(session)
    }
}

fn print_ranked(book: &BookAnalysis) {
    println!("{}", book.title);
    println!("{} passages, {} ranked words", book.passages.len(), book.ranked_words.len());
    println!();
    println!("{:>4}  {:<24} {:>6} {:>8} {:>8}", "#", "word", "count", "rank", "score");
    for (i, entry) in book.ranked_words.iter().enumerate() {
        println!(
            "{:>4}  {:<24} {:>6} {:>8} {:>8.1}",
            i + 1,
            entry.word,
            entry.book_frequency,
            entry.global_rank,
            entry.rarity_score
        );
    }
}

/// Wrap every occurrence of `word` in `[[ ]]`.
fn mark(passage: &str, word: &str) -> String {
    let mut out = String::with_capacity(passage.len() + 8);
    let mut last = 0;
    for span in highlight_spans(passage, word) {
        out.push_str(&passage[last..span.start]);
        out.push_str("[[");
        out.push_str(&passage[span.clone()]);
        out.push_str("]]");
        last = span.end;
    }
    out.push_str(&passage[last..]);
    out
}

async fn run(cli: Cli) -> HoardResult<()> {
    match cli.command {
        Command::Analyze { book, json } => {
            let session = book.process(book.config(false)?).await?;
            if let Some(analysis) = session.current() {
                if json {
                    println!("{}", analysis.to_json());
                } else {
                    print_ranked(analysis);
                }
            }
        }
        Command::Context { book, word } => {
            let session = book.process(book.config(true)?).await?;
            let contexts = session.contexts(&word);
            let total = session
                .current()
                .map(|analysis| analysis.occurrence_count(&word))
                .unwrap_or(0);
            println!(
                "\"{}\": {} occurrence{} in context",
                word,
                total,
                if total == 1 { "" } else { "s" }
            );
            if contexts.is_empty() {
                println!("No context available");
            }
            for passage in contexts {
                println!();
                println!("  {}", mark(passage, &word));
            }
        }
        #[cfg(feature = "http")]
        Command::Define { word } => define(&word).await?,
    }
    Ok(())
}

#[cfg(feature = "http")]
async fn define(word: &str) -> HoardResult<()> {
    use wordhoard::{DefinitionCache, FreeDictionaryClient};

    let cache = DefinitionCache::new(FreeDictionaryClient::new());
    match cache.get(word).await? {
        Some(definition) => {
            match definition.phonetic_text() {
                Some(phonetic) => println!("{} {}", definition.word, phonetic),
                None => println!("{}", definition.word),
            }
            for meaning in &definition.meanings {
                println!();
                println!("  {}", meaning.part_of_speech);
                for (i, sense) in meaning.definitions.iter().enumerate() {
                    println!("    {}. {}", i + 1, sense.definition);
                    if let Some(example) = &sense.example {
                        println!("       \"{}\"", example);
                    }
                    if !sense.synonyms.is_empty() {
                        println!("       synonyms: {}", sense.synonyms.join(", "));
                    }
                }
            }
            if let Some(audio) = definition.audio_url() {
                println!();
                println!("  audio: {}", audio);
            }
        }
        None => println!("No definition found"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
