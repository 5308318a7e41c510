//! Spelling Bee Search CLI
//!
//! Reads a word list, searches every puzzle and prints the best one.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use spelling_bee::{search, Config, LetterSet, Lexicon, LexiconFilter, NewBest, SearchObserver};

/// Find the highest-scoring Spelling Bee puzzle for a word list.
#[derive(Parser, Debug)]
#[command(name = "spelling-bee", version)]
struct Args {
    /// Word list, one lowercase word per line
    wordlist: PathBuf,

    /// Only draw puzzle letters from these letters
    #[arg(short, long)]
    letters: Option<String>,

    /// Letters that disqualify a word
    #[arg(short, long, default_value = "s")]
    exclude: String,

    /// Minimum word length (at least 4)
    #[arg(long, default_value_t = 4)]
    min_length: usize,

    /// Search on the calling thread only
    #[arg(long)]
    sequential: bool,

    /// Number of worker threads (default: one per core)
    #[arg(short, long, conflicts_with = "sequential")]
    threads: Option<usize>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> Result<Config, Box<dyn std::error::Error>> {
        let alphabet = match &self.letters {
            Some(letters) => letters.parse()?,
            None => LetterSet::ALPHABET,
        };
        let config = Config {
            filter: LexiconFilter {
                min_len: self.min_length,
                excluded: self.exclude.parse()?,
                ..LexiconFilter::default()
            },
            alphabet,
            parallel: !self.sequential,
            threads: self.threads,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Renders search events on the terminal.
struct Console {
    bar: ProgressBar,
}

impl Console {
    fn new(total: u64, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total)
        };
        if let Ok(style) = ProgressStyle::with_template(
            "{elapsed_precise} [{bar:40}] {human_pos}/{human_len} combinations ({eta})",
        ) {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }
}

impl SearchObserver for Console {
    fn on_new_best(&self, event: &NewBest) {
        if self.bar.is_hidden() {
            println!("{}", event);
        } else {
            self.bar.println(event.to_string());
        }
    }

    fn on_progress(&self, combinations: u64) {
        self.bar.inc(combinations);
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.config()?;
    let start = Instant::now();

    let lexicon = Lexicon::load(&args.wordlist, &config.filter)?;
    let stats = lexicon.stats();
    println!(
        "Loaded {} words from {} lines ({} too short, {} with excluded letters, {} with more than 7 letters, {} malformed).",
        stats.retained,
        stats.lines,
        stats.too_short,
        stats.excluded_letter,
        stats.too_many_letters,
        stats.malformed
    );

    let total = spelling_bee::binomial(config.alphabet.len() as usize, spelling_bee::PUZZLE_SIZE);
    let console = Console::new(total, args.quiet);
    let result = search(&lexicon, &config, &console);
    console.bar.finish_and_clear();
    let best = result?;

    println!();
    print!("{}", best);
    println!();
    println!(
        "Elapsed time: {:.2} minutes",
        start.elapsed().as_secs_f64() / 60.0
    );

    Ok(())
}
