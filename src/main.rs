//! Wordle Hint - CLI
//!
//! Suggests the next guess from the feedback received so far.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_hint::{
    commands::{
        SolveConfig, analyze_word, run_benchmark, run_hint, run_precompute, sample_targets,
        solve_word,
    },
    core::Word,
    output::{
        formatters::search_progress_bar, print_analysis_result, print_benchmark_result,
        print_hint_result, print_precompute_result, print_solve_result,
    },
    solver::{FeedbackSource, LiveScoring, ScoreTable, SearchOptions, Solver},
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_hint",
    about = "Suggests the Wordle guess that leaves the fewest candidates",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list: one five-letter word per line
    #[arg(short = 'w', long, global = true, default_value = "five.letter.words")]
    words: PathBuf,

    /// Precomputed score table built by `precompute` from the same word list
    #[arg(short, long, global = true)]
    table: Option<PathBuf>,

    /// Search on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Play(PlayCommand),

    /// Build a guess × answer score table and save it
    Precompute {
        /// Allowed guesses
        #[arg(long)]
        guesses: PathBuf,

        /// Possible answers
        #[arg(long)]
        answers: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "lookup.json")]
        out: PathBuf,
    },
}

/// Commands that run against the loaded word list
#[derive(Subcommand)]
enum PlayCommand {
    /// Suggest the next guess
    Hint {
        /// Feedback so far, one per guess: `=` right place, `-` wrong place,
        /// `.` absent, each followed by the letter (e.g. `=a.p.p=l=e`)
        feedback: Vec<String>,

        /// List the candidates when at most this many remain
        #[arg(short, long, default_value = "10")]
        list: usize,
    },

    /// Play a full game against a known target word
    Solve {
        /// The target word to solve
        word: String,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,

        /// Show candidate counts per turn
        #[arg(long)]
        detail: bool,
    },

    /// Report how one guess would split the current candidates
    Analyze {
        /// Word to analyze
        word: String,

        /// Feedback so far
        feedback: Vec<String>,
    },

    /// Solve a random sample of words from the list
    Benchmark {
        /// Number of random words to solve
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Precompute {
            guesses,
            answers,
            out,
        } => {
            let result = run_precompute(guesses, answers, out)?;
            print_precompute_result(&result, &out.display().to_string());
            Ok(())
        }
        Commands::Play(command) => {
            let words = load_from_file(&cli.words)
                .with_context(|| format!("reading word list {}", cli.words.display()))?;
            match &cli.table {
                Some(path) => {
                    let table = load_table(path, &words)?;
                    run_command(&cli, command, words, &table)
                }
                None => run_command(&cli, command, words, &LiveScoring),
            }
        }
    }
}

fn load_table(path: &Path, words: &[Word]) -> Result<ScoreTable> {
    ScoreTable::load(path, words, words)
        .with_context(|| format!("loading score table {}", path.display()))
}

fn search_options(cli: &Cli) -> SearchOptions {
    SearchOptions {
        parallel: !cli.sequential,
        progress: None,
    }
}

fn run_command<S: FeedbackSource>(
    cli: &Cli,
    command: &PlayCommand,
    words: Vec<Word>,
    source: &S,
) -> Result<()> {
    match command {
        PlayCommand::Hint { feedback, list } => {
            let bar = search_progress_bar("Searching");
            let options = search_options(cli).with_progress(bar.clone());
            let mut solver = Solver::with_source(words, source)?.with_options(options);
            let result = run_hint(&mut solver, feedback.as_slice(), *list);
            bar.finish_and_clear();
            print_hint_result(&result?);
        }
        PlayCommand::Solve {
            word,
            max_guesses,
            detail,
        } => {
            let mut config = SolveConfig::new(word.clone());
            config.max_guesses = *max_guesses;
            let result = solve_word(config, &words, source, search_options(cli))?;
            print_solve_result(&result, *detail);
        }
        PlayCommand::Analyze { word, feedback } => {
            let mut solver =
                Solver::with_source(words, source)?.with_options(search_options(cli));
            let report = analyze_word(&mut solver, word, feedback.as_slice())?;
            print_analysis_result(&report);
        }
        PlayCommand::Benchmark {
            count,
            seed,
            max_guesses,
        } => {
            let targets = sample_targets(&words, *count, *seed);
            println!("Running benchmark on {} words...", targets.len());
            let bar = search_progress_bar("Solving");
            let result = run_benchmark(
                &words,
                &targets,
                source,
                &search_options(cli),
                *max_guesses,
                &bar,
            )?;
            print_benchmark_result(&result);
        }
    }
    Ok(())
}
