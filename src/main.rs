//! Hangman - CLI
//!
//! Hangman with TUI and CLI modes, plus an automatic solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SolveConfig, fetch_with_spinner, run_benchmark, run_simple, solve_word},
    config::Config,
    logging,
    output::{print_benchmark_result, print_solve_result},
    solver::{Solver, Strategy, StrategyType},
};
use std::io::IsTerminal;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman in the terminal, with an automatic solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word source: 'remote' (HTTP service), 'embedded', or path to a word file
    #[arg(short = 'w', long, global = true)]
    source: Option<String>,

    /// Word service URL (overrides HANGMAN_WORD_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Word service timeout in seconds (overrides HANGMAN_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Solver strategy: frequency (default) or random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Fetch one word from the configured source and print it
    Fetch,

    /// Let the solver play against a specific word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show candidate counts for each step
        #[arg(long)]
        steps: bool,
    },

    /// Benchmark the solver against the word list
    Benchmark {
        /// Number of words to test (default: whole list)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    logging::init(logging::default_directive(
        cli.verbose,
        matches!(command, Commands::Play),
    ));

    let config = Config::from_env()?.with_overrides(cli.source.as_deref(), cli.url, cli.timeout);
    config.validate()?;
    tracing::debug!(?config, "Configuration loaded");

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => {
            let source = config.build_source()?;
            run_simple(&source)
        }
        Commands::Fetch => run_fetch_command(&config),
        Commands::Solve { word, steps } => run_solve_command(&cli.strategy, &word, steps, &config),
        Commands::Benchmark { count } => run_benchmark_command(&cli.strategy, count, &config),
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let source = config.build_source()?;
    let app = App::new(source.as_ref());
    run_tui(app)
}

fn run_fetch_command(config: &Config) -> Result<()> {
    let source = config.build_source()?;
    let word = fetch_with_spinner(&source, std::io::stderr().is_terminal())
        .context("could not fetch a word")?;
    println!("{word}");
    Ok(())
}

fn run_solve_command(strategy_name: &str, word: &str, steps: bool, config: &Config) -> Result<()> {
    let words = config.dictionary()?;
    let solver = Solver::new(StrategyType::from_name(strategy_name), &words);
    solve_command(word, steps, &solver)
}

fn solve_command<S: Strategy>(word: &str, steps: bool, solver: &Solver<S>) -> Result<()> {
    let config = SolveConfig::new(word.to_string());
    let result = solve_word(config, solver)?;

    print_solve_result(&result, steps);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, count: Option<usize>, config: &Config) -> Result<()> {
    let words = config.dictionary()?;
    let solver = Solver::new(StrategyType::from_name(strategy_name), &words);

    let count = count.unwrap_or(words.len()).min(words.len());
    println!("Running benchmark on {count} words with '{strategy_name}' strategy...");

    let result = run_benchmark(&solver, &words[..count], true);
    print_benchmark_result(&result);
    Ok(())
}
