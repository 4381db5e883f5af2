//! Command implementations

pub mod benchmark;
pub mod fetch;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use fetch::fetch_with_spinner;
pub use simple::{SessionStats, play_session, run_simple};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
