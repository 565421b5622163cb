//! Command implementations

pub mod benchmark;
pub mod console;
pub mod play;
pub mod solve;
pub mod starter;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use console::{ConsolePlayer, FeedbackSource};
pub use play::{play_session, run_assist, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use starter::{StarterReport, find_starters};
