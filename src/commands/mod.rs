//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod hint;
pub mod precompute;
pub mod solve;

pub use analyze::analyze_word;
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use hint::{HintResult, run_hint};
pub use precompute::{PrecomputeResult, run_precompute};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
