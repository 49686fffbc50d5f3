//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_range};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::run_play;
pub use solve::{SolveConfig, SolveResult, solve_target};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
