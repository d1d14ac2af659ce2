//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod guess;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use assist::{AssistSession, AssistTurn, Feedback, InputError, parse_feedback, parse_shape};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_phrases};
pub use guess::{
    GuessReport, GuessRequest, GuessResponse, RequestError, guess_from_json, guess_from_request,
};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_phrase};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
