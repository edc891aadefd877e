//! Solver for the "chronal conversion" activation program.
//!
//! The program repeatedly hashes its previous value into a new 24-bit value and
//! halts once that value equals register 0. The first value it produces halts it
//! soonest; the last value produced before the sequence cycles halts it latest.

pub mod activation;
pub mod cycle;
pub mod errors;
pub mod output;

pub use activation::{next_value, Sequence};
pub use cycle::{detect_cycle, solve, solve_with, CycleDetector, CycleReport, Step};
pub use errors::SolveError;
pub use output::OutputFormat;
