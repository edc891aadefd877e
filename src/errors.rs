use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("no repeated value within {cap} iterations")]
    IterationCapExceeded { cap: u64 },

    #[error("sequence ended after {produced} values without repeating")]
    SequenceExhausted { produced: u64 },

    #[error("cycle already detected, detector does not accept more values")]
    AlreadyFinished,
}
