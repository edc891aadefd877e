use std::collections::HashMap;

use log::{debug, info};

use crate::activation::{Sequence, STATE_SPACE};
use crate::errors::SolveError;

/// Within this many values a 24-bit sequence must have produced a repeat.
pub const DEFAULT_MAX_ITERATIONS: u64 = STATE_SPACE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// First value produced.
    pub first: u32,
    /// Last value produced before one repeats.
    pub last_before_repeat: u32,
    /// The candidate that was already seen.
    pub repeated: u32,
    /// Number of distinct values produced before the repeat.
    pub distinct: u64,
    /// Index at which `repeated` was first produced.
    pub cycle_start: u64,
}

impl CycleReport {
    pub fn cycle_len(&self) -> u64 {
        self.distinct - self.cycle_start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    First(u32),
    Fresh(u32),
    Repeat(CycleReport),
}

/// Streaming cycle detector. Values are pushed one at a time so the caller can
/// report the first value before the cycle has been found.
#[derive(Debug)]
pub struct CycleDetector {
    seen: HashMap<u32, u64>,
    first: Option<u32>,
    last: Option<u32>,
    max_iterations: u64,
    finished: bool,
}

impl CycleDetector {
    pub fn new(max_iterations: u64) -> Self {
        CycleDetector {
            seen: HashMap::new(),
            first: None,
            last: None,
            max_iterations,
            finished: false,
        }
    }

    /// Number of distinct values recorded so far.
    pub fn distinct(&self) -> u64 {
        self.seen.len() as u64
    }

    pub fn push(&mut self, value: u32) -> Result<Step, SolveError> {
        if self.finished {
            return Err(SolveError::AlreadyFinished);
        }

        if let Some(&cycle_start) = self.seen.get(&value) {
            self.finished = true;
            // A hit implies at least one earlier push, so both are set.
            let (Some(first), Some(last_before_repeat)) = (self.first, self.last) else {
                return Err(SolveError::AlreadyFinished);
            };
            return Ok(Step::Repeat(CycleReport {
                first,
                last_before_repeat,
                repeated: value,
                distinct: self.distinct(),
                cycle_start,
            }));
        }

        if self.distinct() >= self.max_iterations {
            self.finished = true;
            return Err(SolveError::IterationCapExceeded {
                cap: self.max_iterations,
            });
        }

        let index = self.distinct();
        debug!("value #{}: {}", index, value);
        self.seen.insert(value, index);
        self.last = Some(value);

        if self.first.is_none() {
            self.first = Some(value);
            Ok(Step::First(value))
        } else {
            Ok(Step::Fresh(value))
        }
    }
}

/// Feeds `values` into a fresh detector until one repeats.
pub fn detect_cycle<I>(values: I, max_iterations: u64) -> Result<CycleReport, SolveError>
where
    I: IntoIterator<Item = u32>,
{
    let mut detector = CycleDetector::new(max_iterations);
    for value in values {
        if let Step::Repeat(report) = detector.push(value)? {
            return Ok(report);
        }
    }
    Err(SolveError::SequenceExhausted {
        produced: detector.distinct(),
    })
}

/// Runs the activation program from a zeroed register until it cycles.
pub fn solve() -> Result<CycleReport, SolveError> {
    solve_with(DEFAULT_MAX_ITERATIONS)
}

pub fn solve_with(max_iterations: u64) -> Result<CycleReport, SolveError> {
    let report = detect_cycle(Sequence::new(), max_iterations)?;
    info!(
        "Cycle found after {} distinct values: {} repeats index {}",
        report.distinct, report.repeated, report.cycle_start
    );
    Ok(report)
}
