use std::collections::VecDeque;

use crate::process::UniformSource;

mod arrival;

/// Replays a fixed sequence of uniform draws.
pub(crate) struct Scripted {
    draws: VecDeque<f64>,
}

impl Scripted {
    pub(crate) fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Draws that produce the given inter-arrival gaps (seconds) at rate `lambda`.
    pub(crate) fn gaps(lambda: f64, gaps: &[f64]) -> Self {
        Self::new(gaps.iter().map(|g| 1.0 - (-g * lambda).exp()))
    }
}

impl UniformSource for Scripted {
    fn next_uniform(&mut self) -> f64 {
        self.draws.pop_front().expect("scripted draws exhausted")
    }
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
