use crate::error::EngineError;

/// Reaction-diffusion rate constants, fixed for the lifetime of a run.
/// Defaults are the classic coral-growth regime (Karl Sims' tutorial values).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    /// Diffusion rate of chemical A.
    pub diff_a: f64,
    /// Diffusion rate of chemical B.
    pub diff_b: f64,
    /// Feed rate: replenishes A toward 1.0.
    pub feed: f64,
    /// Kill rate: removes B (always applied together with the feed rate).
    pub kill: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            diff_a: 1.0,
            diff_b: 0.5,
            feed: 0.055,
            kill: 0.062,
        }
    }
}

impl Params {
    /// Strict validation: every rate must be finite and non-negative.
    /// Negative or non-finite rates are rejected up front rather than left
    /// to poison the grid over subsequent ticks.
    pub fn validate(&self) -> Result<(), EngineError> {
        let rates = [
            ("diff_a", self.diff_a),
            ("diff_b", self.diff_b),
            ("feed", self.feed),
            ("kill", self.kill),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidParameters { name, value });
            }
        }
        Ok(())
    }
}
