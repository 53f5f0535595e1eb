// THEORY:
// Configuration is kept deliberately small. The outline extractor recognises one
// tuning knob, `min_distance`, which controls how aggressively traced outlines are
// decimated. The batch pool adds a worker count. Both are plain structs with public
// fields so callers can use struct-update syntax against `Default`.

use crate::error::SketchError;

/// Tuning for a single `Sketch`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SketchConfig {
    /// Minimum spacing between consecutive kept points of a simplified body, in pixels.
    /// A point is kept only if it is *strictly* farther than this from the last kept
    /// point. `0.0` keeps every point; `f64::INFINITY` keeps only the first.
    pub min_distance: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self { min_distance: 0.0 }
    }
}

impl SketchConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        if self.min_distance.is_nan() {
            return Err(SketchError::Configuration(
                "min_distance must be a number".to_string(),
            ));
        }
        if self.min_distance < 0.0 {
            return Err(SketchError::Configuration(format!(
                "min_distance must not be negative (got {})",
                self.min_distance
            )));
        }
        Ok(())
    }
}

/// Sizing for a `SketchPool`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    /// Number of worker tasks. Defaults to the number of logical CPUs.
    pub workers: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
        }
    }
}

impl PoolConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        if self.workers == 0 {
            return Err(SketchError::Configuration(
                "a sketch pool needs at least one worker".to_string(),
            ));
        }
        Ok(())
    }
}
