// src/math/algorithms/filter/config.rs
use crate::math::{
    error::{MathError, MathResult},
    utils::constants,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Toleranz, mit der ein Dreieckspunkt als Polygonecke erkannt wird.
    /// `0.0` bedeutet exakte Gleichheit.
    pub vertex_epsilon: f64,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertex_epsilon(mut self, epsilon: f64) -> Self {
        self.vertex_epsilon = epsilon;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.vertex_epsilon.is_finite() || self.vertex_epsilon < 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "vertex_epsilon must be finite and non-negative, got {}",
                    self.vertex_epsilon
                ),
            });
        }

        Ok(())
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            vertex_epsilon: constants::VERTEX_EPSILON,
        }
    }
}
