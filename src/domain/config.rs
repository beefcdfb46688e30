// ============================================================================
// Calculator Configuration
// ============================================================================

use crate::numeric::{DEFAULT_DIVISION_SCALE, DEFAULT_MAX_SIGNIFICANT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a calculator session.
///
/// The defaults (scale 12, 12 significant digits) match a typical pocket
/// calculator display; hosts with wider displays can raise both.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Fractional digits carried by division results.
    pub division_scale: usize,

    /// Cap on total significant digits shown on the display.
    pub max_significant: usize,
}

impl CalculatorConfig {
    /// Create a configuration with the default precision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the division result scale.
    pub fn with_division_scale(mut self, scale: usize) -> Self {
        self.division_scale = scale;
        self
    }

    /// Builder method: set the display significant-digit cap.
    pub fn with_max_significant(mut self, digits: usize) -> Self {
        self.max_significant = digits;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_significant == 0 {
            return Err("Display must allow at least one significant digit".to_string());
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            division_scale: DEFAULT_DIVISION_SCALE,
            max_significant: DEFAULT_MAX_SIGNIFICANT,
        }
    }
}
