//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Grid construction parameters supplied by the host.
///
/// `tick_interval_ms` is carried for the driver's benefit only; the engine
/// itself never sleeps or schedules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Suggested delay between driver ticks in milliseconds.
    pub tick_interval_ms: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            tick_interval_ms: 500,
        }
    }
}

impl GridConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(rows) = std::env::var("GRIDLIFE_ROWS")
            && let Ok(rows) = rows.parse()
        {
            config.rows = rows;
        }

        if let Ok(cols) = std::env::var("GRIDLIFE_COLS")
            && let Ok(cols) = cols.parse()
        {
            config.cols = cols;
        }

        if let Ok(interval) = std::env::var("GRIDLIFE_TICK_MS")
            && let Ok(interval_ms) = interval.parse()
        {
            config.tick_interval_ms = interval_ms;
        }

        config
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval_ms, 500);
    }

    #[test]
    fn test_zero_dimensions_fail_validation() {
        let config = GridConfig {
            cols: 0,
            ..GridConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(EngineError::InvalidDimensions { rows: 50, cols: 0 })
        );
    }
}
