use crate::error::{HeapError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const DEFAULT_INITIAL_CAPACITY: usize = 16;
const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Construction parameters for an [`IndexedMinHeap`](crate::IndexedMinHeap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct HeapConfig {
    /// Number of node slots allocated up front. Must be positive.
    pub initial_capacity: usize,
    /// Multiplier applied to the capacity whenever an insert finds the heap
    /// full. Must be at least 2.
    pub growth_factor: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        HeapConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl HeapConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(HeapError::InvalidArgument(
                "initial capacity must be positive".to_string(),
            ));
        }

        if self.growth_factor < 2 {
            return Err(HeapError::InvalidArgument(format!(
                "growth factor must be at least 2, got {}",
                self.growth_factor
            )));
        }

        Ok(())
    }

    /// Capacity that follows `capacity` under this growth policy.
    #[inline]
    pub(crate) fn grown(&self, capacity: usize) -> usize {
        capacity.saturating_mul(self.growth_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HeapConfig::default();

        assert_eq!(config.initial_capacity, 16);
        assert_eq!(config.growth_factor, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_capacity() {
        let config = HeapConfig::default().with_initial_capacity(0);

        assert!(matches!(
            config.validate(),
            Err(HeapError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_growth_factor_below_two() {
        for factor in 0..2 {
            let config = HeapConfig::default().with_growth_factor(factor);
            assert!(matches!(
                config.validate(),
                Err(HeapError::InvalidArgument(_))
            ));
        }

        assert!(HeapConfig::default().with_growth_factor(3).validate().is_ok());
    }

    #[test]
    fn grown_saturates() {
        let config = HeapConfig::default();

        assert_eq!(config.grown(4), 8);
        assert_eq!(config.grown(usize::MAX), usize::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_fills_missing_fields() {
        let config: HeapConfig = serde_json::from_str(r#"{"initial_capacity": 4}"#).unwrap();

        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.growth_factor, 2);
    }
}
