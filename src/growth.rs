//! Capacity growth policy and construction-time configuration of [`crate::GrowableArray`].

use num_traits::ToPrimitive;

use crate::error::{Result, SeqError};

/// Multiplicative rate applied to an array's capacity whenever it runs out of room.
/// Always finite and strictly greater than `1.0`.
///
/// Example:
/// ```
/// use intseq::GrowthFactor;
/// let g = GrowthFactor::new(1.5).unwrap();
/// assert_eq!(g.grow(10), 15);
/// assert_eq!(g.grow(3), 4);   // 4.5 truncates to 4
/// assert!(GrowthFactor::new(1.0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct GrowthFactor(f64);

impl GrowthFactor {
    /// Doubles the capacity on every growth step.
    pub const DOUBLING: Self = Self(2.0);

    /// Validates `factor`.
    pub fn new(factor: f64) -> Result<Self> {
        if factor.is_finite() && factor > 1.0 {
            Ok(Self(factor))
        } else {
            Err(SeqError::InvalidGrowthFactor(factor))
        }
    }

    /// Returns the raw factor.
    pub fn get(self) -> f64 { self.0 }

    /// Returns the capacity after one growth step: `capacity * factor`, truncated.
    ///
    /// The result is at least `capacity + 1`, so empty and tiny buffers still grow
    /// (e.g. `0 * 2.0` or `1 * 1.5`).
    pub fn grow(self, capacity: usize) -> usize {
        let scaled = (capacity as f64 * self.0).to_usize().unwrap_or(usize::MAX);
        scaled.max(capacity.saturating_add(1))
    }

    /// Returns the capacity to grow to when `required` slots are needed at once:
    /// `max(required, grow(capacity))`.
    pub fn grow_to(self, capacity: usize, required: usize) -> usize {
        required.max(self.grow(capacity))
    }
}

impl Default for GrowthFactor {
    fn default() -> Self { Self::DOUBLING }
}

/// How a [`crate::GrowableArray`] is created.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrayConfig {
    /// Slots allocated up front.
    pub initial_capacity: usize,
    pub growth_factor: GrowthFactor,
}

impl ArrayConfig {
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new(initial_capacity: usize, growth_factor: GrowthFactor) -> Self {
        Self { initial_capacity, growth_factor }
    }

    pub fn with_initial_capacity(self, initial_capacity: usize) -> Self {
        Self { initial_capacity, ..self }
    }

    pub fn with_growth_factor(self, growth_factor: GrowthFactor) -> Self {
        Self { growth_factor, ..self }
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY, GrowthFactor::DOUBLING)
    }
}
