use crate::error::{HeapError, Result};

/// Capacity a heap starts with when a smaller one is requested.
pub const DEFAULT_CAPACITY: usize = 25;
/// Hard upper bound on a heap's capacity.
pub const MAX_CAPACITY: usize = 10_000;

/// Capacity bounds of a `MaxHeap`.
///
/// Requests below `min_capacity` are raised to it; anything above `max_capacity`,
/// requested or reached by growth, is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeapLimits {
    min_capacity: usize,
    max_capacity: usize,
}

impl Default for HeapLimits {
    #[inline]
    fn default() -> Self {
        Self {
            min_capacity: DEFAULT_CAPACITY,
            max_capacity: MAX_CAPACITY,
        }
    }
}

impl HeapLimits {
    /// Fails with `InvalidLimits` if `min_capacity` is above `max_capacity`.
    pub fn new(min_capacity: usize, max_capacity: usize) -> Result<Self> {
        if min_capacity > max_capacity {
            return Err(HeapError::InvalidLimits {
                min: min_capacity,
                max: max_capacity,
            });
        }

        Ok(Self {
            min_capacity,
            max_capacity,
        })
    }

    /// Capacity an empty heap starts with at the least.
    #[inline]
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Hard upper bound on capacity.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Fails with `CapacityExceeded` if `capacity` is above the hard maximum.
    pub fn check(&self, capacity: usize) -> Result<()> {
        if capacity > self.max_capacity {
            tracing::warn!(
                requested = capacity,
                max = self.max_capacity,
                "heap capacity rejected"
            );
            return Err(HeapError::CapacityExceeded {
                requested: capacity,
                max: self.max_capacity,
            });
        }
        Ok(())
    }

    /// Capacity actually used for a requested one.
    pub fn resolve(&self, requested: usize) -> Result<usize> {
        if requested < self.min_capacity {
            Ok(self.min_capacity)
        } else {
            self.check(requested)?;
            Ok(requested)
        }
    }

    /// Capacity after one doubling step.
    pub fn grow(&self, capacity: usize) -> Result<usize> {
        let grown = capacity.saturating_mul(2).max(1);
        self.check(grown)?;
        Ok(grown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_request_is_raised() {
        let limits = HeapLimits::default();
        assert_eq!(limits.resolve(2), Ok(DEFAULT_CAPACITY));
        assert_eq!(limits.resolve(0), Ok(DEFAULT_CAPACITY));
        assert_eq!(limits.resolve(100), Ok(100));
        assert_eq!(limits.resolve(MAX_CAPACITY), Ok(MAX_CAPACITY));
    }

    #[test]
    fn large_request_is_rejected() {
        let limits = HeapLimits::default();
        assert_eq!(
            limits.resolve(MAX_CAPACITY + 1),
            Err(HeapError::CapacityExceeded {
                requested: MAX_CAPACITY + 1,
                max: MAX_CAPACITY
            })
        );
    }

    #[test]
    fn grow_doubles() {
        let limits = HeapLimits::new(4, 16).unwrap();
        assert_eq!(limits.grow(0), Ok(1));
        assert_eq!(limits.grow(4), Ok(8));
        assert_eq!(limits.grow(8), Ok(16));
        assert!(limits.grow(16).is_err());
    }

    #[test]
    fn inverted_limits() {
        assert_eq!(
            HeapLimits::new(10, 5),
            Err(HeapError::InvalidLimits { min: 10, max: 5 })
        );
    }
}
