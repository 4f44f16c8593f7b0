use std::{cmp::Reverse, convert::TryFrom, fmt, mem, slice};

use crate::error::{HeapError, Result};
use crate::limits::HeapLimits;

/// Bounded binary max-heap that counts the element relocations done while sifting.
#[derive(Clone, Debug)]
pub struct MaxHeap<T: Ord> {
    data: Vec<T>,
    capacity: usize,
    swaps: usize,
    limits: HeapLimits,
}

pub type MinHeap<T> = MaxHeap<Reverse<T>>;

impl<T: Ord> Default for MaxHeap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MaxHeap<T> {
    /// O(1)
    #[inline]
    pub fn new() -> Self {
        let limits = HeapLimits::default();
        Self {
            data: Vec::with_capacity(limits.min_capacity()),
            capacity: limits.min_capacity(),
            swaps: 0,
            limits,
        }
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_limits(capacity, HeapLimits::default())
    }

    /// A `capacity` below the minimum is raised to it, one above the maximum fails.
    ///
    /// O(1)
    pub fn with_limits(capacity: usize, limits: HeapLimits) -> Result<Self> {
        let capacity = limits.resolve(capacity)?;

        let mut data = Vec::new();
        reserve(&mut data, capacity, &limits)?;

        Ok(Self {
            data,
            capacity,
            swaps: 0,
            limits,
        })
    }

    /// Builds a heap from `data` in place by bottom-up sifting.
    ///
    /// The swap count afterwards covers only this construction.
    ///
    /// O(n)
    #[inline]
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        Self::from_vec_with_limits(data, HeapLimits::default())
    }

    /// O(n)
    pub fn from_vec_with_limits(data: Vec<T>, limits: HeapLimits) -> Result<Self> {
        limits.check(data.len())?;

        let mut heap = Self {
            capacity: data.len(),
            data,
            swaps: 0,
            limits,
        };

        for i in (0..heap.len() / 2).rev() {
            heap.sift_down(i);
        }
        tracing::trace!(len = heap.len(), swaps = heap.swaps, "heapified");

        Ok(heap)
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// O(1)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of relocations done by sifting since construction.
    ///
    /// O(1)
    #[inline]
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Capacity bounds the heap was built with.
    #[inline]
    pub fn limits(&self) -> HeapLimits {
        self.limits
    }

    /// O(1)
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Live elements in internal (level) order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Fails without touching the heap if it is full and can't grow any more.
    ///
    /// Amortized O(log n)
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.len() == self.capacity {
            self.grow()?;
        }

        self.data.push(value);
        self.sift_up(self.len() - 1);

        Ok(())
    }

    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        let mut res = self.data.pop()?;
        if let Some(root) = self.data.first_mut() {
            mem::swap(&mut res, root);
            self.sift_down(0);
        }

        Some(res)
    }

    /// Drops every element. Capacity and swap count are kept.
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Checks the size bounds and the heap order of every node.
    ///
    /// O(n)
    pub fn validate(&self) -> Result<()> {
        let bounded =
            self.len() <= self.capacity && self.capacity <= self.limits.max_capacity();
        let ordered = (1..self.len()).all(|i| self.data[(i - 1) / 2] >= self.data[i]);

        if bounded && ordered {
            Ok(())
        } else {
            Err(HeapError::UninitializedAccess)
        }
    }

    /// O(n log n)
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut res = Vec::with_capacity(self.len());
        while let Some(x) = self.pop() {
            res.push(x);
        }
        res.reverse();
        res
    }

    /// O(1)
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn grow(&mut self) -> Result<()> {
        let capacity = self.limits.grow(self.capacity)?;
        tracing::debug!(
            from = self.capacity,
            to = capacity,
            len = self.len(),
            "growing heap"
        );

        reserve(&mut self.data, capacity, &self.limits)?;
        self.capacity = capacity;

        Ok(())
    }

    /// O(log n)
    fn sift_up(&mut self, mut node: usize) {
        while node != 0 {
            let parent = (node - 1) / 2;

            if self.data[parent] < self.data[node] {
                self.data.swap(parent, node);
                self.swaps += 1;
                node = parent;
            } else {
                break;
            }
        }
    }

    /// O(log n)
    fn sift_down(&mut self, mut node: usize) {
        let len = self.len();
        loop {
            let left = 2 * node + 1;
            let right = left + 1;

            if left >= len {
                break;
            }

            let max = if right < len && self.data[left] < self.data[right] {
                right
            } else {
                left
            };

            if self.data[node] < self.data[max] {
                self.data.swap(node, max);
                self.swaps += 1;
                node = max;
            } else {
                break;
            }
        }
    }
}

/// Makes room for `capacity` elements in total, reporting an allocation the
/// allocator can't satisfy as `CapacityExceeded`.
fn reserve<T>(data: &mut Vec<T>, capacity: usize, limits: &HeapLimits) -> Result<()> {
    data.try_reserve_exact(capacity - data.len()).map_err(|_| {
        tracing::warn!(requested = capacity, "heap allocation failed");
        HeapError::CapacityExceeded {
            requested: capacity,
            max: limits.max_capacity(),
        }
    })
}

impl<T: Ord> TryFrom<Vec<T>> for MaxHeap<T> {
    type Error = HeapError;

    #[inline]
    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::from_vec(data)
    }
}

impl<'a, T: Ord> IntoIterator for &'a MaxHeap<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Comma separated, in internal order.
impl<T: Ord + fmt::Display> fmt::Display for MaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.data.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}
