//! Fixed-Size Ring Buffer for Sample History Tracking
//!
//! ## Overview
//!
//! This module provides the circular (ring) buffer that underlies all three
//! feature extractors. The buffer has a fixed capacity chosen at compile time
//! through const generics and never allocates: on a memory-constrained
//! controller the entire sample history budget is known before the first
//! sample arrives.
//!
//! ## Design Rationale
//!
//! Every extractor needs a sliding window of recent samples:
//! - the cardiac detector recomputes its peak threshold over a full window
//! - the respiratory detector derives baseline and deviation from a window
//! - the GSR smoother is a moving average over a window
//!
//! A ring buffer gives constant-time operations with fixed memory:
//! - O(1) insertion (overwrites oldest when full)
//! - O(1) access to the most recent sample
//! - O(n) oldest-to-newest traversal for window statistics
//! - zero heap allocations
//!
//! ### Overwrite Policy
//!
//! `push` never fails and never refuses a sample. When the buffer is full the
//! oldest slot is overwritten unconditionally: in a live physiological stream
//! the newest data is always more valuable than the oldest.
//!
//! ### Window-Fill Events
//!
//! The extractors recompute their window statistics only when the write
//! cursor completes a full cycle, not on every sample. `push` returns `true`
//! at exactly that moment so callers never have to track a second counter.
//!
//! ## Usage Example
//!
//! ```rust
//! use vitalvest_core::buffer::RingBuffer;
//!
//! let mut window: RingBuffer<u16, 4> = RingBuffer::new();
//!
//! window.push(512);
//! window.push(498);
//!
//! assert_eq!(window.latest(), Some(&498));
//!
//! // Window statistics traverse oldest to newest
//! let sum: u32 = window.iter().map(|&s| s as u32).sum();
//! assert_eq!(sum, 1010);
//! ```

/// Fixed-size circular buffer for raw sample history
///
/// Overwrites the oldest slot when full, maintaining a sliding window of the
/// last `N` values without dynamic allocation.
///
/// ## Type Parameters
///
/// - `T`: the stored sample type. Must be `Copy` — the buffer holds raw ADC
///   counts or validated intervals, never owning types.
/// - `N`: window capacity, fixed at compile time. Powers of 2 let the
///   compiler turn the wrap-around modulo into a bit mask.
///
/// ## Internal Invariants
///
/// - `write_pos < N` at all times
/// - `len <= N`
/// - iteration visits samples in chronological order
///
/// Not thread-safe; each buffer is owned by exactly one extractor.
#[derive(Clone)]
pub struct RingBuffer<T: Copy, const N: usize> {
    /// Storage using Option for uninitialized slots; avoids unsafe code
    data: [Option<T>; N],

    /// Index of the next write; wraps to 0 after N
    write_pos: usize,

    /// Number of valid samples; grows to N and stays there
    len: usize,
}

impl<T: Copy, const N: usize> RingBuffer<T, N> {
    /// Creates a new empty buffer
    ///
    /// Const so buffers can live in static storage on embedded targets.
    pub const fn new() -> Self {
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Adds a sample, overwriting the oldest when full
    ///
    /// Returns `true` when this push completed a full cursor cycle — the
    /// window-fill event that triggers statistics recomputation in the
    /// extractors. The event fires every N pushes, starting with the N-th.
    pub fn push(&mut self, sample: T) -> bool {
        self.data[self.write_pos] = Some(sample);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }

        self.write_pos == 0
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no sample has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once N samples have been stored
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// The most recent sample, O(1)
    pub fn latest(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        // Most recent is one before the write position
        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };

        self.data[idx].as_ref()
    }

    /// Iterate over samples from oldest to newest
    pub fn iter(&self) -> RingBufferIter<T, N> {
        RingBufferIter {
            buffer: self,
            index: 0,
            count: 0,
        }
    }

    /// Discard all samples
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }

    /// Sample by logical index (0 = oldest, len-1 = newest)
    ///
    /// When the buffer is full the oldest element sits at `write_pos`, so the
    /// logical index is offset by the cursor:
    ///
    /// ```text
    /// Physical:  [D, E, A, B, C]  (write_pos = 2)
    /// Logical:   [A, B, C, D, E]
    /// logical[0] = physical[(2+0) % 5] = A
    /// ```
    fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        self.data[actual_index].as_ref()
    }
}

/// Iterator over ring buffer contents, oldest to newest
#[derive(Clone)]
pub struct RingBufferIter<'a, T: Copy, const N: usize> {
    buffer: &'a RingBuffer<T, N>,
    index: usize,
    count: usize,
}

impl<'a, T: Copy, const N: usize> Iterator for RingBufferIter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count >= self.buffer.len() {
            return None;
        }

        let item = self.buffer.get(self.index)?;
        self.index += 1;
        self.count += 1;
        Some(item)
    }
}

impl<T: Copy, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_buffer() {
        let buffer: RingBuffer<u16, 5> = RingBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.latest().is_none());
    }

    #[test]
    fn push_and_latest() {
        let mut buffer = RingBuffer::<u16, 5>::new();

        buffer.push(512);
        assert_eq!(buffer.len(), 1);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.latest(), Some(&512));
    }

    #[test]
    fn overwrite_discards_oldest() {
        let mut buffer = RingBuffer::<u16, 3>::new();

        // N+1 pushes: latest() is the 4th value, the 1st is gone
        for v in [10u16, 20, 30, 40] {
            buffer.push(v);
        }

        assert_eq!(buffer.len(), 3);
        assert!(buffer.is_full());
        assert_eq!(buffer.latest(), Some(&40));

        // Oldest survivor is the 2nd push
        let values: Vec<u16> = buffer.iter().copied().collect();
        assert_eq!(values, vec![20, 30, 40]);
    }

    #[test]
    fn iterator_order() {
        let mut buffer = RingBuffer::<u16, 4>::new();

        for v in 0..4u16 {
            buffer.push(v);
        }

        let values: Vec<u16> = buffer.iter().copied().collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }

    #[test]
    fn window_fill_fires_every_n_pushes() {
        let mut buffer = RingBuffer::<u16, 3>::new();

        assert!(!buffer.push(1));
        assert!(!buffer.push(2));
        assert!(buffer.push(3)); // cursor wrapped: first window-fill
        assert!(!buffer.push(4));
        assert!(!buffer.push(5));
        assert!(buffer.push(6)); // second window-fill
    }

    #[test]
    fn clear_resets_cursor() {
        let mut buffer = RingBuffer::<u16, 3>::new();
        buffer.push(1);
        buffer.push(2);
        buffer.clear();

        assert!(buffer.is_empty());
        assert!(buffer.latest().is_none());

        // Window-fill counting restarts from scratch
        assert!(!buffer.push(7));
        assert!(!buffer.push(8));
        assert!(buffer.push(9));
    }

    proptest! {
        #[test]
        fn latest_is_always_last_pushed(values in proptest::collection::vec(any::<u16>(), 1..64)) {
            let mut buffer = RingBuffer::<u16, 8>::new();
            for &v in &values {
                buffer.push(v);
            }
            prop_assert_eq!(buffer.latest(), values.last());
        }

        #[test]
        fn len_never_exceeds_capacity(count in 0usize..100) {
            let mut buffer = RingBuffer::<u16, 8>::new();
            for i in 0..count {
                buffer.push(i as u16);
            }
            prop_assert!(buffer.len() <= 8);
            prop_assert_eq!(buffer.len(), count.min(8));
        }
    }
}
