//! Fixed-Size Sample Window
//!
//! ## Overview
//!
//! `SampleWindow` keeps the most recent `N` samples of one sensor channel.
//! It is a ring buffer sized at compile time through a const generic, so the
//! window never allocates and never grows.
//!
//! ## Semantics
//!
//! The window behaves like a FIFO queue with automatic eviction:
//! - `push()` appends at the newest end
//! - once `N` samples are held, each push drops the oldest one
//! - there is no way to remove samples other than pushing new ones
//!
//! ### Memory Layout
//!
//! ```text
//! SampleWindow<5> after pushing a, b, c, d, e, f:
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  f  │  b  │  c  │  d  │  e  │  ← slots
//! └─────┴─────┴─────┴─────┴─────┘
//!          ↑
//!          └── write_pos = 1, also the oldest sample once full
//!
//! Logical order (oldest first): b, c, d, e, f
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use resonance_core::buffer::SampleWindow;
//!
//! let mut window: SampleWindow<3> = SampleWindow::new();
//! for v in [1.0, 2.0, 3.0, 4.0] {
//!     window.push(v);
//! }
//!
//! let values: Vec<f64> = window.iter().collect();
//! assert_eq!(values, vec![2.0, 3.0, 4.0]);
//! ```

/// Fixed-capacity FIFO of `f64` samples
///
/// ## Internal Invariants
///
/// - `write_pos < N`
/// - `len <= N`
/// - slots `[0, len)` are populated while not full; all slots once full
#[derive(Debug, Clone)]
pub struct SampleWindow<const N: usize> {
    slots: [f64; N],

    /// Index of the next write, wraps to 0 at N
    write_pos: usize,

    /// Number of populated slots, saturates at N
    len: usize,
}

impl<const N: usize> SampleWindow<N> {
    /// Creates an empty window
    ///
    /// Usable in `static` context. Panics at compile time in const
    /// evaluation (and at run time otherwise) when `N == 0`.
    pub const fn new() -> Self {
        assert!(N > 0, "sample window needs at least one slot");
        Self {
            slots: [0.0; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Appends a sample, evicting the oldest one when full
    pub fn push(&mut self, value: f64) {
        self.slots[self.write_pos] = value;
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.len
    }

    /// True until the first push
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once `N` samples have been pushed
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Maximum number of samples held
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Most recently pushed sample
    pub fn newest(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }

        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };
        Some(self.slots[idx])
    }

    /// Sum of the held samples
    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Iterates samples from oldest to newest
    pub fn iter(&self) -> SampleWindowIter<'_, N> {
        SampleWindowIter {
            window: self,
            index: 0,
        }
    }

    /// Sample at logical position `index` (0 = oldest)
    ///
    /// While filling, data starts at slot 0. Once full, the oldest sample
    /// sits at `write_pos`.
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.len {
            return None;
        }

        let slot = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        Some(self.slots[slot])
    }
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Oldest-first iterator over a [`SampleWindow`]
pub struct SampleWindowIter<'a, const N: usize> {
    window: &'a SampleWindow<N>,
    index: usize,
}

impl<'a, const N: usize> Iterator for SampleWindowIter<'a, N> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.window.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.window.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, const N: usize> ExactSizeIterator for SampleWindowIter<'a, N> {}
