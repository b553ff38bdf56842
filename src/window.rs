use serde::{Deserialize, Serialize};

use crate::error::WindowError;

/// Inclusive range of topoheights currently materialized. `low <= high`
/// always holds, and `width()` never exceeds the configured maximum for
/// windows built through [`Window::new`] or [`Window::tail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    low: u64,
    high: u64,
}

impl Window {
    pub fn new(low: u64, high: u64, max_width: u64) -> Result<Self, WindowError> {
        if low > high {
            return Err(WindowError::ReversedBounds { low, high });
        }
        let width = high - low + 1;
        if width > max_width {
            return Err(WindowError::TooWide {
                low,
                high,
                width,
                max_width,
            });
        }
        Ok(Self { low, high })
    }

    /// The window of at most `max_width` topoheights ending at `high`.
    /// Used whenever the view tracks a chain tip or a scrub anchor.
    pub fn tail(high: u64, max_width: u64) -> Self {
        debug_assert!(max_width > 0);
        let low = high.saturating_sub(max_width - 1);
        Self { low, high }
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    pub fn width(&self) -> u64 {
        self.high - self.low + 1
    }

    pub fn contains(&self, topoheight: u64) -> bool {
        topoheight >= self.low && topoheight <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_reversed_bounds() {
        let err = Window::new(10, 5, 20).unwrap_err();
        assert_eq!(err, WindowError::ReversedBounds { low: 10, high: 5 });
    }

    #[test]
    fn rejects_over_wide_window() {
        let err = Window::new(0, 20, 20).unwrap_err();
        assert!(matches!(err, WindowError::TooWide { width: 21, .. }));
        assert!(Window::new(1, 20, 20).is_ok());
    }

    #[test]
    fn tail_clamps_near_genesis() {
        let window = Window::tail(5, 20);
        assert_eq!(window.low(), 0);
        assert_eq!(window.high(), 5);
        assert_eq!(window.width(), 6);

        let window = Window::tail(110, 20);
        assert_eq!(window.low(), 91);
        assert_eq!(window.high(), 110);
        assert_eq!(window.width(), 20);
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let window = Window::new(91, 110, 20).unwrap();
        assert!(window.contains(91));
        assert!(window.contains(110));
        assert!(!window.contains(90));
        assert!(!window.contains(111));
    }
}
