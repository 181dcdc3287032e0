//! Verse audio queue
//!
//! An ordered, immutable list of audio locators (one per verse). The queue is
//! replaced wholesale when the verse list changes; it never mutates in place.

/// Ordered audio locators for one surah
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackQueue {
    locators: Vec<String>,
}

impl PlaybackQueue {
    /// Create a queue from locators in verse order
    pub fn new(locators: Vec<String>) -> Self {
        Self { locators }
    }

    /// Number of verses
    pub fn len(&self) -> usize {
        self.locators.len()
    }

    /// Whether the queue has no verses
    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }

    /// Locator at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.locators.get(index).map(String::as_str)
    }

    /// Whether `index` addresses a verse
    pub fn contains(&self, index: usize) -> bool {
        index < self.locators.len()
    }

    /// Whether a verse follows `index`
    pub fn has_next(&self, index: usize) -> bool {
        index + 1 < self.locators.len()
    }

    /// Whether a verse precedes `index`
    pub fn has_previous(&self, index: usize) -> bool {
        index > 0 && !self.locators.is_empty()
    }

    /// Clamp `index` into the queue (0 for an empty queue)
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.locators.len().saturating_sub(1))
    }
}
