//! Counter: one big number and an increment button
//!
//! The count lives in memory for the lifetime of the lab.

/// Notification shown after each increment
pub const INCREMENTED: &str = "Counter increased!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one and return the new count; saturates at `u64::MAX`
    pub fn increment(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Count with comma thousands separators, e.g. `1,234,567`
    #[must_use]
    pub fn formatted(&self) -> String {
        let digits = self.count.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let counter = Counter::new();
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.formatted(), "0");
    }

    #[test]
    fn increment_returns_new_count() {
        let mut counter = Counter::new();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn formatted_groups_thousands() {
        let cases = [
            (999, "999"),
            (1_000, "1,000"),
            (12_345, "12,345"),
            (123_456, "123,456"),
            (1_234_567, "1,234,567"),
        ];
        for (count, expected) in cases {
            assert_eq!(Counter { count }.formatted(), expected);
        }
    }

    #[test]
    fn increment_saturates() {
        let mut counter = Counter { count: u64::MAX };
        assert_eq!(counter.increment(), u64::MAX);
    }
}
