//! Priority module - ordering scale for competing interceptors, roots and views

use std::fmt;

/// Priority used to choose among competing candidates
///
/// Higher values win. The named levels mirror the host application's scale;
/// any integer in between is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(i64);

impl Priority {
    /// Wins over every other priority
    pub const HIGHEST: Priority = Priority(i64::MAX);

    /// Preferred over the default
    pub const HIGH: Priority = Priority(1000);

    /// Neutral priority
    pub const DEFAULT: Priority = Priority(0);

    /// Yields to the default
    pub const LOW: Priority = Priority(-1000);

    /// Loses to every other priority
    pub const LOWEST: Priority = Priority(i64::MIN);

    /// Create a priority from a raw value
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::DEFAULT
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Priority::HIGHEST => f.write_str("highest"),
            Priority::LOWEST => f.write_str("lowest"),
            Priority(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_levels_ordered() {
        assert!(Priority::HIGHEST > Priority::HIGH);
        assert!(Priority::HIGH > Priority::DEFAULT);
        assert!(Priority::DEFAULT > Priority::LOW);
        assert!(Priority::LOW > Priority::LOWEST);
    }

    #[test]
    fn test_highest_beats_any_value() {
        assert!(Priority::HIGHEST > Priority::new(i64::MAX - 1));
        assert_eq!(Priority::HIGHEST.max(Priority::new(100)), Priority::HIGHEST);
    }

    #[test]
    fn test_display() {
        assert_eq!(Priority::HIGHEST.to_string(), "highest");
        assert_eq!(Priority::new(10).to_string(), "10");
    }
}
