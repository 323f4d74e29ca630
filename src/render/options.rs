//! Composition options.

/// Options for composing a page into a grid.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Feed refresh time shown on the main page (RFC 3339)
    pub last_updated: Option<String>,
}

impl ComposeOptions {
    /// Create new compose options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the last-updated timestamp.
    pub fn with_last_updated(mut self, timestamp: impl Into<String>) -> Self {
        self.last_updated = Some(timestamp.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        assert!(ComposeOptions::new().last_updated.is_none());
        let options = ComposeOptions::new().with_last_updated("2025-01-01T00:00:00Z");
        assert_eq!(options.last_updated.as_deref(), Some("2025-01-01T00:00:00Z"));
    }
}
