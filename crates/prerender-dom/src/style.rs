//! Style Buffer
//!
//! Collects the CSS text components push into `document.head`, keyed by
//! the component instance that was being instantiated at the time.

use std::collections::HashMap;

/// Per-batch accumulator of style text
#[derive(Debug, Default)]
pub struct StyleBuffer {
    entries: HashMap<String, String>,
    current: Option<String>,
}

impl StyleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key that subsequent pushes are recorded under
    pub fn set_current_key(&mut self, key: &str) {
        self.current = Some(key.to_string());
    }

    /// Append style text under the current key
    pub fn push(&mut self, text: &str) {
        match &self.current {
            Some(key) => {
                tracing::debug!(key = %key, bytes = text.len(), "style intake");
                self.entries.entry(key.clone()).or_default().push_str(text);
            }
            None => tracing::debug!(bytes = text.len(), "style pushed before any component, dropped"),
        }
    }

    /// Accumulated style text for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    /// Remove and return the style text for a key
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
