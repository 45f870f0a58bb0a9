// ABOUTME: Light/dark theme flag shared between views through the application context
// ABOUTME: Cheap to clone; every clone observes the same flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared theme preference
///
/// Purely in-memory; it starts from configuration and is never persisted.
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    dark: Arc<AtomicBool>,
}

impl ThemeState {
    /// Create with an initial value
    #[must_use]
    pub fn new(dark: bool) -> Self {
        Self {
            dark: Arc::new(AtomicBool::new(dark)),
        }
    }

    /// Whether the dark theme is active
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }

    /// Set the flag
    pub fn set_dark(&self, dark: bool) {
        self.dark.store(dark, Ordering::Relaxed);
    }

    /// Flip the flag and return the new value
    pub fn toggle(&self) -> bool {
        !self.dark.fetch_xor(true, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_visible_to_clones() {
        let theme = ThemeState::new(false);
        let view = theme.clone();

        assert!(theme.toggle());
        assert!(view.is_dark());

        view.set_dark(false);
        assert!(!theme.is_dark());
    }
}
