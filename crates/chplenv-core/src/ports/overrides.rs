//! Override lookup port.

use std::collections::HashMap;

/// Looks up user-specified configuration overrides such as `CHPL_LAUNCHER`.
pub trait OverrideSource {
    /// Value for `key`, or `None` when the user did not set it.
    ///
    /// Implementations should report empty values as `None`.
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: OverrideSource + ?Sized> OverrideSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Override source with nothing set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideSource for NoOverrides {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Fixed set of overrides, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticOverrides {
    values: HashMap<String, String>,
}

impl StaticOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl OverrideSource for StaticOverrides {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).filter(|v| !v.is_empty()).cloned()
    }
}
