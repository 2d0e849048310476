//! Template Registry — maps template names to strategies.
//!
//! An explicit object constructed once at startup and passed by reference,
//! not ambient global state. After construction it is only read, so shared
//! references are safe across threads without locking.

use std::collections::BTreeMap;

use crate::errors::ProfileError;
use crate::models::profile::ResumeProfile;
use crate::render::minimal::MinimalTemplate;
use crate::render::modern::ModernTemplate;
use crate::render::style::StylePicker;

/// A named, swappable composition policy. Each variant hardcodes which
/// section renderers run and in what order; new variants register through
/// [`TemplateRegistry::register`] without touching existing ones.
pub trait TemplateStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Renders the full markdown document, or fails producing nothing.
    fn generate(
        &self,
        profile: &ResumeProfile,
        style: &mut dyn StylePicker,
    ) -> Result<String, ProfileError>;
}

impl std::fmt::Debug for dyn TemplateStrategy + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateStrategy")
            .field("name", &self.name())
            .finish()
    }
}

pub struct TemplateRegistry {
    strategies: BTreeMap<String, Box<dyn TemplateStrategy>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self {
            strategies: BTreeMap::new(),
        }
    }

    /// Registry with the two built-in variants, `minimal` and `modern`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MinimalTemplate));
        registry.register(Box::new(ModernTemplate::default()));
        registry
    }

    /// Registers a strategy under its lowercased name. Idempotent for the
    /// same name: re-registration replaces the previous strategy.
    pub fn register(&mut self, strategy: Box<dyn TemplateStrategy>) {
        self.strategies
            .insert(strategy.name().to_lowercase(), strategy);
    }

    /// Case-insensitive lookup. Fails with `UnknownTemplate` carrying the
    /// full list of registered names.
    pub fn resolve(&self, name: &str) -> Result<&dyn TemplateStrategy, ProfileError> {
        self.strategies
            .get(&name.to_lowercase())
            .map(|s| s.as_ref())
            .ok_or_else(|| ProfileError::UnknownTemplate {
                requested: name.to_string(),
                available: self.names(),
            })
    }

    /// Registered names in stable alphabetical order.
    pub fn names(&self) -> Vec<String> {
        self.strategies.keys().cloned().collect()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
