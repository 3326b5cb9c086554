//! Filter registry: lookup by kind or name, picker ordering.

use std::collections::HashMap;

use ss_common::FilterKind;
use tracing::{debug, info};

use crate::error::FilterError;
use crate::preset::FilterPreset;

/// Registry holding the preset for each available filter.
pub struct FilterRegistry {
    presets: HashMap<FilterKind, FilterPreset>,
}

impl FilterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            presets: HashMap::new(),
        }
    }

    /// Create a registry with the built-in preset for every filter.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for kind in FilterKind::all() {
            registry.register(FilterPreset::builtin(*kind));
        }

        info!(count = registry.presets.len(), "Registered built-in filters");

        registry
    }

    /// Register a preset. Replaces any previous preset for the same kind.
    pub fn register(&mut self, preset: FilterPreset) {
        debug!(kind = %preset.kind, "Filter preset registered");
        self.presets.insert(preset.kind, preset);
    }

    /// Try to register a preset, failing if its kind is already present.
    pub fn try_register(&mut self, preset: FilterPreset) -> Result<(), FilterError> {
        if self.presets.contains_key(&preset.kind) {
            return Err(FilterError::AlreadyRegistered { kind: preset.kind });
        }
        self.register(preset);
        Ok(())
    }

    pub fn get(&self, kind: FilterKind) -> Option<&FilterPreset> {
        self.presets.get(&kind)
    }

    /// Look up a preset by its identifier (`"sepia"`, `"Blur"`, ...).
    pub fn lookup(&self, name: &str) -> Result<&FilterPreset, FilterError> {
        name.parse::<FilterKind>()
            .ok()
            .and_then(|kind| self.get(kind))
            .ok_or_else(|| FilterError::NotFound {
                name: name.to_string(),
            })
    }

    /// Registered presets in picker order.
    pub fn list(&self) -> Vec<&FilterPreset> {
        FilterKind::all()
            .iter()
            .filter_map(|kind| self.presets.get(kind))
            .collect()
    }

    /// Badge shown over a filtered image; None when no filter is active.
    pub fn badge_text(&self, kind: FilterKind) -> Option<&str> {
        if kind.is_none() {
            return None;
        }
        self.get(kind).map(|p| p.display_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::OverlayTint;

    #[test]
    fn empty_registry() {
        let reg = FilterRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.get(FilterKind::Sepia).is_none());
        assert!(reg.list().is_empty());
    }

    #[test]
    fn with_builtins_has_every_filter() {
        let reg = FilterRegistry::with_builtins();
        assert_eq!(reg.len(), FilterKind::all().len());
        for kind in FilterKind::all() {
            assert_eq!(reg.get(*kind).unwrap().kind, *kind);
        }
    }

    #[test]
    fn list_follows_picker_order() {
        let reg = FilterRegistry::with_builtins();
        let names: Vec<_> = reg.list().iter().map(|p| p.display_name.as_str()).collect();
        assert_eq!(names, vec!["None", "Sepia", "Blur", "Invert", "Grayscale"]);
    }

    #[test]
    fn lookup_by_name() {
        let reg = FilterRegistry::with_builtins();
        assert_eq!(reg.lookup("Blur").unwrap().kind, FilterKind::Blur);
        let err = reg.lookup("vintage").unwrap_err();
        assert!(matches!(err, FilterError::NotFound { .. }));
    }

    #[test]
    fn lookup_known_name_missing_from_registry() {
        let reg = FilterRegistry::new();
        assert!(matches!(
            reg.lookup("sepia"),
            Err(FilterError::NotFound { .. })
        ));
    }

    #[test]
    fn badge_text_skips_none() {
        let reg = FilterRegistry::with_builtins();
        assert_eq!(reg.badge_text(FilterKind::None), None);
        assert_eq!(reg.badge_text(FilterKind::Grayscale), Some("Grayscale"));
    }

    #[test]
    fn try_register_duplicate_fails() {
        let mut reg = FilterRegistry::new();
        reg.register(FilterPreset::builtin(FilterKind::Sepia));
        let err = reg
            .try_register(FilterPreset::builtin(FilterKind::Sepia))
            .unwrap_err();
        assert!(matches!(err, FilterError::AlreadyRegistered { .. }));
    }

    #[test]
    fn register_overwrites() {
        let mut reg = FilterRegistry::with_builtins();
        let custom = FilterPreset::new(
            FilterKind::Sepia,
            "photo-filter",
            Some(OverlayTint::new(112, 66, 20, 0.3)),
        );
        reg.register(custom.clone());
        assert_eq!(reg.len(), FilterKind::all().len());
        assert_eq!(reg.get(FilterKind::Sepia), Some(&custom));
    }
}
