//! Registry of available compositions and the current selection.
//!
//! A keyed store with one extra piece of state: the name of the composition
//! the studio is currently previewing. Plain CRUD, no I/O.

use rustc_hash::FxHashMap;

use crate::composition::CompositionDescriptor;
use crate::{Error, Result};

/// Keyed store of composition descriptors plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct CompositionRegistry {
    compositions: FxHashMap<String, CompositionDescriptor>,
    current: Option<String>,
}

impl CompositionRegistry {
    /// Create a new empty registry with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a composition.
    ///
    /// An existing entry with the same name is replaced.
    pub fn register(&mut self, descriptor: CompositionDescriptor) {
        tracing::debug!(name = %descriptor.name, "registering composition");
        self.compositions
            .insert(descriptor.name.clone(), descriptor);
    }

    /// Remove a composition by name, returning it if it was registered.
    ///
    /// The selection is cleared when it pointed at the removed entry, so
    /// `current()` never dangles.
    pub fn unregister(&mut self, name: &str) -> Option<CompositionDescriptor> {
        let removed = self.compositions.remove(name);
        if removed.is_some() && self.current.as_deref() == Some(name) {
            self.current = None;
        }
        removed
    }

    /// Get a composition by name.
    pub fn get(&self, name: &str) -> Option<&CompositionDescriptor> {
        self.compositions.get(name)
    }

    /// Check if a composition with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.compositions.contains_key(name)
    }

    /// Select the composition to preview or render next.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownComposition`] when no composition with that
    /// name is registered; the previous selection is left untouched.
    pub fn select(&mut self, name: &str) -> Result<()> {
        if !self.compositions.contains_key(name) {
            return Err(Error::UnknownComposition(name.to_string()));
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    /// The currently selected composition, if any.
    pub fn current(&self) -> Option<&CompositionDescriptor> {
        self.current
            .as_deref()
            .and_then(|name| self.compositions.get(name))
    }

    /// Name of the currently selected composition, if any.
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Drop the selection without touching the stored compositions.
    pub fn clear_selection(&mut self) {
        self.current = None;
    }

    /// Get the number of registered compositions.
    pub fn len(&self) -> usize {
        self.compositions.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.compositions.is_empty()
    }

    /// Remove all compositions and clear the selection.
    pub fn clear(&mut self) {
        self.compositions.clear();
        self.current = None;
    }

    /// Get an iterator over all composition names.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.compositions.keys()
    }

    /// Iterate over all registered compositions.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CompositionDescriptor)> {
        self.compositions.iter()
    }
}
