//! Environment-dependent plugin descriptors.
//!
//! Plugins are descriptions, not behavior: the consuming engine instantiates
//! them. The one exception is [`ProgressReporter`], which carries the
//! caller's progress callback so the engine can drive it during a build.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

/// Build-progress callback, invoked with a percentage from 0 to 100.
pub type ProgressCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// A plugin slot in the assembled configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum BundlerPlugin {
    /// Renders build errors as an overlay in the preview.
    ErrorOverlay,
    /// Wires component hot-swapping into the module graph.
    FastRefresh,
    /// Pushes rebuilt modules to connected preview clients.
    HotModuleReplacement,
    /// Substitutes compile-time constants into the bundle.
    Define {
        /// Replacement expressions keyed by the identifier they replace.
        /// Values are serialized by the engine at substitution time.
        values: BTreeMap<String, Value>,
    },
    /// Reports build progress through a caller-supplied callback.
    Progress(ProgressReporter),
}

impl BundlerPlugin {
    /// A [`BundlerPlugin::Define`] substituting a single identifier.
    pub fn define(key: impl Into<String>, value: Value) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.into(), value);
        BundlerPlugin::Define { values }
    }

    /// Stable identifier, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            BundlerPlugin::ErrorOverlay => "error-overlay",
            BundlerPlugin::FastRefresh => "fast-refresh",
            BundlerPlugin::HotModuleReplacement => "hot-module-replacement",
            BundlerPlugin::Define { .. } => "define",
            BundlerPlugin::Progress(_) => "progress",
        }
    }
}

/// Progress relay between the engine and the caller.
///
/// The engine hands in a completion fraction between 0 and 1; the reporter
/// converts it to a percentage rounded to two decimals and forwards it to
/// the callback. Without a callback every tick is a no-op.
#[derive(Clone)]
pub struct ProgressReporter {
    callback: Option<ProgressCallback>,
}

impl ProgressReporter {
    /// Reporter forwarding ticks to `callback`, if one is supplied.
    pub fn new(callback: Option<ProgressCallback>) -> Self {
        Self { callback }
    }

    /// True when a callback is wired in.
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Forward one engine tick. `fraction` is clamped by the engine to
    /// the unit interval; the reporter does not re-validate it.
    pub fn report(&self, fraction: f64) {
        if let Some(callback) = &self.callback {
            callback(round_percent(fraction));
        }
    }
}

/// Percentage with two decimal places.
fn round_percent(fraction: f64) -> f64 {
    (fraction * 100.0 * 100.0).round() / 100.0
}

impl std::fmt::Debug for ProgressReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Callbacks are opaque, so equality compares callback presence only.
impl PartialEq for ProgressReporter {
    fn eq(&self, other: &Self) -> bool {
        self.callback.is_some() == other.callback.is_some()
    }
}
