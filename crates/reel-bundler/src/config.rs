//! Assembled configuration data model.
//!
//! [`BundlerConfig`] is a pure description handed to an external bundling
//! engine. It is composed fresh on every [`assemble`](crate::assemble())
//! call and never mutated afterwards, except by the caller's override hook.
//!
//! Everything here except [`BundlerConfig`] itself (and the plugin list it
//! carries) is plain data and serializes with serde. The top-level record
//! holds callback-bearing plugins, so it supports structural equality and
//! cloning but not serde.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::plugins::BundlerPlugin;
use crate::rules::TransformRule;

/// Caller-supplied rewrite applied to the assembled configuration.
///
/// The override is a total function: it receives the whole composed
/// [`BundlerConfig`] and whatever it returns is the assembly result,
/// verbatim. It is not a merge and there is no post-override validation.
pub type ConfigOverride = Arc<dyn Fn(BundlerConfig) -> BundlerConfig + Send + Sync>;

/// The assembled build-pipeline configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BundlerConfig {
    /// Environment the bundle targets.
    pub mode: Environment,

    /// Minification and chunking policy. Both stay off; the renderer
    /// consumes one unminified bundle.
    pub optimization: OptimizationOptions,

    /// Engine experiments, currently just lazy compilation.
    pub experiments: ExperimentsOptions,

    /// Persistent-cache policy, namespaced per environment and input props.
    pub cache: CachePolicy,

    /// Source-map flavor for diagnostics.
    pub devtool: SourceMapKind,

    /// Diagnostic output verbosity.
    pub stats: StatsVerbosity,

    /// Ordered entry chain. Never empty; processed in listed order.
    pub entry: Vec<String>,

    /// Environment-dependent plugin set.
    pub plugins: Vec<BundlerPlugin>,

    /// Bundle emission target. Always `Some` out of the assembler; the
    /// override hook may drop it.
    pub output: Option<OutputOptions>,

    /// Preview-server block. Always `Some` out of the assembler.
    pub dev_server: Option<DevServerOptions>,

    /// Module resolution: extension priority and forced aliases.
    pub resolve: ResolveOptions,

    /// Per-file-type transform rules.
    pub module: ModuleOptions,
}

/// Minification and code-splitting switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationOptions {
    pub minimize: bool,
    pub split_chunks: bool,
}

/// Engine experiment switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentsOptions {
    pub lazy_compilation: LazyCompilation,
}

/// Lazy-compilation policy.
///
/// Development keeps it on but exempts entries so the preview boots with
/// the full entry chain compiled; production disables it outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LazyCompilation {
    Disabled,
    Enabled {
        /// Whether entry modules also compile lazily.
        entries: bool,
    },
}

/// Persistent-cache policy for the bundling engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CachePolicy {
    /// No persistent cache.
    Disabled,
    /// Filesystem-backed cache under an isolated namespace.
    Filesystem {
        /// Cache namespace, from [`cache_name`](crate::cache::cache_name).
        name: String,
    },
}

impl CachePolicy {
    /// True when a persistent cache is configured.
    pub fn is_enabled(&self) -> bool {
        matches!(self, CachePolicy::Filesystem { .. })
    }

    /// The cache namespace, if caching is enabled.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            CachePolicy::Disabled => None,
            CachePolicy::Filesystem { name } => Some(name),
        }
    }
}

/// Source-map flavor requested from the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapKind {
    /// Line-accurate maps, cheap enough to rebuild on every change.
    #[default]
    CheapModuleSourceMap,
    /// Full-fidelity maps.
    SourceMap,
    /// No source maps.
    None,
}

/// Diagnostic output verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatsVerbosity {
    ErrorsOnly,
    #[default]
    Normal,
    Verbose,
}

/// Bundle emission target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Identifier the bundle binds its global scope to.
    pub global_object: String,
    /// Emitted bundle filename.
    pub filename: String,
    /// Directory the bundle is written to.
    pub path: PathBuf,
}

/// Preview-server behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    /// Directory of static assets served alongside the bundle.
    pub static_root: PathBuf,
    /// Serve the index document for unknown routes.
    pub history_api_fallback: bool,
    /// Push rebuilt modules to connected clients.
    pub hot: bool,
}

/// Module-resolution descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Extensions tried in priority order for extensionless imports.
    pub extensions: Vec<String>,
    /// Specifier aliases. Keys ending in `$` match exactly, mirroring the
    /// engine's convention; other keys match by prefix.
    pub alias: BTreeMap<String, String>,
}

/// Per-file-type transform rules, in documented order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOptions {
    pub rules: Vec<TransformRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_policy_helpers() {
        let disabled = CachePolicy::Disabled;
        assert!(!disabled.is_enabled());
        assert_eq!(disabled.namespace(), None);

        let fs = CachePolicy::Filesystem {
            name: "reel-production-abc".into(),
        };
        assert!(fs.is_enabled());
        assert_eq!(fs.namespace(), Some("reel-production-abc"));
    }

    #[test]
    fn test_source_map_kind_serialized_name() {
        let json = serde_json::to_string(&SourceMapKind::CheapModuleSourceMap).unwrap();
        assert_eq!(json, "\"cheap-module-source-map\"");
    }

    #[test]
    fn test_stats_verbosity_default() {
        assert_eq!(StatsVerbosity::default(), StatsVerbosity::Normal);
    }

    #[test]
    fn test_lazy_compilation_variants_distinct() {
        assert_ne!(
            LazyCompilation::Disabled,
            LazyCompilation::Enabled { entries: false }
        );
        assert_ne!(
            LazyCompilation::Enabled { entries: true },
            LazyCompilation::Enabled { entries: false }
        );
    }
}
