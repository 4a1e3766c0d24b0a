//! Assembly parameters.
//!
//! [`AssembleOptions`] is the caller-facing surface of the assembler. Use
//! the builder methods for the optional pieces, then hand the options to
//! [`assemble`](crate::assemble()) (or call [`AssembleOptions::assemble`]).

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use crate::config::{BundlerConfig, ConfigOverride};
use crate::environment::Environment;
use crate::plugins::ProgressCallback;
use crate::{Error, Result};

/// Parameters for one configuration assembly.
#[derive(Clone)]
pub struct AssembleOptions {
    /// Root entry module of the bundle.
    pub entry: String,

    /// The user's composition component module.
    pub user_component: String,

    /// Directory the bundle is emitted into.
    pub out_dir: PathBuf,

    /// Target environment.
    pub environment: Environment,

    /// Final rewrite of the assembled configuration. `None` is identity.
    pub override_fn: Option<ConfigOverride>,

    /// Build-progress callback, wired into the production plugin set.
    pub on_progress: Option<ProgressCallback>,

    /// Whether the engine keeps a persistent cache.
    pub enable_caching: bool,

    /// Input props injected into the bundle. Defaults to `{}` when absent.
    pub input_props: Option<Value>,
}

impl AssembleOptions {
    /// Options with the required parameters and all defaults.
    pub fn new(
        entry: impl Into<String>,
        user_component: impl Into<String>,
        out_dir: impl Into<PathBuf>,
        environment: Environment,
    ) -> Self {
        Self {
            entry: entry.into(),
            user_component: user_component.into(),
            out_dir: out_dir.into(),
            environment,
            override_fn: None,
            on_progress: None,
            enable_caching: reel_core::DEFAULT_CACHE_ENABLED,
            input_props: None,
        }
    }

    /// Install an override hook.
    pub fn override_with(
        mut self,
        f: impl Fn(BundlerConfig) -> BundlerConfig + Send + Sync + 'static,
    ) -> Self {
        self.override_fn = Some(Arc::new(f));
        self
    }

    /// Install a progress callback.
    pub fn on_progress(mut self, f: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.on_progress = Some(Arc::new(f));
        self
    }

    /// Enable or disable the persistent cache.
    pub fn caching(mut self, enabled: bool) -> Self {
        self.enable_caching = enabled;
        self
    }

    /// Set the input props injected into the bundle.
    pub fn input_props(mut self, props: Value) -> Self {
        self.input_props = Some(props);
        self
    }

    /// Check the required parameters.
    ///
    /// Only emptiness is checked; paths are not required to exist.
    pub fn validate(&self) -> Result<()> {
        if self.entry.is_empty() {
            return Err(Error::InvalidParameters { field: "entry" });
        }
        if self.user_component.is_empty() {
            return Err(Error::InvalidParameters {
                field: "user_component",
            });
        }
        if self.out_dir.as_os_str().is_empty() {
            return Err(Error::InvalidParameters { field: "out_dir" });
        }
        Ok(())
    }

    /// Assemble the configuration from these options.
    pub fn assemble(self) -> Result<BundlerConfig> {
        crate::assemble(self)
    }
}

impl std::fmt::Debug for AssembleOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssembleOptions")
            .field("entry", &self.entry)
            .field("user_component", &self.user_component)
            .field("out_dir", &self.out_dir)
            .field("environment", &self.environment)
            .field("override_fn", &self.override_fn.is_some())
            .field("on_progress", &self.on_progress.is_some())
            .field("enable_caching", &self.enable_caching)
            .field("input_props", &self.input_props)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let options = AssembleOptions::new(
            "./src/index.ts",
            "./src/Video.tsx",
            "/tmp/out",
            Environment::Production,
        );
        assert!(options.enable_caching);
        assert!(options.override_fn.is_none());
        assert!(options.on_progress.is_none());
        assert!(options.input_props.is_none());
    }

    #[test]
    fn test_validate_names_offending_field() {
        let empty_entry =
            AssembleOptions::new("", "./src/Video.tsx", "/tmp/out", Environment::Production);
        assert_eq!(
            empty_entry.validate().unwrap_err(),
            Error::InvalidParameters { field: "entry" }
        );

        let empty_component =
            AssembleOptions::new("./src/index.ts", "", "/tmp/out", Environment::Production);
        assert_eq!(
            empty_component.validate().unwrap_err(),
            Error::InvalidParameters {
                field: "user_component"
            }
        );

        let empty_out_dir = AssembleOptions::new(
            "./src/index.ts",
            "./src/Video.tsx",
            "",
            Environment::Production,
        );
        assert_eq!(
            empty_out_dir.validate().unwrap_err(),
            Error::InvalidParameters { field: "out_dir" }
        );
    }

    #[test]
    fn test_builder_chain() {
        let options = AssembleOptions::new(
            "./src/index.ts",
            "./src/Video.tsx",
            "/tmp/out",
            Environment::Development,
        )
        .caching(false)
        .input_props(serde_json::json!({"a": 1}))
        .on_progress(|_| {})
        .override_with(|config| config);

        assert!(!options.enable_caching);
        assert!(options.on_progress.is_some());
        assert!(options.override_fn.is_some());
        assert_eq!(options.input_props, Some(serde_json::json!({"a": 1})));
    }

    #[test]
    fn test_debug_shows_callback_presence() {
        let options = AssembleOptions::new(
            "./src/index.ts",
            "./src/Video.tsx",
            "/tmp/out",
            Environment::Development,
        )
        .on_progress(|_| {});

        let rendered = format!("{options:?}");
        assert!(rendered.contains("on_progress: true"));
        assert!(rendered.contains("override_fn: false"));
    }
}
