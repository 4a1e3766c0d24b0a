#![cfg_attr(docsrs, feature(doc_cfg))]

//! # reel-bundler
//!
//! Build-pipeline configuration assembly for reel projects.
//!
//! This crate turns a handful of high-level parameters (entry file, user
//! component, output directory, environment) into the complete
//! configuration record an external bundling engine consumes: entry
//! chain, plugin set, cache policy, transform rules, and resolution
//! table. Assembly is pure and deterministic; the caller gets the final
//! word through an override hook.
//!
//! ## Quick Start
//!
//! ```
//! use reel_bundler::{AssembleOptions, Environment};
//!
//! # fn main() -> Result<(), reel_bundler::Error> {
//! let config = AssembleOptions::new(
//!     "./src/index.ts",
//!     "./src/Video.tsx",
//!     "./dist",
//!     Environment::Production,
//! )
//! .assemble()?;
//!
//! assert_eq!(config.entry.last().map(String::as_str), Some("./src/index.ts"));
//! assert!(config.cache.is_enabled());
//! # Ok(()) }
//! ```
//!
//! ## Overriding the assembled configuration
//!
//! The override hook runs once, after composition, and its return value
//! is the assembly result verbatim:
//!
//! ```
//! use reel_bundler::{AssembleOptions, Environment};
//!
//! # fn main() -> Result<(), reel_bundler::Error> {
//! let config = AssembleOptions::new(
//!     "./src/index.ts",
//!     "./src/Video.tsx",
//!     "./dist",
//!     Environment::Development,
//! )
//! .override_with(|mut config| {
//!     config.resolve.extensions.push(".mjs".into());
//!     config
//! })
//! .assemble()?;
//!
//! assert_eq!(config.resolve.extensions.last().map(String::as_str), Some(".mjs"));
//! # Ok(()) }
//! ```

pub mod assemble;
pub mod cache;
pub mod config;
pub mod environment;
pub mod options;
pub mod plugins;
pub mod rules;

pub use assemble::{
    FAST_REFRESH_RUNTIME, HOT_RELOAD_CLIENT, INPUT_PROPS_KEY, REACT_SHIM, assemble,
};
pub use cache::cache_name;
pub use config::{
    BundlerConfig, CachePolicy, ConfigOverride, DevServerOptions, ExperimentsOptions,
    LazyCompilation, ModuleOptions, OptimizationOptions, OutputOptions, ResolveOptions,
    SourceMapKind, StatsVerbosity,
};
pub use environment::Environment;
pub use options::AssembleOptions;
pub use plugins::{BundlerPlugin, ProgressCallback, ProgressReporter};
pub use rules::{FileMatcher, LoaderOptions, LoaderStep, ScriptSyntax, TransformRule};

// Logging utilities (optional, enabled with "logging" feature)
#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;

#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub use logging::{init_logging, init_logging_from_env};

#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub use reel_core::LogLevel;

/// Error types for reel-bundler operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required assembly parameter was empty.
    #[error("Invalid parameters: {field} must not be empty")]
    InvalidParameters {
        /// Name of the offending parameter.
        field: &'static str,
    },
}

/// Result type alias for reel-bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::InvalidParameters { .. } => "INVALID_PARAMETERS",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::InvalidParameters { field } => Some(Box::new(format!(
                "Provide a non-empty value for `{}`. Paths are only checked for emptiness, not existence.",
                field
            ))),
        }
    }
}
