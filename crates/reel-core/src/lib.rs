//! # reel-core
//!
//! Shared foundation for the Reel video-composition toolkit.
//!
//! This crate holds the pieces the rest of the toolchain leans on without
//! belonging to any single tool: the registry of compositions a project
//! exposes, the level-filtered console logger used for status reporting,
//! and process-wide defaults consumed by `reel-bundler`.
//!
//! ## Quick Start
//!
//! ```
//! use reel_core::{CompositionDescriptor, CompositionRegistry};
//!
//! # fn main() -> reel_core::Result<()> {
//! let mut registry = CompositionRegistry::new();
//! registry.register(CompositionDescriptor {
//!     name: "intro".into(),
//!     component: "./src/Intro.tsx".into(),
//!     width: 1920,
//!     height: 1080,
//!     fps: 30,
//!     duration_in_frames: 150,
//! });
//!
//! registry.select("intro")?;
//! assert_eq!(registry.current_name(), Some("intro"));
//! # Ok(()) }
//! ```

pub mod composition;
pub mod log;
pub mod registry;

pub use composition::CompositionDescriptor;
pub use log::LogLevel;
pub use registry::CompositionRegistry;

/// Whether the bundler's persistent filesystem cache is enabled when the
/// caller does not say otherwise.
pub const DEFAULT_CACHE_ENABLED: bool = true;

/// Error types for reel-core operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Selection named a composition that is not registered.
    #[error("unknown composition: {0}")]
    UnknownComposition(String),
}

/// Result type alias for reel-core operations.
pub type Result<T> = std::result::Result<T, Error>;
