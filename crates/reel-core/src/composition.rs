//! Composition descriptor records.

use serde::{Deserialize, Serialize};

/// Metadata for a single renderable composition.
///
/// A composition is a component rendered over a fixed frame count at a
/// fixed frame rate. The descriptor carries everything the preview studio
/// and the renderer need to schedule it; the component itself lives in the
/// user's project and is referenced by module specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionDescriptor {
    /// Unique name. Used as the registry key and as the render target id.
    pub name: String,

    /// Module specifier of the component that renders this composition.
    pub component: String,

    /// Frame width in pixels.
    pub width: u32,

    /// Frame height in pixels.
    pub height: u32,

    /// Frames per second. Must be non-zero for a playable composition.
    pub fps: u32,

    /// Total length in frames.
    pub duration_in_frames: u32,
}

impl CompositionDescriptor {
    /// Playback duration in seconds.
    ///
    /// Returns `None` when `fps` is zero.
    pub fn duration_secs(&self) -> Option<f64> {
        if self.fps == 0 {
            return None;
        }
        Some(f64::from(self.duration_in_frames) / f64::from(self.fps))
    }
}
