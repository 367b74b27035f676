// SPDX-License-Identifier: LGPL-3.0-only
//! Error types for surface configuration.

/// Errors that can occur while configuring the rendering surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The rendering surface is not attached yet. Retry later.
    #[error("Rendering surface is not attached")]
    NotAttached,
}
