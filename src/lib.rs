#![warn(missing_docs)]

//! Keep pinch gestures and zoom controls away from an embedded web surface.
//!
//! Every touch sample goes through the [EventDispatcher](core::dispatch::EventDispatcher)
//! first. Samples that belong to a multi-contact scaling gesture are swallowed;
//! everything else reaches the normal input handlers unmodified.

pub use nalgebra as math;

pub use pinchguard_core as core;
#[cfg(feature = "services")]
pub use pinchguard_services as services;

/// A "prelude" for users of pinchguard.
///
/// ```rust
/// use pinchguard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::classifier::InputClassifier;
    pub use crate::core::diagnostics::DispatchStats;
    pub use crate::core::dispatch::{DispatchResult, EventDispatcher, HandlerChain, Handling, InputHandler};
    pub use crate::core::gesture::{classify, GestureState, Verdict};
    pub use crate::core::input::{ContactPoint, ContactTracker, TouchEvent, TouchPhase, TouchSample};

    #[cfg(feature = "services")]
    pub use crate::services::{
        Permission, PermissionService, PermissionStatus, SettingsRegistry, SurfaceConfigurator, SurfaceHost,
        WebSettings,
    };

    // Math
    pub use nalgebra::Point2;
}
