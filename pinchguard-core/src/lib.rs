#![warn(missing_docs)]

//! Core library for pinchguard => See `pinchguard` crate.
//!
//! Contains the touch model, the pinch classifier and the event dispatcher
//! that sits in front of the normal input pipeline.

/// Contains the touch sample model and the per-contact event tracker.
pub mod input;

/// Contains the scale detector and the gesture state machine.
pub mod gesture;

/// Contains the [InputClassifier](classifier::InputClassifier).
pub mod classifier;

/// Contains the [EventDispatcher](dispatch::EventDispatcher) and the downstream handler chain.
pub mod dispatch;

/// Contains dispatch counters.
pub mod diagnostics;
