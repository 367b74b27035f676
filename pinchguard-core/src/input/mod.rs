//! Touch input model.
//!
//! A [TouchSample] is one reported input frame. Platforms that deliver
//! individual contact events instead of whole frames go through the
//! [ContactTracker], which groups them the same way a compositor does.

mod sample;
mod tracker;

pub use sample::{ContactPoint, TouchPhase, TouchSample};
pub use tracker::{ContactTracker, TouchEvent};
