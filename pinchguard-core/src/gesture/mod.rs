//! Pinch gesture recognition.
//!
//! [classify] is the whole state machine as a pure function. The
//! [ScaleDetector] drives the same transitions and additionally reports the
//! focus point and spread of the contacts, for hosts that want to observe what
//! is being blocked.

mod scale;
mod state;

pub use scale::{ScaleDetector, ScaleEvent};
pub use state::{classify, GestureState, Verdict};
