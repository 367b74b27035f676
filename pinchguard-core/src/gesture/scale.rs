use nalgebra::{Point2, Vector2};

use super::state::GestureState;
use crate::input::{ContactPoint, TouchSample};

/// Progress report of the [ScaleDetector].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleEvent {
    /// Two or more contacts became active.
    Begin {
        /// Centroid of the active contacts.
        focus: Point2<f64>,
        /// Spread of the active contacts.
        span: f64,
    },
    /// The gesture continues.
    Update {
        /// Centroid of the active contacts.
        focus: Point2<f64>,
        /// Spread of the active contacts.
        span: f64,
        /// Span relative to the previous event.
        scale_factor: f64,
    },
    /// The touch stream completed or was cancelled.
    End,
}

/// Two-finger scale detector.
///
/// Always claims the gesture: there is no mode in which scaling is passed
/// through to the surface.
#[derive(Debug, Clone, Default)]
pub struct ScaleDetector {
    state: GestureState,
    prev_span: f64,
}

impl ScaleDetector {
    /// Create an idle detector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The gesture state the detector is tracking.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns true between [ScaleEvent::Begin] and [ScaleEvent::End].
    pub fn is_in_progress(&self) -> bool {
        self.state.is_scaling()
    }

    /// Observe a sample. Returns an event when a gesture is in progress.
    pub fn on_touch(&mut self, sample: &TouchSample) -> Option<ScaleEvent> {
        let prev = self.state;
        self.state = prev.advance(sample);

        match (prev, self.state) {
            (GestureState::Idle, GestureState::Scaling) => {
                let (focus, span) = spread(sample.contacts());
                self.prev_span = span;
                Some(ScaleEvent::Begin { focus, span })
            },
            (GestureState::Scaling, GestureState::Idle) => {
                self.prev_span = 0.0;
                Some(ScaleEvent::End)
            },
            (GestureState::Scaling, GestureState::Scaling) => Some(self.update(sample.contacts())),
            (GestureState::Idle, GestureState::Idle) => None,
        }
    }

    /// Drop any gesture in progress without reporting an end.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.prev_span = 0.0;
    }

    fn update(&mut self, contacts: &[ContactPoint]) -> ScaleEvent {
        let (focus, span) = spread(contacts);

        // A lone contact has no span; hold the last one.
        if contacts.len() < 2 {
            return ScaleEvent::Update {
                focus,
                span: self.prev_span,
                scale_factor: 1.0,
            };
        }

        let scale_factor = if self.prev_span > 0.0 {
            span / self.prev_span
        } else {
            1.0
        };
        self.prev_span = span;

        ScaleEvent::Update {
            focus,
            span,
            scale_factor,
        }
    }
}

/// Centroid and diameter-style spread of a set of contacts.
fn spread(contacts: &[ContactPoint]) -> (Point2<f64>, f64) {
    if contacts.is_empty() {
        return (Point2::origin(), 0.0);
    }

    let count = contacts.len() as f64;
    let sum = contacts
        .iter()
        .fold(Vector2::<f64>::zeros(), |acc, c| acc + c.position.coords);
    let focus = Point2::from(sum / count);

    let deviation = contacts.iter().fold(Vector2::<f64>::zeros(), |acc, c| {
        let delta = c.position - focus;
        acc + Vector2::new(delta.x.abs(), delta.y.abs())
    }) / count;

    let span = (deviation.x * 2.0).hypot(deviation.y * 2.0);
    (focus, span)
}
