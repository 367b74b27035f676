use crate::input::{TouchPhase, TouchSample};

/// Whether a multi-contact scaling gesture is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// No gesture. Initial and terminal state.
    #[default]
    Idle,
    /// A scale gesture began and has not ended yet.
    Scaling,
}

impl GestureState {
    /// Returns true while a scale gesture is in progress.
    pub fn is_scaling(self) -> bool {
        self == GestureState::Scaling
    }

    /// The state after observing `sample`.
    ///
    /// A gesture starts as soon as two contacts are active. It ends only when
    /// the touch stream completes, so a single finger left over from a pinch
    /// keeps the gesture alive.
    pub fn advance(self, sample: &TouchSample) -> GestureState {
        match self {
            GestureState::Idle
                if sample.phase() != TouchPhase::Cancel && sample.contact_count() >= 2 =>
            {
                GestureState::Scaling
            },
            GestureState::Scaling if sample.completes_stream() => GestureState::Idle,
            state => state,
        }
    }
}

/// Per-sample decision of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Swallow the sample.
    Consume,
    /// Hand the sample on, unmodified.
    Forward,
}

impl Verdict {
    /// Decide for a sample with `contact_count` contacts that moved the
    /// gesture from `before` to `after`.
    ///
    /// The sample that ends a gesture is still part of it and gets consumed.
    pub fn decide(contact_count: usize, before: GestureState, after: GestureState) -> Self {
        if contact_count > 1 || before.is_scaling() || after.is_scaling() {
            Verdict::Consume
        } else {
            Verdict::Forward
        }
    }

    /// Returns true for [Verdict::Consume].
    pub fn is_consume(self) -> bool {
        self == Verdict::Consume
    }
}

/// Pure transition function of the pinch blocker.
pub fn classify(prev: GestureState, sample: &TouchSample) -> (GestureState, Verdict) {
    let next = prev.advance(sample);
    (next, Verdict::decide(sample.contact_count(), prev, next))
}
