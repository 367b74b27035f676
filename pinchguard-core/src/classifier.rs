use crate::gesture::{GestureState, ScaleDetector, ScaleEvent, Verdict};
use crate::input::TouchSample;

/// Decides, for each [TouchSample], whether it belongs to a blocked pinch.
///
/// The [GestureState] lives in the [ScaleDetector]; the classifier only reads
/// it. It has to see every sample, including the ones it ends up forwarding,
/// or the state drifts.
#[derive(Debug, Clone, Default)]
pub struct InputClassifier {
    detector: ScaleDetector,
}

impl InputClassifier {
    /// Create a classifier in [GestureState::Idle].
    pub fn new() -> Self {
        Self::default()
    }

    /// The current gesture state.
    pub fn state(&self) -> GestureState {
        self.detector.state()
    }

    /// Returns true while a scale gesture is in progress.
    pub fn is_scaling(&self) -> bool {
        self.detector.is_in_progress()
    }

    /// Classify one sample and update the gesture state.
    pub fn on_sample(&mut self, sample: &TouchSample) -> Verdict {
        let before = self.state();

        match self.detector.on_touch(sample) {
            Some(ScaleEvent::Begin { focus, span }) => {
                log::debug!(
                    "Blocking scale gesture: {} contacts, focus ({:.1}, {:.1}), span {:.1}",
                    sample.contact_count(),
                    focus.x,
                    focus.y,
                    span
                );
            },
            Some(ScaleEvent::Update { scale_factor, .. }) => {
                log::trace!("Swallowed scale update (factor {:.3})", scale_factor);
            },
            Some(ScaleEvent::End) => {
                log::debug!("Scale gesture ended ({:?})", sample.phase());
            },
            None => {},
        }

        let verdict = Verdict::decide(sample.contact_count(), before, self.state());
        log::trace!(
            "{:?} with {} contacts -> {:?}",
            sample.phase(),
            sample.contact_count(),
            verdict
        );
        verdict
    }

    /// Force the classifier back to [GestureState::Idle].
    ///
    /// Nothing calls this on its own: a gesture whose end never arrives keeps
    /// input blocked until the host resets it, e.g. when the shell is paused.
    pub fn reset(&mut self) {
        if self.is_scaling() {
            log::debug!("Gesture state reset while scaling");
        }
        self.detector.reset();
    }
}
