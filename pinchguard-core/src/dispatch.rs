//! Touch dispatch.
//!
//! The [EventDispatcher] is the single entry point for touch input. It owns
//! the [InputClassifier] and the [HandlerChain] of downstream handlers, so the
//! classifier always observes a sample before any handler does: there is no
//! way to register a handler in front of it.

use indexmap::IndexMap;

use crate::classifier::InputClassifier;
use crate::diagnostics::DispatchStats;
use crate::gesture::{GestureState, Verdict};
use crate::input::{TouchPhase, TouchSample};

/// Outcome of [EventDispatcher::dispatch].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchResult {
    /// The sample was swallowed.
    Consumed,
    /// The sample went to the downstream handlers.
    Forwarded,
}

/// Answer of an [InputHandler] to a forwarded sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handling {
    /// The handler used the sample; later handlers don't see it.
    Handled,
    /// The handler passed on the sample.
    Ignored,
}

/// A stage of the normal input pipeline behind the dispatcher.
pub trait InputHandler {
    /// The handler name.
    ///
    /// Should be unique within a [HandlerChain].
    fn name(&self) -> &'static str;

    /// Called with every forwarded sample, in registration order.
    fn on_touch(&mut self, sample: &TouchSample) -> Handling;
}

/// Ordered set of downstream [InputHandler]s.
pub struct HandlerChain {
    handlers: IndexMap<&'static str, Box<dyn InputHandler>>,
}

impl HandlerChain {
    /// Creates a new empty chain.
    pub fn new() -> Self {
        Self {
            handlers: IndexMap::new(),
        }
    }

    /// Appends a handler. A handler with the same name is replaced in place.
    pub fn register(&mut self, handler: impl InputHandler + 'static) {
        self.handlers.insert(handler.name(), Box::new(handler));
    }

    /// Removes a handler, keeping the order of the others.
    pub fn unregister(&mut self, name: &'static str) -> Option<Box<dyn InputHandler>> {
        self.handlers.shift_remove(name)
    }

    /// Removes all handlers.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler names in delivery order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    fn deliver(&mut self, sample: &TouchSample) -> Handling {
        for (name, handler) in self.handlers.iter_mut() {
            if handler.on_touch(sample) == Handling::Handled {
                log::trace!("Touch handled by {}", name);
                return Handling::Handled;
            }
        }
        Handling::Ignored
    }
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry point for every touch sample reaching the shell.
#[derive(Default)]
pub struct EventDispatcher {
    classifier: InputClassifier,
    handlers: HandlerChain,
    interacting: bool,
    stats: DispatchStats,
}

impl EventDispatcher {
    /// Creates a dispatcher with an empty handler chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher delivering forwarded samples to `handlers`.
    pub fn with_handlers(handlers: HandlerChain) -> Self {
        Self {
            handlers,
            ..Self::default()
        }
    }

    /// Registers a downstream handler behind the classifier.
    pub fn register(&mut self, handler: impl InputHandler + 'static) {
        self.handlers.register(handler);
    }

    /// The downstream handler chain.
    pub fn handlers_mut(&mut self) -> &mut HandlerChain {
        &mut self.handlers
    }

    /// Classify `sample` and either swallow it or forward it downstream.
    ///
    /// Never fails and never blocks.
    pub fn dispatch(&mut self, sample: TouchSample) -> DispatchResult {
        let before = self.classifier.state();
        let verdict = self.classifier.on_sample(&sample);

        if !before.is_scaling() && self.classifier.is_scaling() {
            self.stats.gestures_blocked += 1;
        }

        match verdict {
            Verdict::Consume => {
                self.stats.consumed += 1;
                DispatchResult::Consumed
            },
            Verdict::Forward => {
                self.stats.forwarded += 1;
                self.track_interaction(&sample);
                self.handlers.deliver(&sample);
                DispatchResult::Forwarded
            },
        }
    }

    /// Returns true while a forwarded single-finger interaction is ongoing.
    ///
    /// Only forwarded samples update this.
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// The classifier's current gesture state.
    pub fn gesture_state(&self) -> GestureState {
        self.classifier.state()
    }

    /// Dispatch counters.
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// Clears the dispatch counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Drops any gesture in progress and the interaction record.
    /// See [InputClassifier::reset].
    pub fn reset_gesture(&mut self) {
        self.classifier.reset();
        self.interacting = false;
    }

    fn track_interaction(&mut self, sample: &TouchSample) {
        self.interacting = match sample.phase() {
            TouchPhase::Begin | TouchPhase::Move | TouchPhase::End => sample.contact_count() > 0,
            TouchPhase::Cancel => false,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    type Log = Rc<RefCell<Vec<(&'static str, TouchPhase)>>>;

    struct Recorder {
        name: &'static str,
        answer: Handling,
        log: Log,
    }

    impl InputHandler for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn on_touch(&mut self, sample: &TouchSample) -> Handling {
            self.log.borrow_mut().push((self.name, sample.phase()));
            self.answer
        }
    }

    fn sample(phase: TouchPhase, count: usize) -> TouchSample {
        TouchSample::with_count(phase, count, Duration::ZERO)
    }

    fn dispatcher_with(answers: &[(&'static str, Handling)]) -> (EventDispatcher, Log) {
        let log = Log::default();
        let mut dispatcher = EventDispatcher::new();
        for (name, answer) in answers {
            dispatcher.register(Recorder {
                name: *name,
                answer: *answer,
                log: log.clone(),
            });
        }
        (dispatcher, log)
    }

    #[test]
    fn test_forwarded_sample_reaches_handlers_in_order() {
        let (mut dispatcher, log) = dispatcher_with(&[
            ("scroll", Handling::Ignored),
            ("tap", Handling::Handled),
            ("never", Handling::Handled),
        ]);

        assert_eq!(
            dispatcher.dispatch(sample(TouchPhase::Begin, 1)),
            DispatchResult::Forwarded
        );
        assert_eq!(
            *log.borrow(),
            vec![("scroll", TouchPhase::Begin), ("tap", TouchPhase::Begin)]
        );
    }

    #[test]
    fn test_consumed_sample_reaches_no_handler() {
        let (mut dispatcher, log) = dispatcher_with(&[("scroll", Handling::Ignored)]);

        assert_eq!(
            dispatcher.dispatch(sample(TouchPhase::Begin, 2)),
            DispatchResult::Consumed
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_interaction_record_ignores_consumed_samples() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.dispatch(sample(TouchPhase::Begin, 1));
        assert!(dispatcher.is_interacting());

        dispatcher.dispatch(sample(TouchPhase::End, 0));
        assert!(!dispatcher.is_interacting());

        dispatcher.dispatch(sample(TouchPhase::Begin, 2));
        dispatcher.dispatch(sample(TouchPhase::Move, 2));
        assert!(!dispatcher.is_interacting());
    }

    #[test]
    fn test_forwarded_cancel_ends_interaction() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.dispatch(sample(TouchPhase::Begin, 1));
        assert!(dispatcher.is_interacting());

        assert_eq!(
            dispatcher.dispatch(sample(TouchPhase::Cancel, 1)),
            DispatchResult::Forwarded
        );
        assert!(!dispatcher.is_interacting());
    }

    #[test]
    fn test_reset_gesture_clears_interaction() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.dispatch(sample(TouchPhase::Begin, 1));
        dispatcher.dispatch(sample(TouchPhase::Move, 1));
        assert!(dispatcher.is_interacting());

        dispatcher.reset_gesture();
        assert!(!dispatcher.is_interacting());
        assert_eq!(dispatcher.gesture_state(), GestureState::Idle);
    }

    #[test]
    fn test_stats_count_gestures_and_samples() {
        let mut dispatcher = EventDispatcher::new();
        for s in [
            sample(TouchPhase::Begin, 1),
            sample(TouchPhase::Begin, 2),
            sample(TouchPhase::Move, 2),
            sample(TouchPhase::End, 1),
            sample(TouchPhase::End, 0),
            sample(TouchPhase::Begin, 2),
            sample(TouchPhase::Cancel, 0),
        ] {
            dispatcher.dispatch(s);
        }

        let stats = dispatcher.stats();
        assert_eq!(stats.forwarded, 1);
        assert_eq!(stats.consumed, 6);
        assert_eq!(stats.gestures_blocked, 2);

        dispatcher.reset_stats();
        assert_eq!(dispatcher.stats().total(), 0);
    }

    #[test]
    fn test_handler_chain_unregister_keeps_order() {
        let log = Log::default();
        let mut chain = HandlerChain::new();
        for name in ["a", "b", "c"] {
            chain.register(Recorder {
                name,
                answer: Handling::Ignored,
                log: log.clone(),
            });
        }

        assert!(chain.unregister("b").is_some());
        assert!(chain.unregister("b").is_none());
        assert_eq!(chain.names().collect::<Vec<_>>(), vec!["a", "c"]);

        let mut dispatcher = EventDispatcher::with_handlers(chain);
        dispatcher.dispatch(sample(TouchPhase::Move, 1));
        assert_eq!(log.borrow().len(), 2);

        dispatcher.handlers_mut().clear();
        assert!(dispatcher.handlers_mut().is_empty());
    }
}
