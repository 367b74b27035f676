//! Frame assembly for per-contact touch events.

use indexmap::IndexMap;
use nalgebra::Point2;
use std::time::Duration;

use super::sample::{ContactPoint, TouchPhase, TouchSample};

/// Per-contact touch events, as delivered by `wl_touch` style sources.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum TouchEvent {
    Down {
        time: u32,
        id: i32,
        surface_x: f64,
        surface_y: f64,
    },
    Up {
        time: u32,
        id: i32,
    },
    Motion {
        time: u32,
        id: i32,
        surface_x: f64,
        surface_y: f64,
    },
    /// End of a logical group of events.
    Frame,
    /// The compositor took over the touch sequence.
    Cancel,
}

/// Groups [TouchEvent]s into [TouchSample] frames.
#[derive(Debug, Default)]
pub struct ContactTracker {
    contacts: IndexMap<i32, Point2<f64>>,
    landed: bool,
    lifted: bool,
    moved: bool,
    last_time: u32,
}

impl ContactTracker {
    /// Create a tracker with no active contacts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts currently down.
    pub fn active_contacts(&self) -> usize {
        self.contacts.len()
    }

    /// Feed one event. Returns a sample when the event closes a frame.
    pub fn push(&mut self, event: TouchEvent) -> Option<TouchSample> {
        match event {
            TouchEvent::Down {
                time,
                id,
                surface_x,
                surface_y,
            } => {
                self.last_time = time;
                self.contacts.insert(id, Point2::new(surface_x, surface_y));
                self.landed = true;
                None
            },
            TouchEvent::Up { time, id } => {
                self.last_time = time;
                if self.contacts.shift_remove(&id).is_some() {
                    self.lifted = true;
                } else {
                    log::trace!("Ignoring up for unknown touch id {}", id);
                }
                None
            },
            TouchEvent::Motion {
                time,
                id,
                surface_x,
                surface_y,
            } => {
                self.last_time = time;
                match self.contacts.get_mut(&id) {
                    Some(position) => {
                        *position = Point2::new(surface_x, surface_y);
                        self.moved = true;
                    },
                    None => log::trace!("Ignoring motion for unknown touch id {}", id),
                }
                None
            },
            TouchEvent::Frame => self.flush(),
            TouchEvent::Cancel => {
                self.contacts.clear();
                self.clear_pending();
                Some(TouchSample::new(
                    TouchPhase::Cancel,
                    Vec::new(),
                    self.timestamp(),
                ))
            },
        }
    }

    fn flush(&mut self) -> Option<TouchSample> {
        let phase = if self.landed {
            TouchPhase::Begin
        } else if self.lifted {
            TouchPhase::End
        } else if self.moved {
            TouchPhase::Move
        } else {
            return None;
        };
        self.clear_pending();

        let contacts = self
            .contacts
            .iter()
            .map(|(id, position)| ContactPoint {
                id: *id,
                position: *position,
            })
            .collect();

        Some(TouchSample::new(phase, contacts, self.timestamp()))
    }

    fn clear_pending(&mut self) {
        self.landed = false;
        self.lifted = false;
        self.moved = false;
    }

    fn timestamp(&self) -> Duration {
        Duration::from_millis(self.last_time as u64)
    }
}
