use nalgebra::Point2;
use std::time::Duration;

/// One concurrently tracked finger or pointer touching the input surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPoint {
    /// Platform identifier, stable for the lifetime of the contact.
    pub id: i32,
    /// Position in surface coordinates.
    pub position: Point2<f64>,
}

impl ContactPoint {
    /// Create a new contact point.
    pub fn new(id: i32, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Point2::new(x, y),
        }
    }
}

/// What happened in the frame a [TouchSample] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// One or more contacts landed.
    Begin,
    /// Active contacts moved.
    Move,
    /// One or more contacts lifted.
    End,
    /// The platform aborted the touch stream.
    Cancel,
}

/// One reported input frame.
///
/// `contacts` holds the contacts that are active once the frame is applied:
/// a [TouchPhase::Begin] sample lists the contact that just landed, a
/// [TouchPhase::End] sample no longer lists the one that lifted.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchSample {
    contacts: Vec<ContactPoint>,
    phase: TouchPhase,
    timestamp: Duration,
}

impl TouchSample {
    /// Create a new sample.
    pub fn new(phase: TouchPhase, contacts: Vec<ContactPoint>, timestamp: Duration) -> Self {
        Self {
            contacts,
            phase,
            timestamp,
        }
    }

    /// Create a sample with `count` synthetic contacts laid out on a line.
    ///
    /// Handy for hosts that only know the pointer count of an event.
    pub fn with_count(phase: TouchPhase, count: usize, timestamp: Duration) -> Self {
        let contacts = (0..count)
            .map(|i| ContactPoint::new(i as i32, i as f64 * 10.0, 0.0))
            .collect();
        Self::new(phase, contacts, timestamp)
    }

    /// The active contacts, in platform order.
    pub fn contacts(&self) -> &[ContactPoint] {
        &self.contacts
    }

    /// Number of active contacts.
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// The phase of this frame.
    pub fn phase(&self) -> TouchPhase {
        self.phase
    }

    /// Time of the frame, relative to an arbitrary platform epoch.
    pub fn timestamp(&self) -> Duration {
        self.timestamp
    }

    /// Returns true if this frame completes the touch stream.
    ///
    /// That is the case for a cancel, or when no contact is left.
    pub fn completes_stream(&self) -> bool {
        self.phase == TouchPhase::Cancel || self.contacts.is_empty()
    }
}
