//! Call-site memoization of [`Astronomy::evaluate`].

use crate::astronomy::{Astronomy, SkyState};
use firmament_core::ObserverLocation;
use firmament_time::CalendarTime;

/// Holds the last `(time, location)` key and the state computed for it.
///
/// Setters only mark the cache dirty when the key actually changes;
/// [`state`](Self::state) recomputes lazily. Hosts sharing one instance
/// across threads wrap it in their own lock.
#[derive(Debug, Clone)]
pub struct CachedAstronomy {
    astronomy: Astronomy,
    time: CalendarTime,
    location: ObserverLocation,
    state: Option<SkyState>,
    dirty: bool,
    evaluations: u64,
}

impl CachedAstronomy {
    pub fn new(astronomy: Astronomy, time: CalendarTime, location: ObserverLocation) -> Self {
        Self {
            astronomy,
            time,
            location,
            state: None,
            dirty: true,
            evaluations: 0,
        }
    }

    pub fn astronomy(&self) -> &Astronomy {
        &self.astronomy
    }

    pub fn time(&self) -> &CalendarTime {
        &self.time
    }

    pub fn location(&self) -> &ObserverLocation {
        &self.location
    }

    pub fn set_time(&mut self, time: CalendarTime) {
        if time != self.time {
            self.time = time;
            self.dirty = true;
        }
    }

    pub fn set_location(&mut self, location: ObserverLocation) {
        if location != self.location {
            self.location = location;
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forces the next [`state`](Self::state) call to recompute.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Number of evaluations performed so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// The state for the current key, recomputed only when dirty.
    pub fn state(&mut self) -> &SkyState {
        if self.dirty {
            self.state = None;
            self.dirty = false;
        }

        let astronomy = &self.astronomy;
        let time = &self.time;
        let location = &self.location;
        let evaluations = &mut self.evaluations;

        self.state.get_or_insert_with(|| {
            log::debug!(
                "recomputing sky state for {} at ({:.4}, {:.4})",
                time,
                location.latitude(),
                location.longitude()
            );
            *evaluations += 1;
            astronomy.evaluate(time, location)
        })
    }

    /// The cached state without recomputing; `None` when dirty or never computed.
    pub fn cached_state(&self) -> Option<&SkyState> {
        if self.dirty {
            None
        } else {
            self.state.as_ref()
        }
    }
}
