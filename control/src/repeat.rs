//! Typematic repeat on top of edge detection.

use crate::config;
use crate::debounce::{Policy, Standard};
use crate::edge::{Edge, EdgeDetector};

/// Fires once on the initial press, then periodically while held.
///
/// The clock is a free-running millisecond counter; elapsed time is
/// measured with wrapping subtraction so the trigger keeps working
/// across counter overflow.
#[derive(Debug)]
pub struct RepeatTrigger<P = Standard> {
    edge: EdgeDetector<P, { config::DEBOUNCE_SAMPLES }>,
    started: Option<u32>,
    delay: u32,
    initial_delay: u32,
    rate: u32,
}

impl<P: Policy> Default for RepeatTrigger<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Policy> RepeatTrigger<P> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_timing(config::REPEAT_INITIAL_DELAY_MS, config::REPEAT_RATE_MS)
    }

    #[must_use]
    pub fn with_timing(initial_delay: u32, rate: u32) -> Self {
        Self {
            edge: EdgeDetector::new(),
            started: None,
            delay: initial_delay,
            initial_delay,
            rate,
        }
    }

    pub fn update(&mut self, raw: bool, now: u32) -> bool {
        match self.edge.update(raw) {
            Edge::Rising => {
                self.started = Some(now);
                self.delay = self.initial_delay;
                return true;
            }
            Edge::Falling => {
                self.started = None;
                return false;
            }
            Edge::None => {}
        }

        let Some(started) = self.started else {
            return false;
        };

        if now.wrapping_sub(started) > self.delay {
            self.started = Some(now);
            self.delay = self.rate;
            true
        } else {
            false
        }
    }
}
