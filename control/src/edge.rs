//! Transition detection on debounced switches.

use crate::debounce::{Debouncer, Policy, Standard};

/// Transition of a debounced switch between two ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    None,
    Rising,
    Falling,
}

/// Emits [`Edge::Rising`] the first tick the debounced state becomes
/// active and [`Edge::Falling`] the first tick it drops.
#[derive(Debug)]
pub struct EdgeDetector<P = Standard, const SAMPLES: u8 = 10> {
    debouncer: Debouncer<P, SAMPLES>,
    prev: bool,
}

impl<P: Policy, const SAMPLES: u8> Default for EdgeDetector<P, SAMPLES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Policy, const SAMPLES: u8> EdgeDetector<P, SAMPLES> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            debouncer: Debouncer::new(),
            prev: false,
        }
    }

    pub fn update(&mut self, raw: bool) -> Edge {
        let curr = self.debouncer.update(raw);
        if curr == self.prev {
            return Edge::None;
        }
        self.prev = curr;
        if curr {
            Edge::Rising
        } else {
            Edge::Falling
        }
    }
}
