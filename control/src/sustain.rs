//! On/off switch controller for the sustain pedal.

use crate::config;
use crate::edge::{Edge, EdgeDetector};
use crate::output::{OutputSink, Parameter};

/// Emits full-scale on the debounced press, zero on the release.
#[derive(Debug, Default)]
pub struct SustainController {
    edge: EdgeDetector<config::PressPolicy, { config::DEBOUNCE_SAMPLES }>,
}

impl SustainController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, pressed: bool, sink: &mut impl OutputSink) {
        match self.edge.update(pressed) {
            Edge::Rising => sink.emit(
                config::CHANNEL,
                Parameter::Control(config::CC_SUSTAIN),
                config::MAX_VALUE,
            ),
            Edge::Falling => {
                sink.emit(config::CHANNEL, Parameter::Control(config::CC_SUSTAIN), 0);
            }
            Edge::None => {}
        }
    }
}
