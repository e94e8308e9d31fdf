//! Pitch bend driven by a conditioned pot.

use crate::conditioner::AnalogConditioner;
use crate::config;
use crate::output::OutputSink;

/// Forwards a conditioned 10-bit pot reading as a 14-bit bend.
///
/// The reading is shifted into the top ten bits and its low nibble is
/// replicated into the bottom four, so the full pot travel maps onto
/// the full 0..16383 bend range.
#[derive(Debug, Default)]
pub struct PitchBendController {
    conditioner: AnalogConditioner,
}

impl PitchBendController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, raw: u16, sink: &mut impl OutputSink) {
        if let Some(value) = self.conditioner.update(raw) {
            sink.bend(config::CHANNEL, (value << 4) + (value % 16));
        }
    }
}
