//! The standard conditioning chain for analog inputs.

use crate::config;
use crate::gate::Gate;
use crate::lowpass::Lowpass;

/// Two cascaded lowpass stages followed by a hysteresis gate.
///
/// Every analog-driven parameter reads its pot through one of these.
/// The cascade shapes the response, the gate decides whether the
/// smoothed value moved enough to be worth reporting. Input is the
/// canonical 0..1023 scale delivered by the sample source.
#[derive(Debug, Default)]
pub struct AnalogConditioner {
    fast: Lowpass<{ config::LOWPASS_K_FAST }>,
    slow: Lowpass<{ config::LOWPASS_K_SLOW }>,
    gate: Gate<{ config::NOISE_WINDOW }>,
}

impl AnalogConditioner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, sample: u16) -> Option<u16> {
        let filtered = self.slow.update(self.fast.update(i32::from(sample)));
        self.gate.update(filtered).map(|value| value as u16)
    }
}
