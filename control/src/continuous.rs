//! Continuous controllers driven by a conditioned pot.

use crate::conditioner::AnalogConditioner;
use crate::config;
use crate::output::{OutputSink, Parameter};

/// Forwards a conditioned 10-bit pot reading as a 14-bit control pair.
///
/// The reading is split into the conventional coarse/fine pair: the top
/// seven bits go out on the controller's own id, the remaining bits are
/// padded into the companion id (`id | 0x20`). The fine value is sent
/// first so receivers that latch on the coarse byte see a consistent
/// pair.
#[derive(Debug)]
pub struct ContinuousController {
    id: u8,
    conditioner: AnalogConditioner,
}

impl ContinuousController {
    #[must_use]
    pub fn new(id: u8) -> Self {
        Self {
            id,
            conditioner: AnalogConditioner::new(),
        }
    }

    pub fn update(&mut self, raw: u16, sink: &mut impl OutputSink) {
        if let Some(value) = self.conditioner.update(raw) {
            let msb = (value >> 3) as u8;
            let lsb = ((value << 4) & 0x7F) as u8;
            sink.emit(config::CHANNEL, Parameter::Control(self.id | 0x20), lsb);
            sink.emit(config::CHANNEL, Parameter::Control(self.id), msb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestSink {
        events: heapless::Vec<(u8, Parameter, u8), 512>,
    }

    impl OutputSink for TestSink {
        fn emit(&mut self, channel: u8, parameter: Parameter, value: u8) {
            self.events.push((channel, parameter, value)).unwrap();
        }

        fn bend(&mut self, _channel: u8, _value: u16) {}
    }

    #[test]
    fn when_the_pot_settles_high_the_coarse_value_tops_out() {
        let mut controller = ContinuousController::new(config::CC_VOLUME);
        let mut sink = TestSink::default();
        for _ in 0..200 {
            controller.update(1023, &mut sink);
        }
        let (channel, parameter, msb) = *sink.events.last().unwrap();
        assert_eq!(channel, config::CHANNEL);
        assert_eq!(parameter, Parameter::Control(config::CC_VOLUME));
        assert_eq!(msb, 127);
    }

    #[test]
    fn when_a_value_passes_it_emits_the_fine_byte_first() {
        let mut controller = ContinuousController::new(config::CC_FX1);
        let mut sink = TestSink::default();
        for _ in 0..200 {
            controller.update(512, &mut sink);
        }
        assert!(!sink.events.is_empty());
        assert_eq!(sink.events.len() % 2, 0);
        for pair in sink.events.chunks(2) {
            assert_eq!(pair[0].1, Parameter::Control(config::CC_FX1 | 0x20));
            assert_eq!(pair[1].1, Parameter::Control(config::CC_FX1));
        }
    }

    #[test]
    fn when_the_pot_is_steady_nothing_more_is_emitted() {
        let mut controller = ContinuousController::new(config::CC_MODULATION);
        let mut sink = TestSink::default();
        for _ in 0..500 {
            controller.update(300, &mut sink);
        }
        let settled = sink.events.len();
        for _ in 0..100 {
            controller.update(300, &mut sink);
        }
        assert_eq!(sink.events.len(), settled);
    }
}
