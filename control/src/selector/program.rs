//! Program selection from a 5-position pot and four buttons.

use cadenza_storage::{DeferredCommitScheduler, Error, Flash, WearLevelingStore};

use crate::conditioner::AnalogConditioner;
use crate::config;
use crate::log;
use crate::output::{OutputSink, Parameter};
use crate::repeat::RepeatTrigger;

/// Combines the pot-driven position with a persisted, button-driven
/// base offset into one program index.
///
/// The pot contributes `curr` (0..5) through a dead-banded midpoint
/// mapping of the conditioned reading; the buttons adjust `base`, which
/// is what survives power cycles. The emitted program is always the
/// clamped sum of the two.
#[derive(Debug)]
pub struct ProgramSelector<F: Flash> {
    curr: i16,
    base: i16,
    conditioner: AnalogConditioner,
    store: WearLevelingStore<F>,
    btn_up: RepeatTrigger<config::PressPolicy>,
    btn_down: RepeatTrigger<config::PressPolicy>,
    grp_btn_up: RepeatTrigger<config::PressPolicy>,
    grp_btn_down: RepeatTrigger<config::PressPolicy>,
}

impl<F: Flash> ProgramSelector<F> {
    pub fn new(flash: F) -> Self {
        Self {
            curr: 0,
            base: 0,
            conditioner: AnalogConditioner::new(),
            store: WearLevelingStore::new(flash),
            btn_up: RepeatTrigger::new(),
            btn_down: RepeatTrigger::new(),
            grp_btn_up: RepeatTrigger::new(),
            grp_btn_down: RepeatTrigger::new(),
        }
    }

    /// Restore the base offset from flash. Empty storage keeps the
    /// default of 0.
    pub fn load(&mut self) {
        if !self.store.is_empty() {
            self.base = i16::from(self.store.read().min(config::MAX_VALUE));
            log::info!("Loaded program base={:?}", self.base);
        }
    }

    /// Persist the base offset, skipping the write when flash already
    /// holds the same value.
    ///
    /// # Errors
    ///
    /// Propagates driver failures; the in-memory value is unaffected.
    pub fn save(&mut self) -> Result<(), Error> {
        let base = self.base.clamp(0, i16::from(config::MAX_VALUE)) as u8;
        if base != self.store.read() {
            self.store.write(base)?;
            log::info!("Saved program base={:?}", base);
        }
        Ok(())
    }

    /// Combined and clamped program index.
    #[must_use]
    pub fn get(&self) -> u8 {
        (self.curr + self.base).clamp(0, i16::from(config::MAX_VALUE)) as u8
    }

    pub fn transmit(&self, sink: &mut impl OutputSink) {
        sink.emit(config::CHANNEL, Parameter::Program, self.get());
        #[cfg(feature = "position-cc-mapping")]
        self.transmit_position_mapping(sink);
    }

    /// One-hot mirror of the pot position on five consecutive CCs.
    #[cfg(feature = "position-cc-mapping")]
    fn transmit_position_mapping(&self, sink: &mut impl OutputSink) {
        if (0..config::PROGRAM_POSITIONS).contains(&i32::from(self.curr)) {
            for position in 0..config::PROGRAM_POSITIONS {
                let value = if position == i32::from(self.curr) {
                    config::MAX_VALUE
                } else {
                    0
                };
                sink.emit(
                    config::CHANNEL,
                    Parameter::Control(config::POSITION_CC_BASE + position as u8),
                    value,
                );
            }
        }
    }

    /// Feed one raw pot reading through the conditioning chain and map
    /// it onto the discrete positions.
    pub fn update_analog(&mut self, raw: u16, sink: &mut impl OutputSink) {
        let Some(value) = self.conditioner.update(raw) else {
            return;
        };
        let value = i32::from(value);

        // Readings hovering around the edge of the current position's
        // band are chatter, not a selection.
        let diff = (i32::from(self.curr) * config::POSITION_SPACING - value).abs();
        if diff < config::POSITION_DEADBAND {
            return;
        }

        let position = (value * config::PROGRAM_POSITIONS / config::ANALOG_SPAN) as i16;
        if position != self.curr {
            self.curr = position;
            self.transmit(sink);
        }
    }

    pub fn up(
        &mut self,
        pressed: bool,
        now: u32,
        scheduler: &mut DeferredCommitScheduler,
        sink: &mut impl OutputSink,
    ) {
        if self.btn_up.update(pressed, now) && self.base < i16::from(config::MAX_VALUE) {
            self.base += 1;
            scheduler.mark_dirty(now);
            self.transmit(sink);
        }
    }

    pub fn down(
        &mut self,
        pressed: bool,
        now: u32,
        scheduler: &mut DeferredCommitScheduler,
        sink: &mut impl OutputSink,
    ) {
        if self.btn_down.update(pressed, now) && self.base > 0 {
            self.base -= 1;
            scheduler.mark_dirty(now);
            self.transmit(sink);
        }
    }

    pub fn group_up(
        &mut self,
        pressed: bool,
        now: u32,
        scheduler: &mut DeferredCommitScheduler,
        sink: &mut impl OutputSink,
    ) {
        if self.grp_btn_up.update(pressed, now) && self.base < i16::from(config::MAX_VALUE) {
            self.base = (self.base + config::GROUP_STEP).min(i16::from(config::MAX_VALUE));
            scheduler.mark_dirty(now);
            self.transmit(sink);
        }
    }

    pub fn group_down(
        &mut self,
        pressed: bool,
        now: u32,
        scheduler: &mut DeferredCommitScheduler,
        sink: &mut impl OutputSink,
    ) {
        if self.grp_btn_down.update(pressed, now) && self.base > 0 {
            self.base = (self.base - config::GROUP_STEP).max(0);
            scheduler.mark_dirty(now);
            self.transmit(sink);
        }
    }

    pub(crate) fn store(&self) -> &WearLevelingStore<F> {
        &self.store
    }

    pub fn into_flash(self) -> F {
        self.store.into_flash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadenza_storage::RamFlash;

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

    impl TestSink {
        fn programs(&self) -> impl Iterator<Item = u8> + '_ {
            self.events
                .iter()
                .filter(|(_, parameter, _)| *parameter == Parameter::Program)
                .map(|(_, _, value)| *value)
        }
    }

    fn selector() -> ProgramSelector<RamFlash<64>> {
        ProgramSelector::new(RamFlash::new())
    }

    fn feed_pot(
        selector: &mut ProgramSelector<RamFlash<64>>,
        sink: &mut TestSink,
        raw: u16,
    ) {
        for _ in 0..500 {
            selector.update_analog(raw, sink);
        }
    }

    #[test]
    fn when_storage_is_empty_the_base_defaults_to_zero() {
        let mut selector = selector();
        selector.load();
        assert_eq!(selector.get(), 0);
    }

    #[test]
    fn when_storage_holds_a_value_load_restores_it() {
        let mut flash: RamFlash<64> = RamFlash::new();
        flash.program(0, 42).unwrap();
        let mut selector = ProgramSelector::new(flash);
        selector.load();
        assert_eq!(selector.get(), 42);
    }

    #[test]
    fn when_the_pot_settles_in_a_band_the_position_is_emitted() {
        let mut selector = selector();
        let mut sink = TestSink::default();
        feed_pot(&mut selector, &mut sink, 512);
        assert_eq!(sink.programs().last(), Some(2));
    }

    #[test]
    fn when_the_pot_wiggles_at_a_band_edge_the_position_holds() {
        let mut selector = selector();
        let mut sink = TestSink::default();
        feed_pot(&mut selector, &mut sink, 512);
        sink.events.clear();
        // 408 sits just under the 1|2 boundary, inside the dead band.
        feed_pot(&mut selector, &mut sink, 408);
        assert_eq!(sink.programs().count(), 0);
        // A real move away from the boundary switches to position 1.
        feed_pot(&mut selector, &mut sink, 300);
        assert_eq!(sink.programs().last(), Some(1));
    }

    #[test]
    fn when_up_is_pressed_the_base_increments_and_marks_dirty() {
        let mut selector = selector();
        let mut sink = TestSink::default();
        let mut scheduler = DeferredCommitScheduler::new();
        selector.up(true, 0, &mut scheduler, &mut sink);
        assert_eq!(selector.get(), 1);
        assert_eq!(sink.programs().last(), Some(1));
        assert!(scheduler.should_commit(10_000));
    }

    #[test]
    fn when_the_base_is_at_the_ceiling_up_does_nothing() {
        let mut selector = selector();
        let mut sink = TestSink::default();
        let mut scheduler = DeferredCommitScheduler::new();
        selector.base = 127;
        selector.up(true, 0, &mut scheduler, &mut sink);
        assert_eq!(selector.get(), 127);
        assert!(sink.events.is_empty());
        assert!(!scheduler.should_commit(10_000));
    }

    #[test]
    fn when_group_up_would_overshoot_the_base_clamps() {
        let mut selector = selector();
        let mut sink = TestSink::default();
        let mut scheduler = DeferredCommitScheduler::new();
        selector.base = 125;
        selector.group_up(true, 0, &mut scheduler, &mut sink);
        assert_eq!(selector.get(), 127);
    }

    #[test]
    fn when_saving_the_same_value_twice_only_one_write_happens() {
        let mut selector = selector();
        selector.base = 9;
        selector.save().unwrap();
        selector.save().unwrap();
        assert_eq!(selector.store().read(), 9);
        assert_eq!(selector.store().flash().programs, 1);
    }

    #[test]
    fn when_the_write_fails_the_in_memory_value_survives() {
        let mut flash: RamFlash<64> = RamFlash::new();
        flash.fail_program = true;
        let mut selector = ProgramSelector::new(flash);
        selector.base = 9;
        assert_eq!(selector.save(), Err(Error::Program));
        assert_eq!(selector.get(), 9);
    }
}
