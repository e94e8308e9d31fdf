//! Bank selection from a pair of up/down buttons.

use cadenza_storage::{DeferredCommitScheduler, Error, Flash, WearLevelingStore};

use crate::config;
use crate::log;
use crate::output::{OutputSink, Parameter};
use crate::repeat::RepeatTrigger;

/// Persisted bank index, stepped one at a time.
#[derive(Debug)]
pub struct BankSelector<F: Flash> {
    curr: u8,
    store: WearLevelingStore<F>,
    btn_up: RepeatTrigger<config::PressPolicy>,
    btn_down: RepeatTrigger<config::PressPolicy>,
}

impl<F: Flash> BankSelector<F> {
    pub fn new(flash: F) -> Self {
        Self {
            curr: 0,
            store: WearLevelingStore::new(flash),
            btn_up: RepeatTrigger::new(),
            btn_down: RepeatTrigger::new(),
        }
    }

    /// Restore the bank from flash. Empty storage keeps the default of 0.
    pub fn load(&mut self) {
        if !self.store.is_empty() {
            self.curr = self.store.read().min(config::MAX_VALUE);
            log::info!("Loaded bank={:?}", self.curr);
        }
    }

    /// Persist the bank, skipping the write when flash already holds
    /// the same value.
    ///
    /// # Errors
    ///
    /// Propagates driver failures; the in-memory value is unaffected.
    pub fn save(&mut self) -> Result<(), Error> {
        let curr = self.curr.min(config::MAX_VALUE);
        if curr != self.store.read() {
            self.store.write(curr)?;
            log::info!("Saved bank={:?}", curr);
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self) -> u8 {
        self.curr
    }

    pub fn transmit(&self, sink: &mut impl OutputSink) {
        sink.emit(config::CHANNEL, Parameter::Bank, self.curr);
    }

    pub fn up(
        &mut self,
        pressed: bool,
        now: u32,
        scheduler: &mut DeferredCommitScheduler,
        sink: &mut impl OutputSink,
    ) {
        if self.btn_up.update(pressed, now) && self.curr < config::MAX_VALUE {
            self.curr += 1;
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
        if self.btn_down.update(pressed, now) && self.curr > 0 {
            self.curr -= 1;
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
