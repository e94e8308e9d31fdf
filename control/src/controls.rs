//! Top-level owner wiring inputs, selectors and persistence together.

use cadenza_storage::{DeferredCommitScheduler, Error, Flash};

use crate::config;
use crate::continuous::ContinuousController;
use crate::log;
use crate::output::{ErrorSink, OutputSink};
use crate::pitchbend::PitchBendController;
use crate::selector::{BankSelector, ProgramSelector};
use crate::snapshot::Snapshot;
use crate::sustain::SustainController;

/// The single top-level instance created at process start.
///
/// Owns every conditioning-pipeline object, both selectors with their
/// flash segments, and the shared commit scheduler. The firmware
/// binding drives it with one [`Controls::tick`] per polling pass.
#[derive(Debug)]
pub struct Controls<F: Flash> {
    program: ProgramSelector<F>,
    bank: BankSelector<F>,
    volume: ContinuousController,
    modulation: ContinuousController,
    fx1: ContinuousController,
    fx2: ContinuousController,
    bend: PitchBendController,
    sustain: SustainController,
    scheduler: DeferredCommitScheduler,
}

impl<F: Flash> Controls<F> {
    pub fn new(program_flash: F, bank_flash: F) -> Self {
        Self {
            program: ProgramSelector::new(program_flash),
            bank: BankSelector::new(bank_flash),
            volume: ContinuousController::new(config::CC_VOLUME),
            modulation: ContinuousController::new(config::CC_MODULATION),
            fx1: ContinuousController::new(config::CC_FX1),
            fx2: ContinuousController::new(config::CC_FX2),
            bend: PitchBendController::new(),
            sustain: SustainController::new(),
            scheduler: DeferredCommitScheduler::new(),
        }
    }

    /// Restore persisted state and announce it downstream.
    pub fn initialize(&mut self, sink: &mut impl OutputSink) {
        self.program.load();
        self.bank.load();
        self.program.transmit(sink);
        self.bank.transmit(sink);
    }

    /// Process one tick worth of raw readings.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot, now: u32, sink: &mut impl OutputSink) {
        self.sustain.update(snapshot.sustain, sink);
        self.volume.update(snapshot.volume_pot, sink);
        self.fx1.update(snapshot.fx1_pot, sink);
        self.fx2.update(snapshot.fx2_pot, sink);
        self.modulation.update(snapshot.modulation_pot, sink);
        self.bend.update(snapshot.bend_pot, sink);

        self.program.update_analog(snapshot.program_pot, sink);
        self.program
            .up(snapshot.program_up, now, &mut self.scheduler, sink);
        self.program
            .down(snapshot.program_down, now, &mut self.scheduler, sink);
        self.program
            .group_up(snapshot.program_group_up, now, &mut self.scheduler, sink);
        self.program
            .group_down(snapshot.program_group_down, now, &mut self.scheduler, sink);

        self.bank.up(snapshot.bank_up, now, &mut self.scheduler, sink);
        self.bank
            .down(snapshot.bank_down, now, &mut self.scheduler, sink);
    }

    /// Flush dirty selector state once the user has stopped interacting.
    ///
    /// On a storage failure the pending marker is kept, so the flush is
    /// retried on a later commit check; the in-memory state stays
    /// authoritative either way.
    pub fn persist(&mut self, now: u32, errors: &mut impl ErrorSink) {
        if !self.scheduler.should_commit(now) {
            return;
        }
        match self.save() {
            Ok(()) => self.scheduler.mark_committed(),
            Err(error) => {
                log::warn!("Storage failure, keeping state dirty");
                errors.storage_error(error);
            }
        }
    }

    /// One pass of the polling loop: all inputs first, then the commit
    /// check, so a save never observes a half-updated selector.
    pub fn tick(
        &mut self,
        snapshot: Snapshot,
        now: u32,
        sink: &mut impl OutputSink,
        errors: &mut impl ErrorSink,
    ) {
        self.apply_snapshot(snapshot, now, sink);
        self.persist(now, errors);
    }

    pub fn program(&self) -> &ProgramSelector<F> {
        &self.program
    }

    pub fn bank(&self) -> &BankSelector<F> {
        &self.bank
    }

    fn save(&mut self) -> Result<(), Error> {
        self.program.save()?;
        self.bank.save()
    }
}
