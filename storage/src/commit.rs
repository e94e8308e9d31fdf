//! Deferred flushing of dirty in-memory state.

/// How long the inputs must stay quiet before dirty state is flushed.
pub const COMMIT_DELAY_MS: u32 = 3000;

/// Decides when accumulated edits should be persisted.
///
/// Every edit refreshes the pending timestamp, so a burst of rapid
/// edits (a held repeat button, for instance) collapses into a single
/// flash write once the user lets go. This is also what keeps the
/// blocking program/erase stall away from the ticks that sample inputs.
///
/// Timestamps are a free-running millisecond counter; comparisons are
/// wraparound-safe.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeferredCommitScheduler {
    pending_since: Option<u32>,
}

impl DeferredCommitScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that in-memory state diverged from flash.
    pub fn mark_dirty(&mut self, now: u32) {
        self.pending_since = Some(now);
    }

    /// True once a pending change has been left alone long enough.
    #[must_use]
    pub fn should_commit(&self, now: u32) -> bool {
        self.pending_since
            .is_some_and(|since| now.wrapping_sub(since) > COMMIT_DELAY_MS)
    }

    /// Clear the pending marker after a successful flush.
    pub fn mark_committed(&mut self) {
        self.pending_since = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_nothing_is_dirty_it_never_commits() {
        let scheduler = DeferredCommitScheduler::new();
        assert!(!scheduler.should_commit(0));
        assert!(!scheduler.should_commit(u32::MAX));
    }

    #[test]
    fn when_the_delay_has_not_elapsed_it_does_not_commit() {
        let mut scheduler = DeferredCommitScheduler::new();
        scheduler.mark_dirty(100);
        assert!(!scheduler.should_commit(100 + COMMIT_DELAY_MS - 1));
        assert!(!scheduler.should_commit(100 + COMMIT_DELAY_MS));
    }

    #[test]
    fn when_the_delay_has_elapsed_it_commits() {
        let mut scheduler = DeferredCommitScheduler::new();
        scheduler.mark_dirty(100);
        assert!(scheduler.should_commit(100 + COMMIT_DELAY_MS + 1));
    }

    #[test]
    fn when_marked_dirty_again_the_delay_restarts() {
        let mut scheduler = DeferredCommitScheduler::new();
        scheduler.mark_dirty(100);
        scheduler.mark_dirty(2000);
        assert!(!scheduler.should_commit(100 + COMMIT_DELAY_MS + 1));
        assert!(scheduler.should_commit(2000 + COMMIT_DELAY_MS + 1));
    }

    #[test]
    fn when_committed_the_pending_marker_clears() {
        let mut scheduler = DeferredCommitScheduler::new();
        scheduler.mark_dirty(100);
        scheduler.mark_committed();
        assert!(!scheduler.should_commit(100 + COMMIT_DELAY_MS + 1));
    }

    #[test]
    fn when_the_clock_wraps_the_comparison_still_holds() {
        let mut scheduler = DeferredCommitScheduler::new();
        scheduler.mark_dirty(u32::MAX - 1000);
        assert!(!scheduler.should_commit(u32::MAX));
        assert!(scheduler.should_commit((u32::MAX - 1000).wrapping_add(COMMIT_DELAY_MS + 1)));
    }
}
