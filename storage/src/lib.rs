//! Persistence layer of the cadenza controller.
//!
//! The selectors keep two logical byte values (program base and bank)
//! alive across power cycles. Flash segments on the target survive only
//! a limited number of erase cycles, so this crate stretches them two
//! ways:
//!
//! 1. [`WearLevelingStore`] appends every saved value into the next free
//!    slot of its segment and erases only once the segment is full,
//!    multiplying the usable endurance by the segment size.
//! 2. [`DeferredCommitScheduler`] coalesces bursts of rapid edits into a
//!    single flush once the user has stopped interacting, keeping the
//!    multi-millisecond program/erase stalls out of the sampling path.
//!
//! The flash peripheral itself is reached through the [`Flash`] trait;
//! [`RamFlash`] is a host-side stand-in honoring the same program-once
//! semantics.

#![cfg_attr(not(test), no_std)]

mod commit;
mod flash;
mod ram;
mod wear;

pub use commit::{DeferredCommitScheduler, COMMIT_DELAY_MS};
pub use flash::{Error, Flash, ERASED};
pub use ram::RamFlash;
pub use wear::WearLevelingStore;
