//! Signal conditioning and selector logic of the cadenza controller.
//!
//! The firmware binding polls the hardware once per tick and hands the
//! raw readings over as a [`Snapshot`]. Everything downstream of that
//! lives here:
//!
//! ```text
//!  [Snapshot]
//!      |
//!      V
//!  [ Controls ]---------------------------------> (OutputSink)
//!   |   |   |
//!   |   |   +--[Continuous/PitchBend/Sustain controllers]
//!   |   |
//!   |   +--[ProgramSelector]--+
//!   |                         |
//!   +--[BankSelector]---------+--> {WearLevelingStore}
//!                             |
//!           [DeferredCommitScheduler]-----------> (ErrorSink)
//! ```
//!
//! Pots go through a lowpass cascade and a hysteresis gate before
//! anything reacts to them; switches go through counter debouncing,
//! edge detection and typematic repeat. The selectors persist their
//! state through `cadenza-storage` and report every change through the
//! injected [`OutputSink`].

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod conditioner;
pub mod config;
pub mod continuous;
pub mod controls;
pub mod debounce;
pub mod edge;
pub mod gate;
mod log;
pub mod lowpass;
pub mod output;
pub mod pitchbend;
pub mod repeat;
pub mod selector;
pub mod snapshot;
pub mod sustain;

pub use conditioner::AnalogConditioner;
pub use controls::Controls;
pub use debounce::{Debouncer, ImmediatePress, Policy, Standard};
pub use edge::{Edge, EdgeDetector};
pub use gate::Gate;
pub use lowpass::Lowpass;
pub use output::{ErrorSink, OutputSink, Parameter};
pub use pitchbend::PitchBendController;
pub use repeat::RepeatTrigger;
pub use selector::{BankSelector, ProgramSelector};
pub use snapshot::Snapshot;
