//! Seams toward the protocol layer and the fault reporting.

use cadenza_storage::Error;

/// What an emitted value means to the protocol layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parameter {
    Program,
    Bank,
    Control(u8),
}

/// Outbound protocol stream.
///
/// The core emits one `(channel, parameter, value)` triple per
/// qualifying conditioned reading or button-driven state change; the
/// byte-level wire encoding is entirely the implementor's business.
pub trait OutputSink {
    fn emit(&mut self, channel: u8, parameter: Parameter, value: u8);

    /// Pitch bend is the one message whose payload does not fit in a
    /// seven-bit value; it travels whole instead of as a
    /// [`Parameter`] triple.
    fn bend(&mut self, channel: u8, value: u16);
}

/// Receiver of storage failures.
///
/// Nothing in the core is fatal: a reported failure means the latest
/// edit survives in RAM, stays dirty and will be retried on a later
/// commit check, but would be lost on power-down.
pub trait ErrorSink {
    fn storage_error(&mut self, error: Error);
}
