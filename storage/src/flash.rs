//! Interface of the flash driver collaborator.

/// Value every byte of a segment reads as after an erase.
pub const ERASED: u8 = 0xFF;

/// Failure reported by the flash hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    Program,
    Erase,
}

/// One program-erase segment of flash memory.
///
/// Program and erase are synchronous and may stall the caller for
/// several milliseconds. Keep them out of latency-sensitive paths.
/// A byte may be programmed only once per erase cycle; erases are the
/// operation with a bounded lifetime budget.
pub trait Flash {
    /// Segment length in bytes.
    const SIZE: usize;

    fn read(&self, offset: usize) -> u8;

    /// Program a single byte at `offset`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Program`] when the hardware reports a failed
    /// write. The rest of the segment keeps its prior content.
    fn program(&mut self, offset: usize, value: u8) -> Result<(), Error>;

    /// Reset the whole segment to [`ERASED`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Erase`] when the hardware reports a failed
    /// erase.
    fn erase(&mut self) -> Result<(), Error>;
}
