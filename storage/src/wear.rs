//! Wear-leveled store of a single logical byte value.

use crate::flash::{Error, Flash, ERASED};

/// Append-only byte store spreading writes over a whole segment.
///
/// Each save programs the next free slot of the segment; the latest
/// written slot holds the current value. Only once every slot has been
/// used does a save cost an erase, so the segment endures `SIZE` times
/// as many saves as naive rewrite-in-place persistence would allow.
#[derive(Debug)]
pub struct WearLevelingStore<F: Flash> {
    flash: F,
}

impl<F: Flash> WearLevelingStore<F> {
    pub fn new(flash: F) -> Self {
        Self { flash }
    }

    /// True when nothing was written since the last erase.
    pub fn is_empty(&self) -> bool {
        self.flash.read(0) == ERASED
    }

    /// Current value, or [`ERASED`] when the segment is empty.
    ///
    /// The value lives right before the first free slot, or in the last
    /// slot when the segment is full.
    pub fn read(&self) -> u8 {
        if self.is_empty() {
            return ERASED;
        }
        match self.find_free() {
            Some(offset) => self.flash.read(offset - 1),
            None => self.flash.read(F::SIZE - 1),
        }
    }

    /// Store a new value.
    ///
    /// Costs a single byte program while free slots remain. On a full
    /// segment the whole segment is erased first and the value lands in
    /// slot 0.
    ///
    /// # Errors
    ///
    /// Propagates driver failures. When the erase of a full segment
    /// fails, the write is abandoned and the previous content stays
    /// readable.
    pub fn write(&mut self, value: u8) -> Result<(), Error> {
        match self.find_free() {
            Some(offset) => self.flash.program(offset, value),
            None => {
                self.flash.erase()?;
                self.flash.program(0, value)
            }
        }
    }

    /// Reset the segment.
    ///
    /// Erases are the scarce resource; [`WearLevelingStore::write`]
    /// already erases when it must, so callers rarely need this.
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub fn erase(&mut self) -> Result<(), Error> {
        self.flash.erase()
    }

    pub fn flash(&self) -> &F {
        &self.flash
    }

    /// Give the segment back, e.g. to hand it to a successor instance.
    pub fn into_flash(self) -> F {
        self.flash
    }

    fn find_free(&self) -> Option<usize> {
        (0..F::SIZE).find(|&offset| self.flash.read(offset) == ERASED)
    }
}
