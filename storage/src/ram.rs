//! RAM-backed flash double for host-side tests and simulation.

use crate::flash::{Error, Flash, ERASED};

/// In-memory segment with real flash semantics.
///
/// Programming a byte that is not in the erased state fails, the same
/// way the hardware would corrupt it. The `fail_program` and
/// `fail_erase` toggles inject driver failures, and the operation
/// counters let tests assert how much wear an access pattern causes.
#[derive(Debug)]
pub struct RamFlash<const N: usize = 64> {
    bytes: [u8; N],
    pub fail_program: bool,
    pub fail_erase: bool,
    pub programs: u32,
    pub erases: u32,
}

impl<const N: usize> Default for RamFlash<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RamFlash<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bytes: [ERASED; N],
            fail_program: false,
            fail_erase: false,
            programs: 0,
            erases: 0,
        }
    }
}

impl<const N: usize> Flash for RamFlash<N> {
    const SIZE: usize = N;

    fn read(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    fn program(&mut self, offset: usize, value: u8) -> Result<(), Error> {
        if self.fail_program || self.bytes[offset] != ERASED {
            return Err(Error::Program);
        }
        self.bytes[offset] = value;
        self.programs += 1;
        Ok(())
    }

    fn erase(&mut self) -> Result<(), Error> {
        if self.fail_erase {
            return Err(Error::Erase);
        }
        self.bytes = [ERASED; N];
        self.erases += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_fresh_it_reads_as_erased() {
        let flash: RamFlash<4> = RamFlash::new();
        for i in 0..4 {
            assert_eq!(flash.read(i), ERASED);
        }
    }

    #[test]
    fn when_programming_a_used_slot_it_fails() {
        let mut flash: RamFlash<4> = RamFlash::new();
        flash.program(1, 0x11).unwrap();
        assert_eq!(flash.program(1, 0x22), Err(Error::Program));
        assert_eq!(flash.read(1), 0x11);
    }

    #[test]
    fn when_erased_all_slots_are_programmable_again() {
        let mut flash: RamFlash<4> = RamFlash::new();
        flash.program(0, 0x11).unwrap();
        flash.erase().unwrap();
        flash.program(0, 0x22).unwrap();
        assert_eq!(flash.read(0), 0x22);
        assert_eq!(flash.erases, 1);
    }

    #[test]
    fn when_failure_is_injected_content_stays_intact() {
        let mut flash: RamFlash<4> = RamFlash::new();
        flash.program(0, 0x11).unwrap();
        flash.fail_program = true;
        flash.fail_erase = true;
        assert_eq!(flash.program(1, 0x22), Err(Error::Program));
        assert_eq!(flash.erase(), Err(Error::Erase));
        assert_eq!(flash.read(0), 0x11);
        assert_eq!(flash.read(1), ERASED);
    }
}
