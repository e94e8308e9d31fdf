//! Per-tick snapshot of the hardware readings.

/// Raw readings of one polling tick.
///
/// The hardware binding fills one of these per tick. Pots arrive on
/// the canonical 0..1023 scale (range normalization and pin polarity
/// are the binding's job), switches arrive as logical pressed states
/// and are still bouncy; debouncing happens downstream.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub volume_pot: u16,
    pub modulation_pot: u16,
    pub fx1_pot: u16,
    pub fx2_pot: u16,
    pub bend_pot: u16,
    pub program_pot: u16,
    pub sustain: bool,
    pub program_up: bool,
    pub program_down: bool,
    pub program_group_up: bool,
    pub program_group_down: bool,
    pub bank_up: bool,
    pub bank_down: bool,
}
