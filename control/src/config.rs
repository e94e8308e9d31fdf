//! Build-time configuration of the controller.
//!
//! Everything here is fixed at compile time. There is no runtime
//! configuration surface; changing a constant means building a new
//! firmware image.

use crate::debounce;

/// Press handling used by all panel switches.
///
/// [`debounce::ImmediatePress`] reacts on the very first active sample
/// and debounces only the release, trading press latency for release
/// stability. Swap in [`debounce::Standard`] to debounce both edges.
pub type PressPolicy = debounce::ImmediatePress;

/// Consistent samples required for a debounced state change.
pub const DEBOUNCE_SAMPLES: u8 = 10;

/// Hold time before a pressed button starts repeating.
pub const REPEAT_INITIAL_DELAY_MS: u32 = 1000;

/// Interval between repeats while a button stays held.
pub const REPEAT_RATE_MS: u32 = 100;

/// Coefficient of the first, faster lowpass stage.
pub const LOWPASS_K_FAST: i32 = 8;

/// Coefficient of the second, slower lowpass stage.
pub const LOWPASS_K_SLOW: i32 = 16;

/// Half-width of the hysteresis window on conditioned pot readings.
pub const NOISE_WINDOW: i32 = 2;

/// Span of the canonical analog scale delivered by the sample source.
pub const ANALOG_SPAN: i32 = 1024;

/// Number of discrete positions of the program selection pot.
pub const PROGRAM_POSITIONS: i32 = 5;

/// Analog distance between adjacent program positions.
pub const POSITION_SPACING: i32 = 205;

/// Dead band around a position boundary; smaller wiggles are chatter.
pub const POSITION_DEADBAND: i32 = 8;

/// Step applied by the group up/down buttons.
pub const GROUP_STEP: i16 = 5;

/// Largest value the output protocol can carry.
pub const MAX_VALUE: u8 = 127;

/// Channel all emitted events are addressed to.
pub const CHANNEL: u8 = 0;

/// Parameter ids understood by the output sink.
pub const CC_MODULATION: u8 = 0x01;
pub const CC_VOLUME: u8 = 0x07;
pub const CC_FX1: u8 = 0x0C;
pub const CC_FX2: u8 = 0x0D;
pub const CC_SUSTAIN: u8 = 0x40;

/// First of the five one-hot position CCs.
#[cfg(feature = "position-cc-mapping")]
pub const POSITION_CC_BASE: u8 = 0x66;
