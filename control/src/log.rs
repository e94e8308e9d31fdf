//! Logging that compiles away unless the `defmt` feature is enabled.
//!
//! Selectors report restored and saved state at `info`; the persist
//! path reports storage failures at `warn`.

macro_rules! info {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)+);
    );
}

macro_rules! warn_impl {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)+);
    );
}

pub(crate) use info;
pub(crate) use warn_impl as warn;
