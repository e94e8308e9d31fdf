//! Counter-based switch debouncing.

use core::marker::PhantomData;

/// Press handling strategy, chosen once at construction.
pub trait Policy {
    const IMMEDIATE_PRESS: bool;
}

/// Debounce both press and release.
#[derive(Debug, Default)]
pub struct Standard;

impl Policy for Standard {
    const IMMEDIATE_PRESS: bool = false;
}

/// Report a press on the first active sample, debounce only the release.
#[derive(Debug, Default)]
pub struct ImmediatePress;

impl Policy for ImmediatePress {
    const IMMEDIATE_PRESS: bool = true;
}

/// Turns a bouncy switch reading into a stable state.
///
/// A saturating counter walks toward `SAMPLES` on active readings and
/// toward 0 on inactive ones; the debounced state flips only at the two
/// ends. With [`ImmediatePress`] the counter snaps straight to
/// `SAMPLES` on the first active reading.
#[derive(Debug)]
pub struct Debouncer<P = Standard, const SAMPLES: u8 = 10> {
    counter: u8,
    state: bool,
    _policy: PhantomData<P>,
}

impl<P: Policy, const SAMPLES: u8> Default for Debouncer<P, SAMPLES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Policy, const SAMPLES: u8> Debouncer<P, SAMPLES> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            counter: 0,
            state: false,
            _policy: PhantomData,
        }
    }

    pub fn update(&mut self, raw: bool) -> bool {
        if raw {
            if P::IMMEDIATE_PRESS {
                self.counter = SAMPLES;
                self.state = true;
            } else {
                if self.counter < SAMPLES {
                    self.counter += 1;
                }
                if self.counter == SAMPLES {
                    self.state = true;
                }
            }
        } else {
            if self.counter > 0 {
                self.counter -= 1;
            }
            if self.counter == 0 {
                self.state = false;
            }
        }
        self.state
    }

    #[must_use]
    pub fn state(&self) -> bool {
        self.state
    }
}
