//! Leaky-integrator lowpass filtering.

/// First-order IIR lowpass in integer arithmetic.
///
/// Digital form of an RC filter, `y[i] = rho * y[i-1] + s` with
/// `rho = 1 - 1/K`, kept in integers by tracking `K` times the filtered
/// value:
///
/// ```text
/// y += s - y / K;  out = y / K
/// ```
///
/// The divisions truncate toward zero on purpose; the truncation
/// defines where the filter settles. `K` should be a power of two so
/// the divide compiles to a shift. The accumulator is twice the input
/// width, which keeps the multiply-accumulate of 10-bit samples well
/// away from overflow.
#[derive(Debug, Default)]
pub struct Lowpass<const K: i32> {
    y: i32,
}

impl<const K: i32> Lowpass<K> {
    #[must_use]
    pub fn new() -> Self {
        Self { y: 0 }
    }

    pub fn update(&mut self, sample: i32) -> i32 {
        self.y += sample - self.y / K;
        self.y / K
    }
}
