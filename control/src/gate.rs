//! Hysteresis gating of filtered analog values.

/// Suppresses samples that stay within a window of the last reported
/// value.
///
/// Only a sample strictly outside `reference ± WINDOW` passes; passing
/// it also makes it the new reference. This is what turns a
/// continuously fluttering filtered pot reading into discrete,
/// ADC-noise-resistant change events.
#[derive(Debug, Default)]
pub struct Gate<const WINDOW: i32> {
    reference: i32,
}

impl<const WINDOW: i32> Gate<WINDOW> {
    #[must_use]
    pub fn new() -> Self {
        Self { reference: 0 }
    }

    pub fn update(&mut self, sample: i32) -> Option<i32> {
        if sample < self.reference - WINDOW || sample > self.reference + WINDOW {
            self.reference = sample;
            Some(sample)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_samples_stay_inside_the_window_nothing_passes() {
        let mut gate: Gate<5> = Gate::new();
        assert_eq!(gate.update(20), Some(20));
        for sample in 15..=25 {
            assert_eq!(gate.update(sample), None);
        }
    }

    #[test]
    fn when_a_sample_leaves_the_window_it_passes_and_becomes_the_reference() {
        let mut gate: Gate<5> = Gate::new();
        gate.update(20);
        assert_eq!(gate.update(26), Some(26));
        // The window now centers on 26.
        assert_eq!(gate.update(22), None);
        assert_eq!(gate.update(20), Some(20));
    }

    #[test]
    fn when_moving_down_the_same_window_applies() {
        let mut gate: Gate<5> = Gate::new();
        gate.update(100);
        assert_eq!(gate.update(95), None);
        assert_eq!(gate.update(94), Some(94));
    }
}
