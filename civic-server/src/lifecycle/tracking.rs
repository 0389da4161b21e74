//! Tracking number generation
//!
//! A tracking number is the 6-digit identifier citizens use to follow their
//! report. The draw is pure given the entropy source; uniqueness is the
//! store's unique index plus the bounded retry loop in the lifecycle
//! manager.

use rand::Rng;

/// Inclusive range of valid tracking numbers. Six digits, no leading zero,
/// so the string form always matches `^\d{6}$`.
pub const TRACKING_MIN: u32 = 100_000;
pub const TRACKING_MAX: u32 = 999_999;

/// Draw a tracking number from the given entropy source.
pub fn generate<R: Rng>(rng: &mut R) -> String {
    rng.gen_range(TRACKING_MIN..=TRACKING_MAX).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn always_six_digits_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let t = generate(&mut rng);
            assert_eq!(t.len(), 6, "got {t}");
            let n: u32 = t.parse().unwrap();
            assert!((TRACKING_MIN..=TRACKING_MAX).contains(&n));
        }
    }

    #[test]
    fn deterministic_given_the_same_source() {
        let a = generate(&mut StdRng::seed_from_u64(42));
        let b = generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn constant_source_repeats_itself() {
        // StepRng with zero increment models a stuck entropy source; the
        // retry loop upstream is what turns this into an error, not the
        // generator itself.
        let mut rng = StepRng::new(12345, 0);
        let first = generate(&mut rng);
        let second = generate(&mut rng);
        assert_eq!(first, second);
    }
}
