use crate::model::{RadiusVariation, SizeVariation};

/// Ring radius for angular slot `index` of `count`.
///
/// `random_factors` holds the per-slot factors drawn once per compile
/// (see [`crate::compile::RandomDraws`]); it is only consulted for
/// [`RadiusVariation::Random`].
pub fn radius_at(
    variation: RadiusVariation,
    base: f64,
    index: u32,
    count: u32,
    random_factors: &[f64],
) -> f64 {
    match variation {
        RadiusVariation::Even => base,
        RadiusVariation::Uneven => {
            // Four-lobed ripple around the base ring.
            let t = f64::from(index) / f64::from(count);
            base + (t * std::f64::consts::PI * 4.0).sin() * (base * 0.2)
        }
        RadiusVariation::Random => {
            let factor = random_factors.get(index as usize).copied().unwrap_or(1.0);
            base * factor
        }
    }
}

/// Shape size for angular slot `index` of `count`.
///
/// With `count == 1` the ramp ratio is 0, so both ramps collapse to their
/// starting size instead of dividing by zero.
pub fn size_at(variation: SizeVariation, base: f64, index: u32, count: u32) -> f64 {
    let ratio = if count > 1 {
        f64::from(index) / f64::from(count - 1)
    } else {
        0.0
    };

    match variation {
        SizeVariation::None => base,
        SizeVariation::SmallToLarge => base * 0.25 + base * 0.75 * ratio,
        SizeVariation::LargeToSmall => base - base * 0.75 * ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_radius_passes_base_through() {
        assert_eq!(radius_at(RadiusVariation::Even, 80.0, 3, 12, &[]), 80.0);
    }

    #[test]
    fn uneven_radius_ripples_within_twenty_percent() {
        for i in 0..16 {
            let r = radius_at(RadiusVariation::Uneven, 100.0, i, 16, &[]);
            assert!((80.0..=120.0).contains(&r), "slot {i} out of band: {r}");
        }
        // Slot 0 sits exactly on the base ring.
        assert_eq!(radius_at(RadiusVariation::Uneven, 100.0, 0, 16, &[]), 100.0);
    }

    #[test]
    fn random_radius_uses_drawn_factor() {
        let factors = [1.0, 0.9, 1.15];
        let r = radius_at(RadiusVariation::Random, 100.0, 2, 3, &factors);
        assert!((r - 115.0).abs() < 1e-9);
    }

    #[test]
    fn random_radius_without_factor_falls_back_to_base() {
        assert_eq!(radius_at(RadiusVariation::Random, 100.0, 5, 6, &[]), 100.0);
    }

    #[test]
    fn size_ramps_span_quarter_to_full() {
        assert_eq!(size_at(SizeVariation::SmallToLarge, 40.0, 0, 5), 10.0);
        assert_eq!(size_at(SizeVariation::SmallToLarge, 40.0, 4, 5), 40.0);
        assert_eq!(size_at(SizeVariation::LargeToSmall, 40.0, 0, 5), 40.0);
        assert_eq!(size_at(SizeVariation::LargeToSmall, 40.0, 4, 5), 10.0);
    }

    #[test]
    fn single_slot_ramp_ratio_is_zero() {
        // count == 1 must not divide by zero or produce NaN.
        for variation in [
            SizeVariation::None,
            SizeVariation::SmallToLarge,
            SizeVariation::LargeToSmall,
        ] {
            let s = size_at(variation, 20.0, 0, 1);
            assert!(s.is_finite());
        }
        assert_eq!(size_at(SizeVariation::SmallToLarge, 20.0, 0, 1), 5.0);
        assert_eq!(size_at(SizeVariation::LargeToSmall, 20.0, 0, 1), 20.0);
    }
}
