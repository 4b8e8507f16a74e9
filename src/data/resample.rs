use super::grid::Grid;
use super::model::{ExtrapolationConfig, Sample};

// ---------------------------------------------------------------------------
// Interpolation onto the grid
// ---------------------------------------------------------------------------

/// Resample sorted `samples` onto every wavelength of `grid`.
///
/// * inside the data range → linear interpolation between the bracketing
///   samples (exact matches return the sample value)
/// * below / above the data → the first / last transmission when that side is
///   extrapolated, `None` otherwise
///
/// Every value is then rounded to 3 decimals and clamped at 0.
pub fn resample(
    samples: &[Sample],
    grid: &Grid,
    extrapolation: ExtrapolationConfig,
) -> Vec<Option<f64>> {
    grid.wavelengths()
        .into_iter()
        .map(|wl| interpolate_at(samples, wl as f64, extrapolation).map(round_and_clamp))
        .collect()
}

/// Transmission at `x`, before rounding.
pub fn interpolate_at(samples: &[Sample], x: f64, extrapolation: ExtrapolationConfig) -> Option<f64> {
    let (first, last) = (samples.first()?, samples.last()?);

    if x < first.wavelength {
        return extrapolation.low.then_some(first.transmission);
    }
    if x > last.wavelength {
        return extrapolation.high.then_some(last.transmission);
    }

    // First sample with wavelength >= x.
    let idx = samples.partition_point(|s| s.wavelength < x);
    let hi = samples[idx];
    if hi.wavelength == x {
        return Some(hi.transmission);
    }

    // x lies strictly between samples[idx - 1] and samples[idx].
    let lo = samples[idx - 1];
    let t = (x - lo.wavelength) / (hi.wavelength - lo.wavelength);
    Some(lo.transmission + t * (hi.transmission - lo.transmission))
}

/// Round to 3 decimals (halves to even), then clamp negatives (and `-0.0`)
/// to `0.0`.
pub fn round_and_clamp(value: f64) -> f64 {
    let rounded = (value * 1000.0).round_ties_even() / 1000.0;
    if rounded <= 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_points() -> Vec<Sample> {
        vec![Sample::new(400.0, 0.1), Sample::new(500.0, 0.9)]
    }

    #[test]
    fn linear_between_samples() {
        let s = two_points();
        let none = ExtrapolationConfig::default();
        let v = interpolate_at(&s, 450.0, none).unwrap();
        assert!((v - 0.5).abs() < 1e-12);
        let v = interpolate_at(&s, 425.0, none).unwrap();
        assert!((v - 0.3).abs() < 1e-12);
    }

    #[test]
    fn exact_match_returns_sample() {
        let s = vec![
            Sample::new(400.0, 0.1),
            Sample::new(405.0, 0.123),
            Sample::new(500.0, 0.9),
        ];
        let grid = Grid { min_wl: 400, max_wl: 410 };
        let values = resample(&s, &grid, ExtrapolationConfig::default());
        assert_eq!(values[0], Some(0.1));
        assert_eq!(values[1], Some(0.123));
    }

    #[test]
    fn first_duplicate_wins_on_exact_match() {
        let s = vec![
            Sample::new(400.0, 0.1),
            Sample::new(450.0, 0.2),
            Sample::new(450.0, 0.8),
            Sample::new(500.0, 0.9),
        ];
        let none = ExtrapolationConfig::default();
        assert_eq!(interpolate_at(&s, 450.0, none), Some(0.2));
        // Right of the duplicate the later sample is the left bracket.
        let v = interpolate_at(&s, 475.0, none).unwrap();
        assert!((v - 0.85).abs() < 1e-12);
    }

    #[test]
    fn flat_extrapolation_below_and_above() {
        let s = two_points();
        let grid = Grid { min_wl: 300, max_wl: 1100 };
        let values = resample(&s, &grid, ExtrapolationConfig::new(true, true));
        let wls = grid.wavelengths();
        for (wl, v) in wls.iter().zip(&values) {
            if *wl < 400 {
                assert_eq!(*v, Some(0.1), "wavelength {wl}");
            } else if *wl > 500 {
                assert_eq!(*v, Some(0.9), "wavelength {wl}");
            }
        }
        assert_eq!(values[wls.iter().position(|&w| w == 450).unwrap()], Some(0.5));
    }

    #[test]
    fn outside_without_extrapolation_is_none() {
        let s = two_points();
        let none = ExtrapolationConfig::default();
        assert_eq!(interpolate_at(&s, 395.0, none), None);
        assert_eq!(interpolate_at(&s, 505.0, none), None);
        assert_eq!(interpolate_at(&s, 505.0, ExtrapolationConfig::new(true, false)), None);
    }

    #[test]
    fn rounding_and_clamping() {
        assert_eq!(round_and_clamp(0.12345), 0.123);
        assert_eq!(round_and_clamp(0.1236), 0.124);
        assert_eq!(round_and_clamp(-0.2), 0.0);
        assert_eq!(round_and_clamp(-0.0001), 0.0);
        assert!(round_and_clamp(-0.0001).is_sign_positive());
    }

    #[test]
    fn halves_round_to_even() {
        assert_eq!(round_and_clamp(0.0005), 0.0);
        assert_eq!(round_and_clamp(0.5), 0.5);

        let s = vec![Sample::new(400.0, 0.0005), Sample::new(500.0, 0.9)];
        let grid = Grid { min_wl: 400, max_wl: 400 };
        assert_eq!(resample(&s, &grid, ExtrapolationConfig::default()), vec![Some(0.0)]);
    }

    #[test]
    fn negative_interpolation_clamps_to_zero() {
        let s = vec![Sample::new(400.0, -0.4), Sample::new(500.0, 0.4)];
        let grid = Grid { min_wl: 400, max_wl: 500 };
        let values = resample(&s, &grid, ExtrapolationConfig::default());
        assert_eq!(values[0], Some(0.0));
        assert_eq!(values[10], Some(0.0));
        assert_eq!(values[20], Some(0.4));
        assert!(values.iter().flatten().all(|v| *v >= 0.0));
    }
}
