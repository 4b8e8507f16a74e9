use crate::error::ResampleError;

use super::model::{ExtrapolationConfig, Sample};

/// Grid step in nm.
pub const STEP_NM: i64 = 5;
/// Lowest catalog wavelength in nm.
pub const MIN_NM: i64 = 300;
/// Highest catalog wavelength in nm.
pub const MAX_NM: i64 = 1100;

// ---------------------------------------------------------------------------
// Grid – fixed 5 nm wavelength axis
// ---------------------------------------------------------------------------

/// Inclusive 5 nm wavelength axis inside `[MIN_NM, MAX_NM]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub min_wl: i64,
    pub max_wl: i64,
}

impl Grid {
    /// Compute grid bounds from sorted samples.
    ///
    /// Without extrapolation the grid starts at the first multiple of 5 at or
    /// above the lowest sample and ends at the last multiple of 5 at or below
    /// the highest one, clipped to the catalog range. An extrapolated side
    /// always extends to the catalog limit.
    pub fn build(samples: &[Sample], extrapolation: ExtrapolationConfig) -> Result<Grid, ResampleError> {
        let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
            return Err(ResampleError::EmptyData(
                "no samples to build a grid from".to_string(),
            ));
        };

        // Snap in f64 and keep one step of margin past the catalog limits so
        // huge wavelengths cannot overflow the integer grid.
        let step = STEP_NM as f64;
        let (lo_steps, hi_steps) = ((MIN_NM / STEP_NM - 1) as f64, (MAX_NM / STEP_NM + 1) as f64);
        let base_min = (first.wavelength / step).ceil().clamp(lo_steps, hi_steps) as i64 * STEP_NM;
        let base_max = (last.wavelength / step).floor().clamp(lo_steps, hi_steps) as i64 * STEP_NM;

        let min_wl = if extrapolation.low {
            MIN_NM
        } else {
            base_min.max(MIN_NM)
        };
        let max_wl = if extrapolation.high {
            MAX_NM
        } else {
            base_max.min(MAX_NM)
        };

        if min_wl > max_wl {
            return Err(ResampleError::Range { min_wl, max_wl });
        }
        log::debug!("Grid {min_wl} nm to {max_wl} nm (extrapolation {extrapolation:?})");
        Ok(Grid { min_wl, max_wl })
    }

    /// Grid wavelengths, ascending.
    pub fn wavelengths(&self) -> Vec<i64> {
        (self.min_wl..=self.max_wl).step_by(STEP_NM as usize).collect()
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        ((self.max_wl - self.min_wl) / STEP_NM + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.min_wl > self.max_wl
    }
}
