// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! Precomputed `acos`/`atan` lookup tables with linear interpolation between
//! samples. The hour-angle kernel calls `acos` once per prayer per day per
//! location and `atan` once per day for the asr altitude, so table lookups
//! trade a small amount of precision (bounded by the sample density below)
//! for flat, branch-light evaluation cost instead of a native libm call.
//!
//! Values outside a table's declared domain fall back to the native `std`
//! trigonometric function; the tables only cover the ranges the kernel is
//! expected to exercise.

use once_cell::sync::Lazy;

const ACOS_ATAN_SAMPLES: usize = 4096;

struct LinearTable {
    samples: Vec<f64>,
    domain_min: f64,
    domain_max: f64,
}

impl LinearTable {
    fn lookup(&self, x: f64) -> Option<f64> {
        if x < self.domain_min || x > self.domain_max {
            return None;
        }

        let span = self.domain_max - self.domain_min;
        let scaled = (x - self.domain_min) / span * (self.samples.len() - 1) as f64;
        let index = scaled.floor() as usize;

        if index + 1 >= self.samples.len() {
            return Some(self.samples[self.samples.len() - 1]);
        }

        let fraction = scaled - index as f64;
        let lo = self.samples[index];
        let hi = self.samples[index + 1];

        Some(lo + (hi - lo) * fraction)
    }
}

static ACOS_TABLE: Lazy<LinearTable> = Lazy::new(|| {
    let count = ACOS_ATAN_SAMPLES * 2 + 1;
    let samples = (0..count)
        .map(|i| {
            let x = -1.0 + i as f64 / ACOS_ATAN_SAMPLES as f64;
            x.clamp(-1.0, 1.0).acos()
        })
        .collect();

    LinearTable {
        samples,
        domain_min: -1.0,
        domain_max: 1.0,
    }
});

static ATAN_TABLE: Lazy<LinearTable> = Lazy::new(|| {
    let count = ACOS_ATAN_SAMPLES * 2 + 1;
    let samples = (0..count)
        .map(|i| {
            let x = -1.0 + i as f64 / ACOS_ATAN_SAMPLES as f64;
            x.atan()
        })
        .collect();

    LinearTable {
        samples,
        domain_min: -1.0,
        domain_max: 1.0,
    }
});

/// Arc cosine in radians, via table lookup with a native fallback outside `[-1, 1]`
/// (which `acos` would otherwise return `NaN` for).
#[must_use]
pub fn acos(x: f64) -> f64 {
    ACOS_TABLE.lookup(x).unwrap_or_else(|| x.acos())
}

/// Arc tangent in radians, via table lookup restricted to `[-1, 1]`; values outside
/// that domain fall back to the native function since the kernel's callers only
/// ever feed ratios, not large magnitudes, through the table.
#[must_use]
pub fn atan(x: f64) -> f64 {
    ATAN_TABLE.lookup(x).unwrap_or_else(|| x.atan())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn acos_table_matches_native_within_tolerance() {
        for x in [-1.0, -0.5, -0.0001, 0.0, 0.3333, 0.75, 1.0] {
            assert_approx_eq!(f64, acos(x), x.acos(), epsilon = 0.001);
        }
    }

    #[test]
    fn atan_table_matches_native_within_tolerance() {
        for x in [-1.0, -0.5, 0.0, 0.25, 0.9, 1.0] {
            assert_approx_eq!(f64, atan(x), x.atan(), epsilon = 0.001);
        }
    }

    #[test]
    fn out_of_domain_falls_back_to_native() {
        assert_approx_eq!(f64, atan(5.0), 5f64.atan(), epsilon = 0.000_000_1);
    }
}
