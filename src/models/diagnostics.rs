// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! Per-prayer diagnostic information surfaced alongside each computed or undefined
//! time. This mirrors the packed diagnostic bits a C-style ring buffer would carry,
//! re-expressed as a plain enum plus a couple of booleans rather than a bitfield,
//! since nothing downstream needs the bits to be contiguous in memory.

/// Which high-latitude or isha-interval fallback, if any, was used to produce a
/// prayer time that would otherwise have been geometrically undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackUsed {
    /// No fallback was needed; the time came directly from the hour-angle kernel.
    None,
    /// Isha was derived from `maghrib + isha_interval_minutes` rather than an angle.
    Interval,
    /// The `middle_of_night` high-latitude rule was applied.
    MiddleOfNight,
    /// The `seventh_of_night` high-latitude rule was applied.
    SeventhOfNight,
    /// The `twilight_angle` high-latitude rule was applied.
    TwilightAngle,
}

/// Diagnostic context for a single prayer time, valid or not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    /// The raw `cos(H0)` ratio evaluated for this prayer's target altitude, before
    /// clamping. `None` for prayers that are not hour-angle based (dhuhr).
    pub cos_omega: Option<f64>,

    /// Whether the epsilon-clamp policy snapped an out-of-range `cos(H0)` back onto
    /// `[-1, 1]` rather than reporting the time as undefined.
    pub clamped: bool,

    /// Which fallback, if any, produced this time.
    pub fallback_used: FallbackUsed,

    /// The solar altitude (degrees) this prayer's hour angle was solved for.
    pub target_altitude: f64,
}

impl Diagnostics {
    #[must_use]
    pub const fn new(cos_omega: Option<f64>, clamped: bool, fallback_used: FallbackUsed, target_altitude: f64) -> Self {
        Self {
            cos_omega,
            clamped,
            fallback_used,
            target_altitude,
        }
    }

    /// Diagnostics for a prayer with no hour-angle evaluation at all (dhuhr).
    #[must_use]
    pub const fn none(target_altitude: f64) -> Self {
        Self::new(None, false, FallbackUsed::None, target_altitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dhuhr_diagnostics_carry_no_cos_omega() {
        let diagnostics = Diagnostics::none(0.0);

        assert_eq!(diagnostics.cos_omega, None);
        assert!(!diagnostics.clamped);
        assert_eq!(diagnostics.fallback_used, FallbackUsed::None);
    }
}
