// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! Night-division accessories derived from a sunset/next-fajr pair. These are
//! pure arithmetic over already-computed times and need no solar recomputation
//! or caching.

/// The midpoint of the night and the start of its last third, given `sunset_ms`
/// and the following day's `next_fajr_ms`. Both inputs and outputs are absolute
/// milliseconds since the epoch (UTC).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunnahTimes {
    pub middle_of_night_ms: f64,
    pub last_third_ms: f64,
}

/// `middle = sunset + n/2`, `last_third = sunset + 2n/3`, where `n = next_fajr - sunset`.
#[must_use]
pub fn compute_sunnah_times(sunset_ms: f64, next_fajr_ms: f64) -> SunnahTimes {
    let night_duration = next_fajr_ms - sunset_ms;

    SunnahTimes {
        middle_of_night_ms: sunset_ms + night_duration / 2.0,
        last_third_ms: sunset_ms + (2.0 * night_duration) / 3.0,
    }
}
