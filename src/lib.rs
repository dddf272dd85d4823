// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! An Islamic prayer time implementation based on the [Adhan](https://github.com/batoulapps/Adhan) library by Batoul Apps.
//!
//! ##### Example
//!
//! ```
//! use waqt_core::prelude::*;
//!
//! let new_york_city = Coordinates::new(40.7128, -74.0059);
//! let params = Configuration::new()
//!     .method(Method::NorthAmerica)
//!     .madhab(Madhab::Hanafi)
//!     .build()
//!     .unwrap();
//! let prayers = compute_prayer_times(new_york_city, &params, 1_547_424_000_000.0).unwrap();
//!
//! assert!(prayers.dhuhr.is_valid());
//! ```

#![warn(clippy::pedantic, clippy::nursery)]

mod config_cache;
mod engine;
mod slab;
mod sunnah;

pub mod astronomy;
pub mod error;
pub mod models;
pub mod schedule;

pub use crate::{
    astronomy::unit::Coordinates,
    engine::PrayerEngine,
    error::PrayerTimeError,
    models::{
        adjustments::{Adjustment, TimeAdjustment},
        diagnostics::{Diagnostics, FallbackUsed},
        high_altitude_rule::HighLatitudeRule,
        madhab::Madhab,
        method::Method,
        parameters::{Configuration, Parameters},
        prayer::Prayer,
    },
    schedule::{PrayerSchedule, PrayerTimeResult, PrayerTimes, UndefinedReason},
    sunnah::{compute_sunnah_times, SunnahTimes},
};

/// Computes all eleven prayer times for `coordinates`/`parameters` on the civil
/// day containing `date_ms` (UTC milliseconds since the epoch). Builds and
/// discards a fresh [`PrayerEngine`]; a caller computing many days for the same
/// location should build one engine with [`create_prayer_context`] instead, so
/// its caches carry over between calls.
pub fn compute_prayer_times(
    coordinates: Coordinates,
    parameters: &Parameters,
    date_ms: f64,
) -> Result<PrayerTimes, PrayerTimeError> {
    PrayerEngine::new().compute(coordinates, parameters, date_ms)
}

/// A resolved location/configuration paired with its own [`PrayerEngine`], for
/// callers computing many dates against the same location without re-deriving
/// the configuration's trigonometric constants each time.
pub struct PrayerContext {
    engine: PrayerEngine,
    coordinates: Coordinates,
    parameters: Parameters,
}

/// Builds a [`PrayerContext`] for `coordinates`/`parameters`. The date is
/// supplied later, per call to [`PrayerContext::compute`].
#[must_use]
pub fn create_prayer_context(coordinates: Coordinates, parameters: Parameters) -> PrayerContext {
    PrayerContext {
        engine: PrayerEngine::new(),
        coordinates,
        parameters,
    }
}

impl PrayerContext {
    pub fn compute(&mut self, date_ms: f64) -> Result<PrayerTimes, PrayerTimeError> {
        self.engine.compute(self.coordinates, &self.parameters, date_ms)
    }

    /// Discards every cache this context's engine has accumulated. Future calls
    /// to [`compute`](Self::compute) are unaffected in result, only in cost.
    pub fn clear_cache(&mut self) {
        self.engine.clear_caches();
    }
}

/// The qiblah bearing, in degrees clockwise from true north, from `coordinates`
/// toward the Kaaba.
#[must_use]
pub fn compute_qibla(coordinates: Coordinates) -> f64 {
    astronomy::qiblah::Qiblah::new(coordinates).value()
}

/// A convenience module appropriate for glob imports (`use waqt_core::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        astronomy::{qiblah::Qiblah, unit::Coordinates},
        compute_prayer_times, compute_qibla, create_prayer_context,
        error::PrayerTimeError,
        models::{
            adjustments::{Adjustment, TimeAdjustment},
            diagnostics::{Diagnostics, FallbackUsed},
            high_altitude_rule::HighLatitudeRule,
            madhab::Madhab,
            method::Method,
            parameters::{Configuration, Parameters},
            prayer::Prayer,
        },
        schedule::{PrayerSchedule, PrayerTimeResult, PrayerTimes, UndefinedReason},
        sunnah::{compute_sunnah_times, SunnahTimes},
        PrayerContext, PrayerEngine,
    };
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::{madhab::Madhab, method::Method};

    fn epoch_ms(year: i32, month: u32, day: u32) -> f64 {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap().timestamp_millis() as f64
    }

    #[test]
    fn calculate_prayer_times() {
        let coordinates = Coordinates::new(35.7750, -78.6336);
        let params = Configuration::new()
            .method(Method::NorthAmerica)
            .madhab(Madhab::Hanafi)
            .build()
            .unwrap();

        let times = compute_prayer_times(coordinates, &params, epoch_ms(2015, 7, 12)).unwrap();

        assert!(times.fajr.is_valid());
        assert!(times.sunrise.is_valid());
        assert!(times.dhuhr.is_valid());
        assert!(times.asr.is_valid());
        assert!(times.maghrib.is_valid());
        assert!(times.isha.is_valid());
    }

    #[test]
    fn a_context_reuses_its_engine_across_dates() {
        let coordinates = Coordinates::new(35.7750, -78.6336);
        let params = Configuration::new()
            .method(Method::NorthAmerica)
            .madhab(Madhab::Hanafi)
            .build()
            .unwrap();
        let mut context = create_prayer_context(coordinates, params);

        let day_one = context.compute(epoch_ms(2015, 7, 12)).unwrap();
        let day_two = context.compute(epoch_ms(2015, 7, 13)).unwrap();

        assert!(day_one.dhuhr.is_valid());
        assert!(day_two.dhuhr.is_valid());
    }

    #[test]
    fn qibla_from_new_york_matches_the_known_bearing() {
        let nyc = Coordinates::new(40.7128, -74.0059);

        let bearing = compute_qibla(nyc);

        assert!((bearing - 58.481_763_5).abs() < 0.000_01);
    }

    #[test]
    fn sunnah_times_fall_between_sunset_and_the_next_fajr() {
        let sunset_ms = 0.0;
        let next_fajr_ms = 8.0 * 3_600_000.0;

        let sunnah = compute_sunnah_times(sunset_ms, next_fajr_ms);

        assert!(sunnah.middle_of_night_ms > sunset_ms);
        assert!(sunnah.last_third_ms < next_fajr_ms);
    }

    #[test]
    fn invalid_configuration_for_the_builder_surfaces_as_an_error() {
        let result = PrayerSchedule::new().with_date_ms(epoch_ms(2015, 7, 12)).build();

        assert!(result.is_err());
    }
}
