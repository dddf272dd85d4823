// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

use crate::astronomy::{cache::SolarPositionCache, ops, unit::Angle};

#[derive(PartialEq, Debug, Copy, Clone)]
pub struct SolarCoordinates {
    // The declination of the sun, the angle between
    // the rays of the Sun and the plane of the Earth's equator.
    pub(crate) declination: Angle,

    // Right ascension of the Sun, the angular distance on the
    // celestial equator from the vernal equinox to the hour circle.
    pub(crate) right_ascension: Angle,

    // Apparent sidereal time, the hour angle of the vernal equinox.
    pub(crate) apparent_sidereal_time: Angle,

    // The apparent ecliptic longitude of the sun, corrected for aberration and nutation.
    pub(crate) apparent_ecliptic_longitude: Angle,

    // The true (corrected) obliquity of the ecliptic.
    pub(crate) apparent_obliquity: Angle,

    // The difference between apparent solar time and mean solar time, in minutes.
    pub(crate) eqt_minutes: f64,
}

impl SolarCoordinates {
    pub(crate) fn new(julian_day: f64) -> Self {
        let julian_century = ops::julian_century(julian_day);
        let mean_solar_longitude = ops::mean_solar_longitude(julian_century);
        let mean_lunar_longitude = ops::mean_lunar_longitude(julian_century);
        let ascending_lunar_node = ops::ascending_lunar_node_longitude(julian_century);
        let mean_solar_anomaly = ops::mean_solar_anomaly(julian_century);
        let apparent_solar_longitude_angle =
            ops::apparent_solar_longitude(julian_century, mean_solar_longitude);
        let apparent_solar_longitude = apparent_solar_longitude_angle.radians();

        let mean_sidereal_time = ops::mean_sidereal_time(julian_century);
        let nutation_longitude =
            ops::nutation_in_longitude(mean_solar_longitude, mean_lunar_longitude, ascending_lunar_node);
        let nutation_obliq =
            ops::nutation_in_obliquity(mean_solar_longitude, mean_lunar_longitude, ascending_lunar_node);

        let mean_obliq_ecliptic = ops::mean_obliquity_of_the_ecliptic(julian_century);
        let apparent_obliq_ecliptic_angle =
            ops::apparent_obliquity_of_the_ecliptic(julian_century, mean_obliq_ecliptic);
        let apparent_obliq_ecliptic = apparent_obliq_ecliptic_angle.radians();

        // Equation from Astronomical Algorithms page 165
        let declination = Angle::from_radians((apparent_obliq_ecliptic.sin() * apparent_solar_longitude.sin()).asin());

        // Equation from Astronomical Algorithms page 165
        let right_ascension = Angle::from_radians(
            (apparent_obliq_ecliptic.cos() * apparent_solar_longitude.sin()).atan2(apparent_solar_longitude.cos()),
        )
        .unwound();

        // Equation from Astronomical Algorithms page 88
        let apparent_sidereal_time = Angle::new(
            mean_sidereal_time.degrees
                + ((nutation_longitude * 3600.0)
                    * Angle::new(mean_obliq_ecliptic.degrees + nutation_obliq).radians().cos())
                    / 3600.0,
        );

        let eqt_minutes = ops::equation_of_time_minutes(
            julian_century,
            mean_solar_longitude,
            mean_solar_anomaly,
            apparent_obliq_ecliptic_angle,
        );

        Self {
            declination,
            right_ascension,
            apparent_sidereal_time,
            apparent_ecliptic_longitude: apparent_solar_longitude_angle,
            apparent_obliquity: apparent_obliq_ecliptic_angle,
            eqt_minutes,
        }
    }
}

/// Per-Julian-Date quantities that are location-independent and shared by every
/// prayer calculation for a given civil day: today's solar position plus the
/// interpolation constants derived from yesterday's and tomorrow's position.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct DayConstants {
    pub julian_date: f64,
    pub greenwich_sidereal_time: Angle,
    pub right_ascension_today: Angle,
    pub declination_today: Angle,
    pub ra_interp_sum: f64,
    pub ra_interp_diff: f64,
    pub decl_interp_sum: f64,
    pub decl_interp_diff: f64,
    pub sin_decl_today: f64,
    pub cos_decl_today: f64,
    pub eqt_minutes: f64,
    pub utc_midnight_ms: f64,
}

impl DayConstants {
    /// `julian_date` must be the Julian Date of UTC midnight for the civil day
    /// under consideration (a half-integer, per the standard convention that an
    /// integer Julian Date falls at noon). Yesterday's, today's, and tomorrow's
    /// solar position are each fetched through `solar_cache` rather than computed
    /// directly, so a caller stepping through consecutive days reuses the two
    /// positions it already paid for.
    #[must_use]
    pub fn new(solar_cache: &mut SolarPositionCache, julian_date: f64) -> Self {
        let yesterday = solar_cache.get_or_insert(julian_date - 1.0);
        let today = solar_cache.get_or_insert(julian_date);
        let tomorrow = solar_cache.get_or_insert(julian_date + 1.0);

        let delta_minus = (today.right_ascension - yesterday.right_ascension).unwound();
        let delta_plus = (tomorrow.right_ascension - today.right_ascension).unwound();

        let ra_interp_sum = delta_minus.degrees + delta_plus.degrees;
        let ra_interp_diff = delta_plus.degrees - delta_minus.degrees;
        let decl_interp_sum =
            (today.declination.degrees - yesterday.declination.degrees) + (tomorrow.declination.degrees - today.declination.degrees);
        let decl_interp_diff =
            (tomorrow.declination.degrees - today.declination.degrees) - (today.declination.degrees - yesterday.declination.degrees);

        Self {
            julian_date,
            greenwich_sidereal_time: today.apparent_sidereal_time,
            right_ascension_today: today.right_ascension,
            declination_today: today.declination,
            ra_interp_sum,
            ra_interp_diff,
            decl_interp_sum,
            decl_interp_diff,
            sin_decl_today: today.declination.radians().sin(),
            cos_decl_today: today.declination.radians().cos(),
            eqt_minutes: today.eqt_minutes,
            utc_midnight_ms: (julian_date - 2_440_587.5) * 86_400_000.0,
        }
    }
}
