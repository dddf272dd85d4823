// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! The compute kernel: turns a location, a configuration, and a date into eleven
//! prayer times. A [`PrayerEngine`] owns every cache the kernel consults, so two
//! engines never share state and `clear_caches` on one instance never disturbs
//! another.

use log::warn;

use crate::{
    astronomy::{
        cache::{DayConstantsCache, SolarPositionCache},
        ops,
        solar::DayConstants,
        unit::{Angle, Coordinates},
    },
    config_cache::{ConfigCache, DerivedConstants},
    error::PrayerTimeError,
    models::{
        diagnostics::{Diagnostics, FallbackUsed},
        high_altitude_rule::HighLatitudeRule,
        parameters::Parameters,
        prayer::Prayer,
    },
    schedule::{PrayerTimeResult, PrayerTimes, UndefinedReason},
    slab::{Slab, Slot},
};

const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: f64 = 86_400_000.0;
const IMSAK_OFFSET_MS: f64 = 600_000.0;

/// Per-day quantities reconstructed from a [`DayConstants`] entry: today's angles
/// plus the neighboring right-ascension/declination values the quadratic
/// interpolation in [`ops::corrected_hour_angle_checked`] needs.
struct DayAngles {
    m0: f64,
    sidereal: Angle,
    ra_today: Angle,
    previous_ra: Angle,
    next_ra: Angle,
    decl_today: Angle,
    previous_decl: Angle,
    next_decl: Angle,
}

fn day_angles(coordinates: Coordinates, day: &DayConstants) -> DayAngles {
    let ra_today = day.right_ascension_today;
    let decl_today = day.declination_today;

    // day.ra_interp_sum/diff are delta_minus + delta_plus and delta_plus - delta_minus
    // of the unwound right-ascension deltas between yesterday/today/tomorrow; recover
    // the two neighbor values algebraically rather than re-fetching them from cache.
    let delta_ra_minus = (day.ra_interp_sum - day.ra_interp_diff) / 2.0;
    let delta_ra_plus = (day.ra_interp_sum + day.ra_interp_diff) / 2.0;
    let previous_ra = Angle::new(ra_today.degrees - delta_ra_minus);
    let next_ra = Angle::new(ra_today.degrees + delta_ra_plus);

    let delta_decl_minus = (day.decl_interp_sum - day.decl_interp_diff) / 2.0;
    let delta_decl_plus = (day.decl_interp_sum + day.decl_interp_diff) / 2.0;
    let previous_decl = Angle::new(decl_today.degrees - delta_decl_minus);
    let next_decl = Angle::new(decl_today.degrees + delta_decl_plus);

    let sidereal = day.greenwich_sidereal_time;
    let m0 = ops::approximate_transit(coordinates.longitude_angle(), sidereal, ra_today);

    DayAngles {
        m0,
        sidereal,
        ra_today,
        previous_ra,
        next_ra,
        decl_today,
        previous_decl,
        next_decl,
    }
}

/// The outcome of solving the hour-angle kernel for one event (fajr, sunrise, asr,
/// sunset, or isha): the raw, pre-clamp `cos(H0)` ratio, whether the epsilon-clamp
/// snapped it onto the boundary, and the resulting UTC hour, if defined.
struct EventSolution {
    raw_cos_omega: f64,
    clamped: bool,
    hours: Option<f64>,
}

fn solve_event(coordinates: Coordinates, altitude: Angle, after_transit: bool, angles: &DayAngles) -> EventSolution {
    let raw_cos_omega = ops::cos_hour_angle_ratio(altitude, coordinates, angles.decl_today);
    let clamped_ratio = ops::clamp_cos_hour_angle(raw_cos_omega);
    let clamped = clamped_ratio.is_some() && raw_cos_omega.abs() > 1.0;

    let hours = clamped_ratio.and_then(|_| {
        ops::corrected_hour_angle_checked(
            angles.m0,
            altitude,
            coordinates,
            after_transit,
            angles.sidereal,
            angles.ra_today,
            angles.previous_ra,
            angles.next_ra,
            angles.decl_today,
            angles.previous_decl,
            angles.next_decl,
        )
    });

    EventSolution {
        raw_cos_omega,
        clamped,
        hours,
    }
}

const fn fallback_for_rule(rule: HighLatitudeRule) -> FallbackUsed {
    match rule {
        HighLatitudeRule::MiddleOfTheNight => FallbackUsed::MiddleOfNight,
        HighLatitudeRule::SeventhOfTheNight => FallbackUsed::SeventhOfNight,
        HighLatitudeRule::TwilightAngle => FallbackUsed::TwilightAngle,
        HighLatitudeRule::None => FallbackUsed::None,
    }
}

/// Owns every cache the kernel consults across repeated `compute` calls: solar
/// position, day constants, resolved configuration constants, and a scratch slab
/// of recent results. Not `Sync` by design — see the crate-level concurrency notes.
#[derive(Debug, Default)]
pub struct PrayerEngine {
    solar_cache: SolarPositionCache,
    day_cache: DayConstantsCache,
    config_cache: ConfigCache,
    slab: Slab,
}

impl PrayerEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            solar_cache: SolarPositionCache::new(),
            day_cache: DayConstantsCache::new(),
            config_cache: ConfigCache::new(),
            slab: Slab::new(),
        }
    }

    /// Empties every cache and resets the scratch slab's ring index. Has no effect
    /// on the result of any future `compute` call; it only discards memoized work.
    pub fn clear_caches(&mut self) {
        warn!("clearing prayer engine caches mid-batch incurs a recompute on the next call");
        self.solar_cache.clear();
        self.day_cache.clear();
        self.config_cache.clear();
        self.slab.clear();
    }

    fn combined_adjustments(parameters: &Parameters) -> crate::models::adjustments::TimeAdjustment {
        crate::models::adjustments::TimeAdjustment::new(
            parameters.time_adjustments(Prayer::Fajr),
            parameters.time_adjustments(Prayer::Sunrise),
            parameters.time_adjustments(Prayer::Dhuhr),
            parameters.time_adjustments(Prayer::Asr),
            parameters.time_adjustments(Prayer::Maghrib),
            parameters.time_adjustments(Prayer::Isha),
        )
    }

    fn julian_date_for(date_ms: f64) -> f64 {
        let civil_day_ms = (date_ms / MS_PER_DAY).floor() * MS_PER_DAY;

        civil_day_ms / MS_PER_DAY + 2_440_587.5
    }

    /// The sunrise time, in absolute milliseconds, for the civil day starting at
    /// `julian_date`. Used by the main `compute` pass to find tomorrow's sunrise,
    /// the anchor every night-division output is measured against.
    fn sunrise_for_julian_date(
        &mut self,
        coordinates: Coordinates,
        derived: &DerivedConstants,
        julian_date: f64,
    ) -> Option<f64> {
        let day = self.day_cache.get_or_insert(&mut self.solar_cache, julian_date);
        let angles = day_angles(coordinates, &day);
        let solution = solve_event(coordinates, Angle::new(derived.horizon_altitude), false, &angles);

        solution.hours.map(|hours| day.utc_midnight_ms + hours * MS_PER_HOUR)
    }

    /// Computes all eleven prayer times for `coordinates`/`parameters` on the civil
    /// day containing `date_ms` (UTC). Never panics and never returns `Err` once
    /// `coordinates` and `parameters.elevation` pass validation; any geometric
    /// impossibility surfaces as [`PrayerTimeResult::Undefined`] on that key.
    pub fn compute(
        &mut self,
        coordinates: Coordinates,
        parameters: &Parameters,
        date_ms: f64,
    ) -> Result<PrayerTimes, PrayerTimeError> {
        coordinates.validate()?;
        if parameters.elevation < 0.0 {
            return Err(PrayerTimeError::InvalidElevation(parameters.elevation));
        }

        let derived = self.config_cache.resolve(
            coordinates.latitude,
            coordinates.longitude,
            parameters.elevation,
            parameters.fajr_angle,
            parameters.isha_angle,
            parameters.maghrib_angle,
            f64::from(parameters.madhab.shadow()),
            Self::combined_adjustments(parameters),
        );

        let julian_date = Self::julian_date_for(date_ms);
        let day = self.day_cache.get_or_insert(&mut self.solar_cache, julian_date);
        let angles = day_angles(coordinates, &day);

        let t_noon = ops::corrected_transit(
            angles.m0,
            coordinates.longitude_angle(),
            angles.sidereal,
            angles.ra_today,
            angles.previous_ra,
            angles.next_ra,
        );
        let dhuhr_ms = day.utc_midnight_ms + t_noon * MS_PER_HOUR + derived.adjustments_ms[2];

        let decl_at_transit = ops::interpolate(
            angles.decl_today.degrees,
            angles.previous_decl.degrees,
            angles.next_decl.degrees,
            t_noon / 24.0,
        );
        let m = coordinates.latitude - decl_at_transit;
        let asr_altitude = crate::astronomy::tables::atan(1.0 / (derived.shadow_factor + m.abs().to_radians().tan()))
            .to_degrees();

        let fajr_solution = solve_event(coordinates, Angle::new(derived.fajr_altitude), false, &angles);
        let sunrise_solution = solve_event(coordinates, Angle::new(derived.horizon_altitude), false, &angles);
        let asr_solution = solve_event(coordinates, Angle::new(asr_altitude), true, &angles);
        let sunset_solution = solve_event(coordinates, Angle::new(derived.horizon_altitude), true, &angles);

        let raw_sunset_ms = sunset_solution
            .hours
            .map(|hours| day.utc_midnight_ms + hours * MS_PER_HOUR);
        let maghrib_ms = raw_sunset_ms.map(|sunset| sunset + derived.adjustments_ms[4]);

        let mut fajr_ms = fajr_solution
            .hours
            .map(|hours| day.utc_midnight_ms + hours * MS_PER_HOUR + derived.adjustments_ms[0]);
        let sunrise_ms = sunrise_solution
            .hours
            .map(|hours| day.utc_midnight_ms + hours * MS_PER_HOUR + derived.adjustments_ms[1]);
        let asr_ms = asr_solution
            .hours
            .map(|hours| day.utc_midnight_ms + hours * MS_PER_HOUR + derived.adjustments_ms[3]);

        let mut isha_fallback_used = FallbackUsed::None;
        let (mut isha_ms, isha_cos_omega, isha_clamped) = if parameters.isha_interval > 0 {
            isha_fallback_used = FallbackUsed::Interval;
            let ms = maghrib_ms
                .map(|maghrib| maghrib + f64::from(parameters.isha_interval) * 60_000.0 + derived.adjustments_ms[5]);
            (ms, None, false)
        } else {
            let isha_solution = solve_event(coordinates, Angle::new(derived.isha_altitude), true, &angles);
            let ms = isha_solution
                .hours
                .map(|hours| day.utc_midnight_ms + hours * MS_PER_HOUR + derived.adjustments_ms[5]);
            (ms, Some(isha_solution.raw_cos_omega), isha_solution.clamped)
        };

        let next_day_sunrise_ms = self.sunrise_for_julian_date(coordinates, &derived, julian_date + 1.0);

        let mut fajr_fallback_used = FallbackUsed::None;
        if parameters.high_latitude_rule != HighLatitudeRule::None && sunrise_ms.is_some() {
            if let (Some(raw_sunset), Some(next_sunrise)) = (raw_sunset_ms, next_day_sunrise_ms) {
                let night_ms = next_sunrise - raw_sunset;

                if night_ms > 0.0 {
                    let (fajr_portion, isha_portion) = parameters.night_portions();

                    if fajr_ms.is_none() {
                        let candidate = next_sunrise - fajr_portion * night_ms;
                        fajr_ms = Some(candidate + derived.adjustments_ms[0]);
                        fajr_fallback_used = fallback_for_rule(parameters.high_latitude_rule);
                        warn!("fajr undefined on jd={julian_date}, rewritten via {fajr_fallback_used:?}");
                    }

                    if isha_ms.is_none() {
                        let candidate = raw_sunset + isha_portion * night_ms;
                        isha_ms = Some(candidate + derived.adjustments_ms[5]);
                        isha_fallback_used = fallback_for_rule(parameters.high_latitude_rule);
                        warn!("isha undefined on jd={julian_date}, rewritten via {isha_fallback_used:?}");
                    }
                }
            }
        }

        let sunset_diagnostics = Diagnostics::new(
            Some(sunset_solution.raw_cos_omega),
            sunset_solution.clamped,
            FallbackUsed::None,
            derived.horizon_altitude,
        );

        let (midnight_ms, first_third_ms, last_third_ms) = match (raw_sunset_ms, next_day_sunrise_ms) {
            (Some(raw_sunset), Some(next_sunrise)) => {
                let night_ms = next_sunrise - raw_sunset;

                (
                    Some((raw_sunset + next_sunrise) / 2.0),
                    Some(raw_sunset + night_ms / 3.0),
                    Some(raw_sunset + 2.0 * night_ms / 3.0),
                )
            }
            _ => (None, None, None),
        };

        let imsak_ms = fajr_ms.map(|fajr| fajr - IMSAK_OFFSET_MS);

        let night_division_diagnostics = Diagnostics::none(0.0);

        let slot = Slot {
            fajr_ms,
            sunrise_ms,
            dhuhr_ms,
            asr_ms,
            maghrib_ms,
            isha_ms,
            cos_omega_fajr: fajr_solution.raw_cos_omega,
            cos_omega_sunrise: sunrise_solution.raw_cos_omega,
            cos_omega_asr: asr_solution.raw_cos_omega,
            cos_omega_sunset: sunset_solution.raw_cos_omega,
            cos_omega_isha: isha_cos_omega.unwrap_or(f64::NAN),
            target_altitude_fajr: derived.fajr_altitude,
            target_altitude_sunrise: derived.horizon_altitude,
            target_altitude_asr: asr_altitude,
            target_altitude_sunset: derived.horizon_altitude,
            target_altitude_isha: derived.isha_altitude,
            declination: angles.decl_today.degrees,
            eqt_minutes: day.eqt_minutes,
            solar_noon_ms: dhuhr_ms,
            julian_date,
            raw_sunset_ms,
        };
        self.slab.push(slot);

        Ok(PrayerTimes {
            fajr: Self::result(
                fajr_ms,
                UndefinedReason::SunNeverReachesAltitude,
                Diagnostics::new(
                    Some(fajr_solution.raw_cos_omega),
                    fajr_solution.clamped,
                    fajr_fallback_used,
                    derived.fajr_altitude,
                ),
            ),
            sunrise: Self::result(
                sunrise_ms,
                UndefinedReason::SunNeverReachesAltitude,
                Diagnostics::new(
                    Some(sunrise_solution.raw_cos_omega),
                    sunrise_solution.clamped,
                    FallbackUsed::None,
                    derived.horizon_altitude,
                ),
            ),
            dhuhr: PrayerTimeResult::Valid {
                ms: dhuhr_ms,
                diagnostics: Diagnostics::none(0.0),
            },
            asr: Self::result(
                asr_ms,
                UndefinedReason::SunNeverReachesAltitude,
                Diagnostics::new(
                    Some(asr_solution.raw_cos_omega),
                    asr_solution.clamped,
                    FallbackUsed::None,
                    asr_altitude,
                ),
            ),
            sunset: Self::result(raw_sunset_ms, UndefinedReason::SunNeverReachesAltitude, sunset_diagnostics),
            maghrib: Self::result(maghrib_ms, UndefinedReason::SunsetOrSunriseUndefined, sunset_diagnostics),
            isha: Self::result(
                isha_ms,
                UndefinedReason::SunNeverReachesAltitude,
                Diagnostics::new(isha_cos_omega, isha_clamped, isha_fallback_used, derived.isha_altitude),
            ),
            midnight: Self::result(
                midnight_ms,
                UndefinedReason::SunsetOrSunriseUndefined,
                night_division_diagnostics,
            ),
            imsak: Self::result(imsak_ms, UndefinedReason::FajrUndefined, night_division_diagnostics),
            first_third: Self::result(
                first_third_ms,
                UndefinedReason::SunsetOrSunriseUndefined,
                night_division_diagnostics,
            ),
            last_third: Self::result(
                last_third_ms,
                UndefinedReason::SunsetOrSunriseUndefined,
                night_division_diagnostics,
            ),
            declination: angles.decl_today.degrees,
            eqt_minutes: day.eqt_minutes,
            solar_noon_ms: dhuhr_ms,
            julian_date,
        })
    }

    fn result(ms: Option<f64>, reason: UndefinedReason, diagnostics: Diagnostics) -> PrayerTimeResult {
        match ms {
            Some(ms) => PrayerTimeResult::Valid { ms, diagnostics },
            None => PrayerTimeResult::Undefined { reason, diagnostics },
        }
    }
}
