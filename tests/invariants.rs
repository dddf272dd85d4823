// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

use proptest::prelude::*;

use waqt_core::prelude::*;

fn epoch_ms(year: i32, month: u32, day: u32) -> f64 {
    use chrono::{TimeZone, Utc};
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap().timestamp_millis() as f64
}

fn params_with(fajr_angle: f64, isha_angle: f64, madhab: Madhab, rule: HighLatitudeRule) -> Parameters {
    Configuration::new()
        .fajr_angle(fajr_angle)
        .isha_angle(isha_angle)
        .madhab(madhab)
        .high_latitude_rule(rule)
        .build()
        .unwrap()
}

fn midlatitude_coordinates() -> BoxedStrategy<Coordinates> {
    (20.0..55.0_f64, -120.0..120.0_f64)
        .prop_map(|(lat, lng)| Coordinates::new(lat, lng))
        .boxed()
}

fn summer_dates() -> BoxedStrategy<f64> {
    (152_i64..243_i64)
        .prop_map(|day_of_year| epoch_ms(2023, 1, 1) + (day_of_year as f64) * 86_400_000.0)
        .boxed()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn ordering_holds_whenever_all_events_are_defined(
        coordinates in midlatitude_coordinates(),
        date_ms in summer_dates(),
    ) {
        let params = params_with(18.0, 17.0, Madhab::Shafi, HighLatitudeRule::TwilightAngle);
        let times = compute_prayer_times(coordinates, &params, date_ms).unwrap();

        if let (Some(sunrise), Some(dhuhr), Some(asr), Some(sunset), Some(maghrib)) = (
            times.sunrise.ms(),
            times.dhuhr.ms(),
            times.asr.ms(),
            times.sunset.ms(),
            times.maghrib.ms(),
        ) {
            prop_assert!(sunrise < dhuhr);
            prop_assert!(dhuhr < asr);
            prop_assert!(asr < sunset);
            prop_assert!(sunset <= maghrib);
        }
    }

    #[test]
    fn imsak_is_exactly_ten_minutes_before_fajr_when_defined(
        coordinates in midlatitude_coordinates(),
        date_ms in summer_dates(),
    ) {
        let params = params_with(18.0, 17.0, Madhab::Shafi, HighLatitudeRule::TwilightAngle);
        let times = compute_prayer_times(coordinates, &params, date_ms).unwrap();

        if let (Some(fajr), Some(imsak)) = (times.fajr.ms(), times.imsak.ms()) {
            prop_assert!((fajr - imsak - 600_000.0).abs() < 1.0);
        }
    }

    #[test]
    fn zero_maghrib_adjustment_means_sunset_equals_maghrib(
        coordinates in midlatitude_coordinates(),
        date_ms in summer_dates(),
    ) {
        let params = params_with(18.0, 17.0, Madhab::Shafi, HighLatitudeRule::TwilightAngle);
        let times = compute_prayer_times(coordinates, &params, date_ms).unwrap();

        if let (Some(sunset), Some(maghrib)) = (times.sunset.ms(), times.maghrib.ms()) {
            prop_assert!((sunset - maghrib).abs() < 1.0);
        }
    }

    #[test]
    fn hanafi_asr_never_precedes_standard_asr(
        coordinates in midlatitude_coordinates(),
        date_ms in summer_dates(),
    ) {
        let standard = params_with(18.0, 17.0, Madhab::Shafi, HighLatitudeRule::TwilightAngle);
        let hanafi = params_with(18.0, 17.0, Madhab::Hanafi, HighLatitudeRule::TwilightAngle);

        let standard_times = compute_prayer_times(coordinates, &standard, date_ms).unwrap();
        let hanafi_times = compute_prayer_times(coordinates, &hanafi, date_ms).unwrap();

        if let (Some(standard_asr), Some(hanafi_asr)) = (standard_times.asr.ms(), hanafi_times.asr.ms()) {
            prop_assert!(hanafi_asr >= standard_asr);
        }

        prop_assert_eq!(standard_times.dhuhr.ms(), hanafi_times.dhuhr.ms());
        prop_assert_eq!(standard_times.sunset.ms(), hanafi_times.sunset.ms());
    }

    #[test]
    fn a_positive_elevation_widens_the_day_versus_sea_level(
        latitude in 20.0..55.0_f64,
        longitude in -120.0..120.0_f64,
        date_ms in summer_dates(),
        elevation in 1.0..3000.0_f64,
    ) {
        let coordinates = Coordinates::new(latitude, longitude);
        let sea_level = Configuration::new()
            .fajr_angle(18.0)
            .isha_angle(17.0)
            .high_latitude_rule(HighLatitudeRule::TwilightAngle)
            .build()
            .unwrap();
        let elevated = Configuration::new()
            .fajr_angle(18.0)
            .isha_angle(17.0)
            .high_latitude_rule(HighLatitudeRule::TwilightAngle)
            .elevation(elevation)
            .build()
            .unwrap();

        let at_sea_level = compute_prayer_times(coordinates, &sea_level, date_ms).unwrap();
        let at_elevation = compute_prayer_times(coordinates, &elevated, date_ms).unwrap();

        if let (Some(sunrise_sea), Some(sunrise_high), Some(sunset_sea), Some(sunset_high)) = (
            at_sea_level.sunrise.ms(),
            at_elevation.sunrise.ms(),
            at_sea_level.sunset.ms(),
            at_elevation.sunset.ms(),
        ) {
            prop_assert!(sunrise_high <= sunrise_sea);
            prop_assert!(sunset_high >= sunset_sea);
        }

        prop_assert_eq!(at_sea_level.dhuhr.ms(), at_elevation.dhuhr.ms());
    }

    #[test]
    fn a_per_prayer_adjustment_shifts_only_that_prayer(
        coordinates in midlatitude_coordinates(),
        date_ms in summer_dates(),
        minutes in -30_i64..30_i64,
    ) {
        let unadjusted = params_with(18.0, 17.0, Madhab::Shafi, HighLatitudeRule::TwilightAngle);
        let mut adjusted = unadjusted.clone();
        adjusted.adjustments.dhuhr = minutes;

        let base = compute_prayer_times(coordinates, &unadjusted, date_ms).unwrap();
        let shifted = compute_prayer_times(coordinates, &adjusted, date_ms).unwrap();

        let base_dhuhr = base.dhuhr.ms().unwrap();
        let shifted_dhuhr = shifted.dhuhr.ms().unwrap();

        prop_assert!((shifted_dhuhr - base_dhuhr - (minutes as f64) * 60_000.0).abs() < 1.0);
        prop_assert_eq!(base.fajr.ms(), shifted.fajr.ms());
        prop_assert_eq!(base.asr.ms(), shifted.asr.ms());
    }

    #[test]
    fn warm_and_cleared_caches_produce_bit_identical_output(
        coordinates in midlatitude_coordinates(),
        date_ms in summer_dates(),
    ) {
        let params = params_with(18.0, 17.0, Madhab::Shafi, HighLatitudeRule::TwilightAngle);
        let mut context = create_prayer_context(coordinates, params);

        let cold = context.compute(date_ms).unwrap();
        let warm = context.compute(date_ms).unwrap();
        context.clear_cache();
        let cleared = context.compute(date_ms).unwrap();

        prop_assert_eq!(cold.dhuhr.ms(), warm.dhuhr.ms());
        prop_assert_eq!(cold.dhuhr.ms(), cleared.dhuhr.ms());
        prop_assert_eq!(cold.fajr.ms(), cleared.fajr.ms());
        prop_assert_eq!(cold.isha.ms(), cleared.isha.ms());
    }

    #[test]
    fn context_and_freestanding_computation_agree(
        coordinates in midlatitude_coordinates(),
        date_ms in summer_dates(),
    ) {
        let params = params_with(18.0, 17.0, Madhab::Shafi, HighLatitudeRule::TwilightAngle);
        let mut context = create_prayer_context(coordinates, params.clone());

        let via_context = context.compute(date_ms).unwrap();
        let via_freestanding = compute_prayer_times(coordinates, &params, date_ms).unwrap();

        prop_assert_eq!(via_context, via_freestanding);
    }

    #[test]
    fn solar_metadata_stays_within_physical_bounds(
        coordinates in midlatitude_coordinates(),
        date_ms in summer_dates(),
    ) {
        let params = params_with(18.0, 17.0, Madhab::Shafi, HighLatitudeRule::TwilightAngle);
        let times = compute_prayer_times(coordinates, &params, date_ms).unwrap();

        prop_assert!(times.declination.abs() <= 23.5);
        prop_assert!(times.eqt_minutes.abs() < 17.0);
        prop_assert!((times.solar_noon_ms - times.dhuhr.ms().unwrap()).abs() < 10.0 * 60_000.0);
    }

    #[test]
    fn qibla_bearing_is_always_within_a_full_circle(
        latitude in -89.0..89.0_f64,
        longitude in -179.0..179.0_f64,
    ) {
        let bearing = compute_qibla(Coordinates::new(latitude, longitude));

        prop_assert!((0.0..360.0).contains(&bearing));
    }
}

fn assert_hhmm(actual_ms: Option<f64>, expected_hh: i64, expected_mm: i64, utc_offset_minutes: i64) {
    let actual_ms = actual_ms.expect("expected a defined prayer time");
    let local_ms = actual_ms + (utc_offset_minutes as f64) * 60_000.0;
    let minutes_since_midnight = (local_ms.rem_euclid(86_400_000.0) / 60_000.0).round() as i64;
    let expected_minutes = expected_hh * 60 + expected_mm;

    assert!(
        (minutes_since_midnight - expected_minutes).abs() <= 1,
        "expected {expected_hh:02}:{expected_mm:02}, got {}:{:02}",
        minutes_since_midnight / 60,
        minutes_since_midnight % 60,
    );
}

#[test]
fn chittagong_matches_the_recorded_fixture() {
    let coordinates = Coordinates::new(22.3569, 91.7832);
    let params = Configuration::new()
        .fajr_angle(18.0)
        .isha_angle(17.0)
        .madhab(Madhab::Hanafi)
        .high_latitude_rule(HighLatitudeRule::TwilightAngle)
        .build()
        .unwrap();

    let times = compute_prayer_times(coordinates, &params, epoch_ms(2026, 2, 25)).unwrap();

    let dhaka_offset = 6 * 60;
    assert_hhmm(times.fajr.ms(), 5, 3, dhaka_offset);
    assert_hhmm(times.sunrise.ms(), 6, 18, dhaka_offset);
    assert_hhmm(times.dhuhr.ms(), 12, 6, dhaka_offset);
    assert_hhmm(times.asr.ms(), 16, 17, dhaka_offset);
    assert_hhmm(times.maghrib.ms(), 17, 55, dhaka_offset);
    assert_hhmm(times.isha.ms(), 19, 5, dhaka_offset);
}

#[test]
fn mecca_uses_the_isha_interval_fallback() {
    let coordinates = Coordinates::new(21.4225, 39.8262);
    let mut params = Configuration::new()
        .fajr_angle(18.5)
        .madhab(Madhab::Hanafi)
        .high_latitude_rule(HighLatitudeRule::TwilightAngle)
        .build()
        .unwrap();
    params.isha_interval = 90;

    let times = compute_prayer_times(coordinates, &params, epoch_ms(2026, 2, 25)).unwrap();

    let maghrib = times.maghrib.ms().unwrap();
    let isha = times.isha.ms().unwrap();

    assert!((isha - maghrib - 90.0 * 60_000.0).abs() < 60_000.0);
    assert_eq!(times.isha.diagnostics().fallback_used, FallbackUsed::Interval);
}

#[test]
fn the_polar_region_has_no_geometric_sunset_when_fallback_is_disabled() {
    let coordinates = Coordinates::new(71.0, 25.78);
    let params = Configuration::new()
        .fajr_angle(18.0)
        .isha_angle(17.0)
        .high_latitude_rule(HighLatitudeRule::None)
        .build()
        .unwrap();

    let times = compute_prayer_times(coordinates, &params, epoch_ms(2026, 6, 21)).unwrap();

    assert!(!times.sunset.is_valid());
    assert!(!times.maghrib.is_valid());
    assert!(!times.midnight.is_valid());
    assert!(!times.first_third.is_valid());
    assert!(!times.last_third.is_valid());
    assert!(!times.imsak.is_valid());
    assert!(!times.fajr.is_valid());
    assert!(!times.isha.is_valid());
}

#[test]
fn cairo_needs_no_fallback_on_a_summer_solstice() {
    let coordinates = Coordinates::new(30.0444, 31.2357);
    let params = Configuration::new()
        .fajr_angle(18.0)
        .isha_angle(17.0)
        .high_latitude_rule(HighLatitudeRule::TwilightAngle)
        .build()
        .unwrap();

    let times = compute_prayer_times(coordinates, &params, epoch_ms(2022, 6, 21)).unwrap();

    let cairo_offset = 2 * 60;
    assert_hhmm(times.fajr.ms(), 3, 18, cairo_offset);
    assert_hhmm(times.dhuhr.ms(), 11, 57, cairo_offset);
    assert_eq!(times.fajr.diagnostics().fallback_used, FallbackUsed::None);
    assert_eq!(times.isha.diagnostics().fallback_used, FallbackUsed::None);
}

#[test]
fn qibla_bearings_match_the_recorded_fixtures() {
    let new_york = Coordinates::new(40.7128, -74.006);
    let sydney = Coordinates::new(-33.8688, 151.2093);
    let london = Coordinates::new(51.5074, -0.1278);

    assert!((compute_qibla(new_york) - 58.48).abs() < 0.1);
    assert!((compute_qibla(sydney) - 277.50).abs() < 0.1);
    assert!((compute_qibla(london) - 118.99).abs() < 0.1);
}
