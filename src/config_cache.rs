// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! Caches the trigonometric constants derived from a configuration so that a
//! sequence of `compute()` calls against the same location/method only pays for
//! the derivation once. Owned by [`crate::engine::PrayerEngine`], not a module-level
//! static — see the concurrency notes on that type.

use log::debug;

use crate::models::adjustments::TimeAdjustment;

/// Values derived from a configuration that do not depend on the date being
/// computed: observer trig, horizon/fajr/isha altitude geometry, adjustments
/// converted to milliseconds, and the madhab shadow factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedConstants {
    pub sin_phi: f64,
    pub cos_phi: f64,
    pub l_w: f64,
    pub phi_360_cos: f64,

    pub horizon_altitude: f64,
    pub sin_horizon: f64,
    pub horizon_zenith_distance: f64,

    pub fajr_altitude: f64,
    pub sin_fajr: f64,
    pub fajr_zenith_distance: f64,

    pub isha_altitude: f64,
    pub sin_isha: f64,
    pub isha_zenith_distance: f64,

    pub adjustments_ms: [f64; 6],
    pub shadow_factor: f64,
}

fn altitude_geometry(altitude_degrees: f64) -> (f64, f64) {
    let sin = altitude_degrees.to_radians().sin();
    let zenith_distance = 90.0 - altitude_degrees;

    (sin, zenith_distance)
}

impl DerivedConstants {
    fn derive(
        latitude: f64,
        longitude: f64,
        elevation: f64,
        fajr_angle: f64,
        isha_angle: f64,
        adjustments: TimeAdjustment,
        shadow_factor: f64,
    ) -> Self {
        let phi = latitude.to_radians();
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();
        let l_w = -longitude;

        let horizon_altitude = -(0.8333 + 0.0347 * elevation.max(0.0).sqrt());
        let (sin_horizon, horizon_zenith_distance) = altitude_geometry(horizon_altitude);

        let fajr_altitude = -fajr_angle;
        let (sin_fajr, fajr_zenith_distance) = altitude_geometry(fajr_altitude);

        let isha_altitude = -isha_angle;
        let (sin_isha, isha_zenith_distance) = altitude_geometry(isha_altitude);

        Self {
            sin_phi,
            cos_phi,
            l_w,
            phi_360_cos: 360.0 * cos_phi,
            horizon_altitude,
            sin_horizon,
            horizon_zenith_distance,
            fajr_altitude,
            sin_fajr,
            fajr_zenith_distance,
            isha_altitude,
            sin_isha,
            isha_zenith_distance,
            adjustments_ms: [
                adjustments.fajr as f64 * 60_000.0,
                adjustments.sunrise as f64 * 60_000.0,
                adjustments.dhuhr as f64 * 60_000.0,
                adjustments.asr as f64 * 60_000.0,
                adjustments.maghrib as f64 * 60_000.0,
                adjustments.isha as f64 * 60_000.0,
            ],
            shadow_factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ConfigSnapshot {
    latitude: f64,
    longitude: f64,
    elevation: f64,
    fajr_angle: f64,
    isha_angle: f64,
    maghrib_angle: f64,
    shadow_factor: f64,
    adjustments: TimeAdjustment,
}

/// Remembers the last configuration seen and only recomputes [`DerivedConstants`]
/// when a field actually changes, using strict floating-point equality. A freshly
/// cleared cache carries `NaN` in `latitude`, which never compares equal to
/// anything (including itself), guaranteeing the first call always misses.
#[derive(Debug, Clone)]
pub struct ConfigCache {
    last: Option<ConfigSnapshot>,
    derived: Option<DerivedConstants>,
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::too_many_arguments)]
impl ConfigCache {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            derived: None,
        }
    }

    pub fn resolve(
        &mut self,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        fajr_angle: f64,
        isha_angle: f64,
        maghrib_angle: f64,
        shadow_factor: f64,
        adjustments: TimeAdjustment,
    ) -> DerivedConstants {
        let snapshot = ConfigSnapshot {
            latitude,
            longitude,
            elevation,
            fajr_angle,
            isha_angle,
            maghrib_angle,
            shadow_factor,
            adjustments,
        };

        let unchanged = self.last.is_some_and(|last| last == snapshot);

        if unchanged {
            return self.derived.expect("derived constants exist whenever `last` does");
        }

        debug!("config cache refresh: latitude={latitude}, longitude={longitude}, elevation={elevation}, fajr_angle={fajr_angle}, isha_angle={isha_angle}, maghrib_angle={maghrib_angle}, shadow_factor={shadow_factor}");

        let derived = DerivedConstants::derive(
            latitude,
            longitude,
            elevation,
            fajr_angle,
            isha_angle,
            adjustments,
            shadow_factor,
        );

        self.last = Some(snapshot);
        self.derived = Some(derived);

        derived
    }

    pub fn clear(&mut self) {
        self.last = None;
        self.derived = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_configuration_reuses_cached_constants() {
        let mut cache = ConfigCache::new();
        let adjustments = TimeAdjustment::default();

        let first = cache.resolve(40.0, -74.0, 0.0, 18.0, 18.0, 0.0, 1.0, adjustments);
        let second = cache.resolve(40.0, -74.0, 0.0, 18.0, 18.0, 0.0, 1.0, adjustments);

        assert_eq!(first, second);
    }

    #[test]
    fn changed_latitude_triggers_recompute() {
        let mut cache = ConfigCache::new();
        let adjustments = TimeAdjustment::default();

        let first = cache.resolve(40.0, -74.0, 0.0, 18.0, 18.0, 0.0, 1.0, adjustments);
        let second = cache.resolve(41.0, -74.0, 0.0, 18.0, 18.0, 0.0, 1.0, adjustments);

        assert!((first.sin_phi - second.sin_phi).abs() > 0.0);
    }

    #[test]
    fn clearing_forces_next_call_to_recompute() {
        let mut cache = ConfigCache::new();
        let adjustments = TimeAdjustment::default();

        cache.resolve(40.0, -74.0, 0.0, 18.0, 18.0, 0.0, 1.0, adjustments);
        cache.clear();

        assert!(cache.last.is_none());
    }
}
