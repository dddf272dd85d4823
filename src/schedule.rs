// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! # Prayer Schedule
//!
//! The output view: eleven named prayer times for one civil day, each either a
//! resolved instant or an explanation of why it has none, plus the solar metadata
//! that produced them.

use crate::{
    error::PrayerTimeError,
    models::{diagnostics::Diagnostics, parameters::Parameters},
};

/// Why a particular key has no defined time. Distinct from [`PrayerTimeError`],
/// which is raised at the configuration boundary and never reaches this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndefinedReason {
    /// The sun never reaches the altitude this event is solved for, at this
    /// location on this day, and no high-latitude fallback rewrote it.
    SunNeverReachesAltitude,
    /// This value is anchored to sunset and/or the following day's sunrise, and
    /// at least one of those is itself undefined.
    SunsetOrSunriseUndefined,
    /// Imsak is ten minutes before fajr; fajr itself is undefined.
    FajrUndefined,
}

/// One computed key: either a resolved instant with its diagnostics, or an
/// explanation of why it has none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrayerTimeResult {
    Valid { ms: f64, diagnostics: Diagnostics },
    Undefined { reason: UndefinedReason, diagnostics: Diagnostics },
}

impl PrayerTimeResult {
    #[must_use]
    pub const fn ms(&self) -> Option<f64> {
        match self {
            Self::Valid { ms, .. } => Some(*ms),
            Self::Undefined { .. } => None,
        }
    }

    #[must_use]
    pub const fn diagnostics(&self) -> Diagnostics {
        match self {
            Self::Valid { diagnostics, .. } | Self::Undefined { diagnostics, .. } => *diagnostics,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// All eleven computed keys for one civil day at one location, plus the solar
/// metadata (declination, equation of time, solar noon, Julian Date) that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimes {
    pub fajr: PrayerTimeResult,
    pub sunrise: PrayerTimeResult,
    pub dhuhr: PrayerTimeResult,
    pub asr: PrayerTimeResult,
    pub sunset: PrayerTimeResult,
    pub maghrib: PrayerTimeResult,
    pub isha: PrayerTimeResult,
    pub midnight: PrayerTimeResult,
    pub imsak: PrayerTimeResult,
    pub first_third: PrayerTimeResult,
    pub last_third: PrayerTimeResult,

    pub declination: f64,
    pub eqt_minutes: f64,
    pub solar_noon_ms: f64,
    pub julian_date: f64,
}

fn format_hhmm(ms: Option<f64>) -> String {
    use chrono::{TimeZone, Utc};

    match ms {
        Some(ms) => Utc
            .timestamp_millis_opt(ms.round() as i64)
            .single()
            .map_or_else(|| "--:--".to_string(), |dt| dt.format("%H:%M").to_string()),
        None => "--:--".to_string(),
    }
}

impl std::fmt::Display for PrayerTimes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prayer_table = tabled::col![
            tabled::row![
                tabled::col!["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"],
                tabled::col![
                    format_hhmm(self.fajr.ms()),
                    format_hhmm(self.sunrise.ms()),
                    format_hhmm(self.dhuhr.ms()),
                    format_hhmm(self.asr.ms()),
                    format_hhmm(self.maghrib.ms()),
                    format_hhmm(self.isha.ms()),
                ],
            ],
            tabled::row![
                tabled::col!["Imsak", "Midnight", "First Third", "Last Third"],
                tabled::col![
                    format_hhmm(self.imsak.ms()),
                    format_hhmm(self.midnight.ms()),
                    format_hhmm(self.first_third.ms()),
                    format_hhmm(self.last_third.ms()),
                ],
            ]
        ];

        write!(f, "{prayer_table}")
    }
}

/// A builder for computing a [`PrayerTimes`] value. Each call to [`build`](Self::build)
/// runs against a freshly constructed [`crate::engine::PrayerEngine`]; callers
/// making repeated calls for the same location should use
/// [`crate::create_prayer_context`] instead, which reuses one engine's caches.
pub struct PrayerSchedule {
    date_ms: Option<f64>,
    coordinates: Option<crate::astronomy::unit::Coordinates>,
    params: Option<Parameters>,
}

impl Default for PrayerSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl PrayerSchedule {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            date_ms: None,
            coordinates: None,
            params: None,
        }
    }

    pub fn with_date_ms(&mut self, date_ms: f64) -> &mut Self {
        self.date_ms = Some(date_ms);
        self
    }

    pub fn with_coordinates(&mut self, location: crate::astronomy::unit::Coordinates) -> &mut Self {
        self.coordinates = Some(location);
        self
    }

    pub fn with_parameters(&mut self, params: Parameters) -> &mut Self {
        self.params = Some(params);
        self
    }

    pub fn build(&self) -> Result<PrayerTimes, PrayerTimeError> {
        match (self.date_ms, self.coordinates, &self.params) {
            (Some(date_ms), Some(coordinates), Some(params)) => {
                crate::engine::PrayerEngine::new().compute(coordinates, params, date_ms)
            }
            (date_ms, coordinates, params) => Err(PrayerTimeError::IncompleteConfiguration(format!(
                "date_ms={date_ms:?}, coordinates={coordinates:?}, params.is_some()={}",
                params.is_some()
            ))),
        }
    }
}
