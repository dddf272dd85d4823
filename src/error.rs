// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! Errors raised at the configuration boundary. The compute kernel itself never
//! raises; geometric impossibility is communicated through [`crate::schedule::PrayerTimeResult`],
//! not through this type.

/// Errors that can occur while validating or assembling a [`crate::models::parameters::Parameters`]
/// or [`crate::astronomy::unit::Coordinates`] value. The kernel is never reached once one of
/// these is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PrayerTimeError {
    #[error("latitude {0} is out of range; must be within [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is out of range; must be within [-180, 180]")]
    InvalidLongitude(f64),

    #[error("elevation {0} is invalid; must be >= 0 meters")]
    InvalidElevation(f64),

    #[error("required configuration is missing: {0}")]
    IncompleteConfiguration(String),
}
