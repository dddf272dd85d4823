// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

use std::ops::{Add, Div, Mul, Sub};

use chrono::{DateTime, Duration, TimeZone, Timelike};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::PrayerTimeError, models::rounding::Rounding};

pub trait Normalize {
    fn normalized_to_scale(&self, max: f64) -> f64;
}

impl Normalize for f64 {
    fn normalized_to_scale(&self, max: f64) -> f64 {
        max.mul_add(-(self / max).floor(), *self)
    }
}

/// Rounds a `DateTime`'s seconds component off per a [`Rounding`] policy, used by
/// the season-adjusted twilight accessories to normalize to whole minutes.
pub trait Stride {
    #[must_use]
    fn rounded_minute(&self, rounding: Rounding) -> Self;
}

impl<Tz: TimeZone> Stride for DateTime<Tz> {
    fn rounded_minute(&self, rounding: Rounding) -> Self {
        let adjusted = self.clone();
        let seconds = adjusted.second();

        match rounding {
            Rounding::Nearest => {
                let rounded = (f64::from(seconds) / 60.0).round() as i64;
                let adjusted_seconds = i64::from(seconds);

                if rounded == 1 {
                    adjusted + Duration::try_seconds(60 - adjusted_seconds).unwrap()
                } else {
                    adjusted + Duration::try_seconds(-adjusted_seconds).unwrap()
                }
            }
            Rounding::Up => {
                let adjusted_seconds = i64::from(seconds);

                adjusted + Duration::try_seconds(60 - adjusted_seconds).unwrap()
            }
            Rounding::None => adjusted,
        }
    }
}

#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Angle {
    pub degrees: f64,
}

impl Angle {
    pub const fn new(degrees: f64) -> Self {
        Self { degrees }
    }

    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }

    pub fn radians(self) -> f64 {
        self.degrees.to_radians()
    }

    pub fn unwound(self) -> Self {
        Self {
            degrees: self.degrees.normalized_to_scale(360.0),
        }
    }

    pub fn quadrant_shifted(self) -> Self {
        if self.degrees >= -180.0 && self.degrees <= 180.0 {
            // Nothing to do. Already initialized
            // to the default value.
            self
        } else {
            let value = 360.0f64.mul_add(-(self.degrees / 360.0).round(), self.degrees);
            Self { degrees: value }
        }
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            degrees: self.degrees + rhs.degrees,
        }
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            degrees: self.degrees - rhs.degrees,
        }
    }
}

impl Mul for Angle {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            degrees: self.degrees * rhs.degrees,
        }
    }
}

impl Div for Angle {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        assert!(rhs.degrees != 0.0, "Cannot divide by zero.");

        Self {
            degrees: self.degrees / rhs.degrees,
        }
    }
}

/// The latitude and longitude associated with a location.
/// Both latitude and longitude values are specified in degrees.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Validates that this location lies within the ranges the hour-angle kernel
    /// assumes. A location failing this check is rejected before reaching the
    /// kernel; it is distinct from a prayer time being geometrically undefined,
    /// which is a normal outcome for a validated location at extreme latitudes.
    pub fn validate(&self) -> Result<(), PrayerTimeError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PrayerTimeError::InvalidLatitude(self.latitude));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(PrayerTimeError::InvalidLongitude(self.longitude));
        }

        Ok(())
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl Coordinates {
    #[must_use]
    pub const fn latitude_angle(&self) -> Angle {
        Angle::new(self.latitude)
    }

    #[must_use]
    pub const fn longitude_angle(&self) -> Angle {
        Angle::new(self.longitude)
    }
}
