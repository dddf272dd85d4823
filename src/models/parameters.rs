// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

use crate::Prayer;

use super::{
    adjustments::TimeAdjustment, high_altitude_rule::HighLatitudeRule, madhab::Madhab, method::Method,
    midnight_mode::MidnightMode, polar_rule::PolarRule, rounding::Rounding, shafaq::Shafaq,
};

/// Settings that are used for determining the
/// the correct prayer time.
///
/// It is recommended to use [Configuration](struct.Configuration.html) to build
/// the parameters that are need.
/// A builder for the the [Parameters](struct.Parameters.html).
///
/// It is recommended that this is used for setting
/// all parameters that are needed.
#[derive(Clone, derive_builder::Builder)]
#[builder(name = "Configuration")]
pub struct Parameters {
    pub method: Method,
    pub fajr_angle: f64,
    pub maghrib_angle: f64,
    pub isha_angle: f64,
    /// Observer elevation above sea level, in meters. Used to extend the horizon
    /// dip correction for sunrise/sunset; must be `>= 0`.
    pub elevation: f64,
    #[builder(setter(custom))]
    pub isha_interval: i32,
    pub madhab: Madhab,
    pub high_latitude_rule: HighLatitudeRule,
    pub polar_rule: PolarRule,
    pub midnight_mode: MidnightMode,
    pub adjustments: TimeAdjustment,
    pub method_adjustments: TimeAdjustment,
    pub rounding: Rounding,
    pub shafaq: Shafaq,
}

impl Parameters {
    #[must_use]
    pub fn new(fajr_angle: f64, isha_angle: f64) -> Self {
        Self {
            fajr_angle,
            maghrib_angle: 0.0,
            isha_angle,
            elevation: 0.0,
            method: Method::Other,
            isha_interval: 0,
            madhab: Madhab::Shafi,
            high_latitude_rule: HighLatitudeRule::MiddleOfTheNight,
            polar_rule: PolarRule::Unresolved,
            midnight_mode: MidnightMode::Standard,
            adjustments: TimeAdjustment::default(),
            method_adjustments: TimeAdjustment::default(),
            rounding: Rounding::Nearest,
            shafaq: Shafaq::General,
        }
    }

    #[must_use]
    pub fn night_portions(&self) -> (f64, f64) {
        match self.high_latitude_rule {
            HighLatitudeRule::MiddleOfTheNight => (1.0 / 2.0, 1.0 / 2.0),
            HighLatitudeRule::SeventhOfTheNight => (1.0 / 7.0, 1.0 / 7.0),
            HighLatitudeRule::TwilightAngle => (self.fajr_angle / 60.0, self.isha_angle / 60.0),
            HighLatitudeRule::None => (0.0, 0.0),
        }
    }

    #[must_use]
    pub const fn time_adjustments(&self, prayer: Prayer) -> i64 {
        match prayer {
            Prayer::Fajr => self.adjustments.fajr + self.method_adjustments.fajr,
            Prayer::Sunrise => self.adjustments.sunrise + self.method_adjustments.sunrise,
            Prayer::Dhuhr => self.adjustments.dhuhr + self.method_adjustments.dhuhr,
            Prayer::Asr => self.adjustments.asr + self.method_adjustments.asr,
            Prayer::Maghrib => self.adjustments.maghrib + self.method_adjustments.maghrib,
            Prayer::Isha => self.adjustments.isha + self.method_adjustments.isha,
        }
    }
}

impl Configuration {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fajr_angle: Some(0.0),
            maghrib_angle: Some(0.0),
            isha_angle: Some(0.0),
            elevation: Some(0.0),
            method: Some(Method::Other),
            isha_interval: Some(0),
            madhab: Some(Madhab::Shafi),
            high_latitude_rule: Some(HighLatitudeRule::MiddleOfTheNight),
            polar_rule: Some(PolarRule::Unresolved),
            midnight_mode: Some(MidnightMode::Standard),
            adjustments: Some(TimeAdjustment::default()),
            method_adjustments: Some(TimeAdjustment::default()),
            rounding: Some(Rounding::Nearest),
            shafaq: Some(Shafaq::General),
        }
    }

    pub fn isha_interval(&mut self, isha_interval: i32) -> &mut Self {
        self.isha_angle = Some(0.0);
        self.isha_interval = Some(isha_interval);
        self
    }
}
