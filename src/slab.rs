// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! A bounded ring buffer of compute results, kept as the engine's internal scratch
//! storage. Every [`crate::engine::PrayerEngine::compute`] call appends one
//! [`Slot`] here before projecting its public, owned [`crate::schedule::PrayerTimes`]
//! return value; a long-running batch of computes reuses this storage instead of
//! allocating afresh each time.
//!
//! The ring is intentionally *not* the public result type: callers get an owned
//! value back, so nothing outside this module ever observes a slot being
//! overwritten by a later compute call.

const SLAB_CAPACITY: usize = 16_384;

/// A dense record of one day's compute-kernel output for one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    // Time lanes, milliseconds since the epoch.
    pub fajr_ms: Option<f64>,
    pub sunrise_ms: Option<f64>,
    pub dhuhr_ms: f64,
    pub asr_ms: Option<f64>,
    pub maghrib_ms: Option<f64>,
    pub isha_ms: Option<f64>,

    // cos(H0) diagnostic lanes; NaN means "not applicable" (dhuhr).
    pub cos_omega_fajr: f64,
    pub cos_omega_sunrise: f64,
    pub cos_omega_asr: f64,
    pub cos_omega_sunset: f64,
    pub cos_omega_isha: f64,

    // Target altitude lanes, degrees.
    pub target_altitude_fajr: f64,
    pub target_altitude_sunrise: f64,
    pub target_altitude_asr: f64,
    pub target_altitude_sunset: f64,
    pub target_altitude_isha: f64,

    // Metadata lanes.
    pub declination: f64,
    pub eqt_minutes: f64,
    pub solar_noon_ms: f64,
    pub julian_date: f64,

    // The raw (pre-adjustment) sunset time, the anchor for night-division outputs.
    pub raw_sunset_ms: Option<f64>,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            fajr_ms: None,
            sunrise_ms: None,
            dhuhr_ms: 0.0,
            asr_ms: None,
            maghrib_ms: None,
            isha_ms: None,
            cos_omega_fajr: f64::NAN,
            cos_omega_sunrise: f64::NAN,
            cos_omega_asr: f64::NAN,
            cos_omega_sunset: f64::NAN,
            cos_omega_isha: f64::NAN,
            target_altitude_fajr: 0.0,
            target_altitude_sunrise: 0.0,
            target_altitude_asr: 0.0,
            target_altitude_sunset: 0.0,
            target_altitude_isha: 0.0,
            declination: 0.0,
            eqt_minutes: 0.0,
            solar_noon_ms: 0.0,
            julian_date: 0.0,
            raw_sunset_ms: None,
        }
    }
}

/// Fixed-capacity ring buffer of [`Slot`] values. Wraparound is silent: pushing
/// past capacity overwrites the oldest entry without signaling.
#[derive(Debug, Clone)]
pub struct Slab {
    slots: Vec<Slot>,
    next: usize,
    len: usize,
}

impl Default for Slab {
    fn default() -> Self {
        Self::new()
    }
}

impl Slab {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![Slot::default(); SLAB_CAPACITY],
            next: 0,
            len: 0,
        }
    }

    /// Writes `slot` into the ring, overwriting the oldest entry once capacity is
    /// reached, and returns the index it was written to.
    pub fn push(&mut self, slot: Slot) -> usize {
        let index = self.next;
        self.slots[index] = slot;
        self.next = (self.next + 1) % SLAB_CAPACITY;
        self.len = (self.len + 1).min(SLAB_CAPACITY);

        index
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        SLAB_CAPACITY
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resets the ring to empty. Existing indices returned by `push` are no
    /// longer valid to read after this call.
    pub fn clear(&mut self) {
        self.next = 0;
        self.len = 0;
    }
}
