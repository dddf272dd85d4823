// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! Fixed-size, direct-mapped caches keyed by Julian Date. Both caches are owned
//! by a [`crate::engine::PrayerEngine`] instance rather than living at module
//! scope, so two engines never contend over the same storage.

use log::trace;

use crate::astronomy::solar::{DayConstants, SolarCoordinates};

const CACHE_SLOTS: usize = 512;

fn slot_for(julian_date: f64) -> usize {
    (julian_date.floor() as i64).rem_euclid(CACHE_SLOTS as i64) as usize
}

#[derive(Debug, Clone, Copy)]
struct SolarPositionEntry {
    julian_date: f64,
    position: SolarCoordinates,
}

/// Direct-mapped cache of [`SolarCoordinates`], one per Julian Date. A cache miss
/// (including a hash collision with a different Julian Date) simply recomputes;
/// the cache trades a small amount of recompute risk on collision for O(1) space
/// and no allocation on lookup.
#[derive(Debug, Clone, Default)]
pub struct SolarPositionCache {
    slots: Vec<Option<SolarPositionEntry>>,
}

impl SolarPositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![None; CACHE_SLOTS],
        }
    }

    pub fn get_or_insert(&mut self, julian_date: f64) -> SolarCoordinates {
        let slot = slot_for(julian_date);

        if let Some(entry) = self.slots[slot] {
            if entry.julian_date == julian_date {
                trace!("solar-position cache hit jd={julian_date}");
                return entry.position;
            }
        }

        trace!("solar-position cache miss jd={julian_date}");
        let position = SolarCoordinates::new(julian_date);
        self.slots[slot] = Some(SolarPositionEntry { julian_date, position });

        position
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}

#[derive(Debug, Clone, Copy)]
struct DayConstantsEntry {
    julian_date: f64,
    constants: DayConstants,
}

/// Direct-mapped cache of [`DayConstants`], one per Julian Date. Misses compute
/// `DayConstants::new`, which fetches yesterday's, today's, and tomorrow's solar
/// position through the caller's [`SolarPositionCache`] rather than unconditionally
/// recomputing them.
#[derive(Debug, Clone, Default)]
pub struct DayConstantsCache {
    slots: Vec<Option<DayConstantsEntry>>,
}

impl DayConstantsCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![None; CACHE_SLOTS],
        }
    }

    pub fn get_or_insert(&mut self, solar_cache: &mut SolarPositionCache, julian_date: f64) -> DayConstants {
        let slot = slot_for(julian_date);

        if let Some(entry) = self.slots[slot] {
            if entry.julian_date == julian_date {
                trace!("day-constants cache hit jd={julian_date}");
                return entry.constants;
            }
        }

        trace!("day-constants cache miss jd={julian_date}");
        let constants = DayConstants::new(solar_cache, julian_date);
        self.slots[slot] = Some(DayConstantsEntry { julian_date, constants });

        constants
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astronomy::ops;

    #[test]
    fn cache_hit_returns_identical_position() {
        let julian_date = ops::julian_day(2015, 7, 12, 0.0);
        let mut cache = SolarPositionCache::new();

        let first = cache.get_or_insert(julian_date);
        let second = cache.get_or_insert(julian_date);

        assert_eq!(first, second);
    }

    #[test]
    fn clearing_forces_recompute() {
        let julian_date = ops::julian_day(2015, 7, 12, 0.0);
        let mut cache = SolarPositionCache::new();

        let first = cache.get_or_insert(julian_date);
        cache.clear();
        let second = cache.get_or_insert(julian_date);

        assert_eq!(first, second);
        assert!(cache.slots.iter().filter(|s| s.is_some()).count() <= 1);
    }

    #[test]
    fn day_constants_cache_hit_returns_identical_value() {
        let julian_date = ops::julian_day(2015, 7, 12, 0.0);
        let mut solar_cache = SolarPositionCache::new();
        let mut cache = DayConstantsCache::new();

        let first = cache.get_or_insert(&mut solar_cache, julian_date);
        let second = cache.get_or_insert(&mut solar_cache, julian_date);

        assert_eq!(first, second);
    }
}
