// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy for resolving prayer times at latitudes where the sun neither rises
/// nor sets for extended stretches of the year. Only [`PolarRule::Unresolved`] is
/// implemented by the compute kernel; the other two name external conventions
/// (nearest-city-with-a-defined-day and nearest-day-with-a-defined-value) that a
/// host application may apply on top of an `Undefined` result, but the kernel
/// itself treats them identically to `Unresolved`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum PolarRule {
    /// No special handling; an undefined fajr/isha is reported as undefined
    /// (subject to the ordinary `high_lat_rule` fallback, if any).
    #[default]
    Unresolved,

    /// Reserved for a future "nearest qualifying latitude" convention.
    AqrabBalad,

    /// Reserved for a future "nearest qualifying day of year" convention.
    AqrabYaum,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unresolved() {
        assert_eq!(PolarRule::default(), PolarRule::Unresolved);
    }
}
