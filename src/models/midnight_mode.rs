// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the midpoint of the night is defined. Present as an enum (rather than a
/// unit type) so a second convention can be added later without a breaking
/// change to [`crate::models::parameters::Parameters`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum MidnightMode {
    /// Midnight is the midpoint between sunset and the next day's fajr.
    #[default]
    Standard,
}
