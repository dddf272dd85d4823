// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

pub mod adjustments;
pub mod diagnostics;
pub mod high_altitude_rule;
pub mod madhab;
pub mod method;
pub mod midnight_mode;
pub mod parameters;
pub mod polar_rule;
pub mod prayer;
pub mod rounding;
pub mod shafaq;
