// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

pub mod cache;
pub mod ops;
pub mod qiblah;
pub mod solar;
pub mod tables;
pub mod unit;
