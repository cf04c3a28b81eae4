// AAL
// Copyright (c) 2026 The AAL Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `sample` module defines the audio sample trait and the standard sample formats.
//!
//! Only four sample formats are supported: signed 8, 16, and 32-bit integers, and single precision
//! floating point. There is no 24-bit format. 24-bit audio must be carried in a 32-bit integer.

use std::fmt;

/// An enumeration of standard sample formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// Signed 8-bit integer.
    S8,
    /// Signed 16-bit integer.
    S16,
    /// Signed 32-bit integer.
    S32,
    /// Single precision (32-bit) floating point.
    F32,
}

impl SampleFormat {
    /// Gets the width of a sample in bits.
    pub fn bits(&self) -> u32 {
        match self {
            SampleFormat::S8 => 8,
            SampleFormat::S16 => 16,
            SampleFormat::S32 | SampleFormat::F32 => 32,
        }
    }

    /// Gets the size of a sample in bytes.
    pub fn bytes(&self) -> usize {
        self.bits() as usize / 8
    }

    /// Gets the full-scale magnitude used to normalize an integer sample of this format to the
    /// floating point range [-1.0, 1.0). Returns `None` for floating point formats.
    pub fn full_scale(&self) -> Option<f64> {
        match self {
            SampleFormat::F32 => None,
            _ => Some(f64::from(1u32 << (self.bits() - 1))),
        }
    }

    /// Returns `true` if the sample format is a floating point format.
    pub fn is_float(&self) -> bool {
        matches!(self, SampleFormat::F32)
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleFormat::S8 => "s8",
            SampleFormat::S16 => "s16",
            SampleFormat::S32 => "s32",
            SampleFormat::F32 => "f32",
        };
        f.write_str(name)
    }
}

/// The sample trait defines the mandatory operations and attributes an audio sample data type must
/// implement and provide.
///
/// All samples are plain-old-data so that buffer storage may be viewed as raw bytes.
pub trait Sample:
    Copy
    + Clone
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + Default
    + PartialOrd
    + PartialEq
    + Sized
    + fmt::Debug
    + bytemuck::Pod
{
    /// A unique enum value representing the sample format. This constant may be used to dynamically
    /// choose how to process the sample at runtime.
    const FORMAT: SampleFormat;

    /// The mid-point value between the maximum and minimum sample value. If a sample is set to this
    /// value it is silent.
    const MID: Self;
}

impl Sample for i8 {
    const FORMAT: SampleFormat = SampleFormat::S8;
    const MID: i8 = 0;
}

impl Sample for i16 {
    const FORMAT: SampleFormat = SampleFormat::S16;
    const MID: i16 = 0;
}

impl Sample for i32 {
    const FORMAT: SampleFormat = SampleFormat::S32;
    const MID: i32 = 0;
}

impl Sample for f32 {
    const FORMAT: SampleFormat = SampleFormat::F32;
    const MID: f32 = 0.0;
}
