// AAL
// Copyright (c) 2026 The AAL Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `conv` module provides methods to convert samples between different sample types (formats).

use crate::sample::Sample;

/// `FromSample` implements a conversion from `Sample` type `F` to `Self`.
///
/// This may be a lossy conversion if converting from a sample type of higher precision to one of
/// lower precision. No dithering is applied.
pub trait FromSample<F> {
    fn from_sample(val: F) -> Self;
}

// Notes on sample format converters
//
// There are 4 sample formats, so there are 16 sample format converters: 4 identity, 6 int <-> int,
// and 6 int <-> float converters.
//
// Integer widening shifts the sample up into the most significant bits and zero-fills the rest.
// Integer narrowing arithmetically shifts the sample down and keeps the low-order bits of the
// result, therefore the discarded bits are truncated, never rounded.
//
// Integer to float divides by the full-scale magnitude of the integer format (2^(n-1)). Float to
// integer multiplies by the same magnitude in double precision, rounds half away from zero, then
// saturates to both bounds of the integer format. A NaN sample converts to 0.

macro_rules! impl_convert {
    ($from:ty, $to:ty, $sample:ident, $func:expr) => {
        impl FromSample<$from> for $to {
            #[inline(always)]
            fn from_sample($sample: $from) -> Self {
                $func
            }
        }
    };
}

/// Scale a float sample to fixed-point with a full-scale magnitude of `scale`, and saturate the
/// rounded result to `[min, max]`.
#[inline(always)]
fn f32_to_fixed(s: f32, scale: f64, min: f64, max: f64) -> f64 {
    (f64::from(s) * scale).round().clamp(min, max)
}

// i8 to ...

impl_convert!(i8, i8, s, s); // i8
impl_convert!(i8, i16, s, i16::from(s) << 8); // i16
impl_convert!(i8, i32, s, i32::from(s) << 24); // i32

impl_convert!(i8, f32, s, f32::from(s) / 128.0); // f32

// i16 to ...

impl_convert!(i16, i8, s, (s >> 8) as i8); // i8
impl_convert!(i16, i16, s, s); // i16
impl_convert!(i16, i32, s, i32::from(s) << 16); // i32

impl_convert!(i16, f32, s, f32::from(s) / 32_768.0); // f32

// i32 to ...

impl_convert!(i32, i8, s, (s >> 24) as i8); // i8
impl_convert!(i32, i16, s, (s >> 16) as i16); // i16
impl_convert!(i32, i32, s, s); // i32

impl_convert!(i32, f32, s, (f64::from(s) / 2_147_483_648.0) as f32); // f32

// f32 to ...

impl_convert!(f32, i8, s, f32_to_fixed(s, 128.0, -128.0, 127.0) as i8); // i8
impl_convert!(f32, i16, s, f32_to_fixed(s, 32_768.0, -32_768.0, 32_767.0) as i16); // i16
impl_convert!(
    f32,
    i32,
    s,
    f32_to_fixed(s, 2_147_483_648.0, -2_147_483_648.0, 2_147_483_647.0) as i32
); // i32

impl_convert!(f32, f32, s, s); // f32

/// `IntoSample` implements a conversion from `Self` to `Sample` type `T`.
///
/// This may be a lossy conversion if converting from a sample type of higher precision to one of
/// lower precision. No dithering is applied.
pub trait IntoSample<T> {
    fn into_sample(self) -> T;
}

impl<F, T: FromSample<F>> IntoSample<T> for F {
    #[inline]
    fn into_sample(self) -> T {
        T::from_sample(self)
    }
}

/// A `Sample` that can be converted from every standard sample format.
pub trait ConvertibleSample:
    Sample + FromSample<i8> + FromSample<i16> + FromSample<i32> + FromSample<f32>
{
}

impl<S> ConvertibleSample for S where
    S: Sample + FromSample<i8> + FromSample<i16> + FromSample<i32> + FromSample<f32>
{
}
