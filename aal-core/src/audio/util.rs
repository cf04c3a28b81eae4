// AAL
// Copyright (c) 2026 The AAL Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::debug;

use crate::conv::FromSample;
use crate::errors::{shape_error, Result};
use crate::sample::Sample;

use super::BufferShape;

/// Ensure the shape of a copy destination is identical to the shape of the copy source.
pub fn check_shape(src: BufferShape, dst: BufferShape) -> Result<()> {
    if src != dst {
        debug!("rejected copy from {} into {}", src, dst);
        return shape_error(src, dst);
    }
    Ok(())
}

/// Convert every sample of `src` into the sample at the same index in `dst`.
///
/// Panics if the slices are not the same length.
#[inline(never)]
pub fn convert_slice<Sin, Sout>(src: &[Sin], dst: &mut [Sout])
where
    Sin: Sample,
    Sout: Sample + FromSample<Sin>,
{
    assert!(src.len() == dst.len(), "destination slice does not match number of samples");

    for (d, &s) in dst.iter_mut().zip(src) {
        *d = Sout::from_sample(s);
    }
}
