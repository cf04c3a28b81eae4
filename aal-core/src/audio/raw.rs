// AAL
// Copyright (c) 2026 The AAL Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use log::warn;

use crate::errors::{Error, Result};
use crate::sample::Sample;

/// A fixed-capacity, contiguous block of samples.
///
/// The storage is allocated once, when the buffer is instantiated, and is never resized. It is
/// released when the buffer is dropped.
#[derive(Clone)]
pub struct RawBuffer<S: Sample> {
    buf: Box<[S]>,
}

impl<S: Sample> RawBuffer<S> {
    /// Instantiate a new `RawBuffer` of `capacity` silent samples.
    pub fn new(capacity: usize) -> Result<Self> {
        let bytes = capacity.saturating_mul(std::mem::size_of::<S>());

        let mut buf = Vec::new();

        if buf.try_reserve_exact(capacity).is_err() {
            warn!("failed to allocate {} bytes of {} samples", bytes, S::FORMAT);
            return Err(Error::AllocationFailed { bytes });
        }

        buf.resize(capacity, S::MID);

        Ok(RawBuffer { buf: buf.into_boxed_slice() })
    }

    /// Gets the number of samples the buffer stores.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Gets an immutable slice of all samples.
    pub fn as_slice(&self) -> &[S] {
        &self.buf
    }

    /// Gets a mutable slice of all samples.
    pub fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.buf
    }

    /// Gets an immutable slice of all samples as native-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buf)
    }

    /// Gets a mutable slice of all samples as native-endian bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.buf)
    }
}

impl<S: Sample> fmt::Debug for RawBuffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::RawBuffer;
    use crate::errors::Error;

    #[test]
    fn verify_new_is_silent() {
        let buf = RawBuffer::<i16>::new(16).unwrap();
        assert_eq!(buf.capacity(), 16);
        assert!(buf.as_slice().iter().all(|&s| s == 0));

        let buf = RawBuffer::<f32>::new(0).unwrap();
        assert_eq!(buf.capacity(), 0);
        assert!(buf.as_bytes().is_empty());
    }

    #[test]
    fn verify_byte_view() {
        let mut buf = RawBuffer::<i32>::new(2).unwrap();
        assert_eq!(buf.as_bytes().len(), 8);

        buf.as_bytes_mut().copy_from_slice(&[1, 0, 0, 0, 2, 0, 0, 0]);
        buf.as_mut_slice().iter_mut().for_each(|s| *s = i32::from_le(*s));
        assert_eq!(buf.as_slice(), &[1, 2]);
    }

    #[test]
    fn verify_allocation_failure_is_reported() {
        let err = RawBuffer::<i32>::new(usize::MAX / 2).unwrap_err();
        assert!(matches!(err, Error::AllocationFailed { .. }));
    }

    #[test]
    fn verify_debug_lists_samples() {
        let mut buf = RawBuffer::<i8>::new(3).unwrap();
        buf.as_mut_slice().copy_from_slice(&[1, -2, 3]);
        assert_eq!(format!("{:?}", buf), "[1, -2, 3]");
    }
}
