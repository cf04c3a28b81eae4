// AAL
// Copyright (c) 2026 The AAL Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `errors` module defines the common error type.

use std::error;
use std::fmt;
use std::result;

use crate::audio::{BufferShape, LayoutKind};

/// `Error` provides an enumeration of all possible errors reported by AAL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source and destination buffers of a copy do not have the same number of frames and
    /// channels. Nothing was written to the destination.
    ShapeMismatch { expected: BufferShape, actual: BufferShape },
    /// The source and destination buffers of a copy do not have the same sample layout. Nothing
    /// was written to the destination.
    LayoutMismatch { expected: LayoutKind, actual: LayoutKind },
    /// The number of samples or bytes provided does not match the size of the destination.
    /// Nothing was written to the destination.
    LengthMismatch { expected: usize, actual: usize },
    /// A channel index is not less than the number of channels in the buffer.
    ChannelOutOfRange { index: usize, channels: usize },
    /// The storage for a buffer could not be allocated.
    AllocationFailed { bytes: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::ShapeMismatch { expected, actual } => {
                write!(f, "buffer shape mismatch: expected {}, got {}", expected, actual)
            }
            Error::LayoutMismatch { expected, actual } => {
                write!(f, "buffer layout mismatch: expected {}, got {}", expected, actual)
            }
            Error::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {}, got {}", expected, actual)
            }
            Error::ChannelOutOfRange { index, channels } => {
                write!(f, "channel index {} is out of range for {} channels", index, channels)
            }
            Error::AllocationFailed { bytes } => {
                write!(f, "failed to allocate {} bytes of sample storage", bytes)
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

/// Convenience function to create a shape mismatch error.
pub fn shape_error<T>(expected: BufferShape, actual: BufferShape) -> Result<T> {
    Err(Error::ShapeMismatch { expected, actual })
}

/// Convenience function to create a layout mismatch error.
pub fn layout_error<T>(expected: LayoutKind, actual: LayoutKind) -> Result<T> {
    Err(Error::LayoutMismatch { expected, actual })
}

/// Convenience function to create a length mismatch error.
pub fn length_error<T>(expected: usize, actual: usize) -> Result<T> {
    Err(Error::LengthMismatch { expected, actual })
}

/// Convenience function to create a channel out-of-range error.
pub fn channel_error<T>(index: usize, channels: usize) -> Result<T> {
    Err(Error::ChannelOutOfRange { index, channels })
}
