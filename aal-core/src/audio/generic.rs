// AAL
// Copyright (c) 2026 The AAL Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::errors::{layout_error, Result};
use crate::sample::SampleFormat;

use super::{AudioBuffer, BufferShape, Interleaved, Layout, LayoutKind, NonInterleaved};

/// An owning wrapper for an [`AudioBuffer`] of any standard sample format.
///
/// Calls on this wrapper are dispatched to the underlying, wrapped, buffer and are semantically
/// identical.
#[derive(Clone, Debug)]
pub enum GenericAudioBuffer<L: Layout> {
    /// A signed 8-bit integer buffer.
    S8(AudioBuffer<i8, L>),
    /// A signed 16-bit integer buffer.
    S16(AudioBuffer<i16, L>),
    /// A signed 32-bit integer buffer.
    S32(AudioBuffer<i32, L>),
    /// A single precision (32-bit) floating point buffer.
    F32(AudioBuffer<f32, L>),
}

macro_rules! impl_generic_func {
    ($own:expr, $buf:ident, $expr:expr) => {
        match $own {
            GenericAudioBuffer::S8($buf) => $expr,
            GenericAudioBuffer::S16($buf) => $expr,
            GenericAudioBuffer::S32($buf) => $expr,
            GenericAudioBuffer::F32($buf) => $expr,
        }
    };
}

impl<L: Layout> GenericAudioBuffer<L> {
    /// Instantiate a new, silent, buffer of the given sample format and shape.
    pub fn new(format: SampleFormat, frames: u16, channels: u16) -> Result<Self> {
        let buf = match format {
            SampleFormat::S8 => GenericAudioBuffer::S8(AudioBuffer::new(frames, channels)?),
            SampleFormat::S16 => GenericAudioBuffer::S16(AudioBuffer::new(frames, channels)?),
            SampleFormat::S32 => GenericAudioBuffer::S32(AudioBuffer::new(frames, channels)?),
            SampleFormat::F32 => GenericAudioBuffer::F32(AudioBuffer::new(frames, channels)?),
        };
        Ok(buf)
    }

    /// Get the sample format of the buffer.
    pub fn format(&self) -> SampleFormat {
        match self {
            GenericAudioBuffer::S8(_) => SampleFormat::S8,
            GenericAudioBuffer::S16(_) => SampleFormat::S16,
            GenericAudioBuffer::S32(_) => SampleFormat::S32,
            GenericAudioBuffer::F32(_) => SampleFormat::F32,
        }
    }

    /// Gets the shape of the buffer.
    pub fn shape(&self) -> BufferShape {
        impl_generic_func!(self, buf, buf.shape())
    }

    /// Gets the number of frames in the buffer.
    pub fn frames(&self) -> usize {
        impl_generic_func!(self, buf, buf.frames())
    }

    /// Gets the number of channels in the buffer.
    pub fn channels(&self) -> usize {
        impl_generic_func!(self, buf, buf.channels())
    }

    /// Gets an immutable slice of the raw storage as native-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        impl_generic_func!(self, buf, buf.as_bytes())
    }

    /// Gets a mutable slice of the raw storage as native-endian bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        impl_generic_func!(self, buf, buf.as_bytes_mut())
    }

    /// Overwrites the raw storage with `src`, a block of native-endian sample bytes.
    ///
    /// See [`AudioBuffer::copy_from_bytes`] for full details.
    pub fn copy_from_bytes(&mut self, src: &[u8]) -> Result<()> {
        impl_generic_func!(self, buf, buf.copy_from_bytes(src))
    }

    /// Sets every sample in the buffer to silence.
    pub fn clear(&mut self) {
        impl_generic_func!(self, buf, buf.clear())
    }

    /// Copy every sample of this buffer into `dst`, converting to the sample format of `dst`.
    ///
    /// See [`AudioBuffer::copy_to`] for full details.
    pub fn copy_to(&self, dst: &mut GenericAudioBuffer<L>) -> Result<()> {
        match dst {
            GenericAudioBuffer::S8(dst) => impl_generic_func!(self, src, src.copy_to(dst)),
            GenericAudioBuffer::S16(dst) => impl_generic_func!(self, src, src.copy_to(dst)),
            GenericAudioBuffer::S32(dst) => impl_generic_func!(self, src, src.copy_to(dst)),
            GenericAudioBuffer::F32(dst) => impl_generic_func!(self, src, src.copy_to(dst)),
        }
    }
}

macro_rules! impl_from_audio_buffer {
    ($ty:ty, $var:ident) => {
        impl<L: Layout> From<AudioBuffer<$ty, L>> for GenericAudioBuffer<L> {
            fn from(buf: AudioBuffer<$ty, L>) -> Self {
                GenericAudioBuffer::$var(buf)
            }
        }
    };
}

impl_from_audio_buffer!(i8, S8);
impl_from_audio_buffer!(i16, S16);
impl_from_audio_buffer!(i32, S32);
impl_from_audio_buffer!(f32, F32);

/// An owning wrapper for an audio buffer of any standard sample format and any sample layout.
#[derive(Clone, Debug)]
pub enum AnyAudioBuffer {
    /// A buffer with an interleaved sample layout.
    Interleaved(GenericAudioBuffer<Interleaved>),
    /// A buffer with a non-interleaved sample layout.
    NonInterleaved(GenericAudioBuffer<NonInterleaved>),
}

macro_rules! impl_any_func {
    ($own:expr, $buf:ident, $expr:expr) => {
        match $own {
            AnyAudioBuffer::Interleaved($buf) => $expr,
            AnyAudioBuffer::NonInterleaved($buf) => $expr,
        }
    };
}

/// Instantiate a new, silent, audio buffer with a sample layout and sample format chosen at
/// runtime.
pub fn make_buffer(
    layout: LayoutKind,
    format: SampleFormat,
    frames: u16,
    channels: u16,
) -> Result<AnyAudioBuffer> {
    let buf = match layout {
        LayoutKind::Interleaved => {
            AnyAudioBuffer::Interleaved(GenericAudioBuffer::new(format, frames, channels)?)
        }
        LayoutKind::NonInterleaved => {
            AnyAudioBuffer::NonInterleaved(GenericAudioBuffer::new(format, frames, channels)?)
        }
    };
    Ok(buf)
}

impl AnyAudioBuffer {
    /// Get the sample layout of the buffer.
    pub fn layout(&self) -> LayoutKind {
        match self {
            AnyAudioBuffer::Interleaved(_) => LayoutKind::Interleaved,
            AnyAudioBuffer::NonInterleaved(_) => LayoutKind::NonInterleaved,
        }
    }

    /// Get the sample format of the buffer.
    pub fn format(&self) -> SampleFormat {
        impl_any_func!(self, buf, buf.format())
    }

    /// Gets the shape of the buffer.
    pub fn shape(&self) -> BufferShape {
        impl_any_func!(self, buf, buf.shape())
    }

    /// Gets the number of frames in the buffer.
    pub fn frames(&self) -> usize {
        impl_any_func!(self, buf, buf.frames())
    }

    /// Gets the number of channels in the buffer.
    pub fn channels(&self) -> usize {
        impl_any_func!(self, buf, buf.channels())
    }

    /// Gets an immutable slice of the raw storage as native-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        impl_any_func!(self, buf, buf.as_bytes())
    }

    /// Gets a mutable slice of the raw storage as native-endian bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        impl_any_func!(self, buf, buf.as_bytes_mut())
    }

    /// Overwrites the raw storage with `src`, a block of native-endian sample bytes.
    ///
    /// See [`AudioBuffer::copy_from_bytes`] for full details.
    pub fn copy_from_bytes(&mut self, src: &[u8]) -> Result<()> {
        impl_any_func!(self, buf, buf.copy_from_bytes(src))
    }

    /// Sets every sample in the buffer to silence.
    pub fn clear(&mut self) {
        impl_any_func!(self, buf, buf.clear())
    }

    /// Copy every sample of this buffer into `dst`, converting to the sample format of `dst`.
    ///
    /// Both buffers must have the same layout and shape. On error, `dst` is not modified.
    pub fn copy_to(&self, dst: &mut AnyAudioBuffer) -> Result<()> {
        match (self, dst) {
            (AnyAudioBuffer::Interleaved(src), AnyAudioBuffer::Interleaved(dst)) => {
                src.copy_to(dst)
            }
            (AnyAudioBuffer::NonInterleaved(src), AnyAudioBuffer::NonInterleaved(dst)) => {
                src.copy_to(dst)
            }
            (src, dst) => layout_error(src.layout(), dst.layout()),
        }
    }
}

impl From<GenericAudioBuffer<Interleaved>> for AnyAudioBuffer {
    fn from(buf: GenericAudioBuffer<Interleaved>) -> Self {
        AnyAudioBuffer::Interleaved(buf)
    }
}

impl From<GenericAudioBuffer<NonInterleaved>> for AnyAudioBuffer {
    fn from(buf: GenericAudioBuffer<NonInterleaved>) -> Self {
        AnyAudioBuffer::NonInterleaved(buf)
    }
}
