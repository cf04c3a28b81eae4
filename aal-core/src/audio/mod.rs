// AAL
// Copyright (c) 2026 The AAL Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `audio` module provides primitives for working with multi-channel audio generically across
//! sample formats and sample layouts.
//!
//! ## Sample Layouts
//!
//! An audio buffer stores `frames × channels` samples in a single contiguous block. The order of
//! samples within that block is the buffer's layout:
//!
//!   * [`Interleaved`]: all samples of a frame are stored together, in channel order, before the
//!     samples of the next frame. The sample of channel `c` at frame `i` is stored at offset
//!     `i × channels + c`.
//!   * [`NonInterleaved`]: all frames of a channel are stored together, in frame order, before the
//!     frames of the next channel. The sample of channel `c` at frame `i` is stored at offset
//!     `c × frames + i`.
//!
//! The layout of a typed [`AudioBuffer`] is part of its type, therefore buffers of different
//! layouts can never be mixed in a copy.
use std::fmt;

mod buf;
mod channels;
mod generic;
mod raw;
mod util;

pub use buf::*;
pub use channels::*;
pub use generic::*;
pub use raw::*;

/// The number of frames and channels of an audio buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BufferShape {
    /// The number of frames.
    pub frames: u16,
    /// The number of channels.
    pub channels: u16,
}

impl BufferShape {
    pub fn new(frames: u16, channels: u16) -> Self {
        BufferShape { frames, channels }
    }

    /// Gets the total number of samples, `frames × channels`.
    pub fn samples(&self) -> usize {
        usize::from(self.frames) * usize::from(self.channels)
    }
}

impl fmt::Display for BufferShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames x {} channels", self.frames, self.channels)
    }
}

/// A runtime tag naming a sample layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Frame-major order. See [`Interleaved`].
    Interleaved,
    /// Channel-major (planar) order. See [`NonInterleaved`].
    NonInterleaved,
}

impl LayoutKind {
    /// Get the storage offset of the sample of channel `ch` at frame `frame` in a buffer of
    /// `frames` frames and `channels` channels.
    #[inline]
    pub fn offset(self, frames: usize, channels: usize, ch: usize, frame: usize) -> usize {
        match self {
            LayoutKind::Interleaved => Interleaved::offset(frames, channels, ch, frame),
            LayoutKind::NonInterleaved => NonInterleaved::offset(frames, channels, ch, frame),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutKind::Interleaved => f.write_str("interleaved"),
            LayoutKind::NonInterleaved => f.write_str("non-interleaved"),
        }
    }
}

/// A sample layout maps a (channel, frame) pair to an offset into the flat storage of a buffer.
///
/// For any buffer of `F` frames and `C` channels, the mapping must be a bijection from
/// `{0..C} × {0..F}` onto `{0..F × C}`. The samples of one channel must be evenly spaced, as
/// described by [`Layout::channel_stride`].
pub trait Layout: Copy + Clone + Default + fmt::Debug + 'static {
    /// The runtime tag for this layout.
    const KIND: LayoutKind;

    /// Get the storage offset of the sample of channel `ch` at frame `frame`.
    fn offset(frames: usize, channels: usize, ch: usize, frame: usize) -> usize;

    /// Get the storage offset of the first sample of channel `ch`, and the distance between
    /// consecutive samples of that channel.
    fn channel_stride(frames: usize, channels: usize, ch: usize) -> (usize, usize);
}

/// Frame-major sample layout, e.g., `LRLRLRLR` for 4 frames of stereo.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Interleaved;

impl Layout for Interleaved {
    const KIND: LayoutKind = LayoutKind::Interleaved;

    #[inline(always)]
    fn offset(_frames: usize, channels: usize, ch: usize, frame: usize) -> usize {
        frame * channels + ch
    }

    #[inline(always)]
    fn channel_stride(_frames: usize, channels: usize, ch: usize) -> (usize, usize) {
        (ch, channels)
    }
}

/// Channel-major (planar) sample layout, e.g., `LLLLRRRR` for 4 frames of stereo.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NonInterleaved;

impl Layout for NonInterleaved {
    const KIND: LayoutKind = LayoutKind::NonInterleaved;

    #[inline(always)]
    fn offset(frames: usize, _channels: usize, ch: usize, frame: usize) -> usize {
        ch * frames + frame
    }

    #[inline(always)]
    fn channel_stride(frames: usize, _channels: usize, ch: usize) -> (usize, usize) {
        (ch * frames, 1)
    }
}
