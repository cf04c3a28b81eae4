// AAL
// Copyright (c) 2026 The AAL Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use crate::errors::{length_error, Result};
use crate::sample::Sample;

use super::Layout;

/// An immutable view of one channel of an audio buffer.
///
/// A channel view does not own or copy any samples. Indexing a channel by frame resolves, via the
/// buffer's layout, to the storage slot of the buffer holding that sample.
#[derive(Copy, Clone)]
pub struct Channel<'a, S: Sample, L: Layout> {
    samples: &'a [S],
    frames: usize,
    channels: usize,
    index: usize,
    layout: PhantomData<L>,
}

impl<'a, S: Sample, L: Layout> Channel<'a, S, L> {
    pub(super) fn new(samples: &'a [S], frames: usize, channels: usize, index: usize) -> Self {
        debug_assert!(index < channels);
        debug_assert!(samples.len() == frames * channels);
        Channel { samples, frames, channels, index, layout: PhantomData }
    }

    /// Gets the index of this channel in its buffer.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Gets the number of frames (samples) in this channel.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Returns `true` if this channel has no samples.
    pub fn is_empty(&self) -> bool {
        self.frames == 0
    }

    /// Gets an immutable reference to the sample at `frame`, or `None` if `frame` is out of
    /// range.
    pub fn get(&self, frame: usize) -> Option<&'a S> {
        let samples: &'a [S] = self.samples;

        if frame < self.frames {
            Some(&samples[L::offset(self.frames, self.channels, self.index, frame)])
        }
        else {
            None
        }
    }

    /// Gets an iterator over the samples of this channel in frame order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a S> + 'a {
        let samples: &'a [S] = self.samples;
        let (start, stride) = L::channel_stride(self.frames, self.channels, self.index);
        samples.get(start..).unwrap_or(&[]).iter().step_by(stride).take(self.frames)
    }

    /// Copies the samples of this channel, in frame order, into `dst`.
    ///
    /// The length of `dst` must equal the number of frames.
    pub fn copy_to_slice(&self, dst: &mut [S]) -> Result<()> {
        if dst.len() != self.frames {
            return length_error(self.frames, dst.len());
        }

        for (d, &s) in dst.iter_mut().zip(self.iter()) {
            *d = s;
        }
        Ok(())
    }

    /// Collects the samples of this channel, in frame order, into a vector.
    pub fn to_vec(&self) -> Vec<S> {
        self.iter().copied().collect()
    }
}

impl<S: Sample, L: Layout> Index<usize> for Channel<'_, S, L> {
    type Output = S;

    fn index(&self, frame: usize) -> &Self::Output {
        match self.get(frame) {
            Some(sample) => sample,
            None => panic_frame_out_of_range(frame, self.frames),
        }
    }
}

/// A mutable view of one channel of an audio buffer.
///
/// While a mutable channel view is alive, it is the only way to access the buffer.
pub struct ChannelMut<'a, S: Sample, L: Layout> {
    samples: &'a mut [S],
    frames: usize,
    channels: usize,
    index: usize,
    layout: PhantomData<L>,
}

impl<'a, S: Sample, L: Layout> ChannelMut<'a, S, L> {
    pub(super) fn new(samples: &'a mut [S], frames: usize, channels: usize, index: usize) -> Self {
        debug_assert!(index < channels);
        debug_assert!(samples.len() == frames * channels);
        ChannelMut { samples, frames, channels, index, layout: PhantomData }
    }

    /// Gets the index of this channel in its buffer.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Gets the number of frames (samples) in this channel.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Returns `true` if this channel has no samples.
    pub fn is_empty(&self) -> bool {
        self.frames == 0
    }

    /// Reborrow this view as an immutable channel view.
    pub fn as_channel(&self) -> Channel<'_, S, L> {
        Channel::new(&*self.samples, self.frames, self.channels, self.index)
    }

    /// Gets an immutable reference to the sample at `frame`, or `None` if `frame` is out of
    /// range.
    pub fn get(&self, frame: usize) -> Option<&S> {
        if frame < self.frames {
            Some(&self.samples[L::offset(self.frames, self.channels, self.index, frame)])
        }
        else {
            None
        }
    }

    /// Gets a mutable reference to the sample at `frame`, or `None` if `frame` is out of range.
    pub fn get_mut(&mut self, frame: usize) -> Option<&mut S> {
        if frame < self.frames {
            Some(&mut self.samples[L::offset(self.frames, self.channels, self.index, frame)])
        }
        else {
            None
        }
    }

    /// Gets an iterator over the samples of this channel in frame order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &S> + '_ {
        let (start, stride) = L::channel_stride(self.frames, self.channels, self.index);
        self.samples.get(start..).unwrap_or(&[]).iter().step_by(stride).take(self.frames)
    }

    /// Gets a mutable iterator over the samples of this channel in frame order.
    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut S> + '_ {
        let (start, stride) = L::channel_stride(self.frames, self.channels, self.index);
        let frames = self.frames;
        self.samples.get_mut(start..).unwrap_or(&mut []).iter_mut().step_by(stride).take(frames)
    }

    /// Copies `src`, in frame order, into the samples of this channel.
    ///
    /// The length of `src` must equal the number of frames.
    pub fn copy_from_slice(&mut self, src: &[S]) -> Result<()> {
        if src.len() != self.frames {
            return length_error(self.frames, src.len());
        }

        for (d, &s) in self.iter_mut().zip(src) {
            *d = s;
        }
        Ok(())
    }

    /// Sets every sample of this channel to `sample`.
    pub fn fill(&mut self, sample: S) {
        self.iter_mut().for_each(|s| *s = sample);
    }

    /// Sets every sample of this channel to silence.
    pub fn clear(&mut self) {
        self.fill(S::MID);
    }

    /// Collects the samples of this channel, in frame order, into a vector.
    pub fn to_vec(&self) -> Vec<S> {
        self.iter().copied().collect()
    }
}

impl<S: Sample, L: Layout> Index<usize> for ChannelMut<'_, S, L> {
    type Output = S;

    fn index(&self, frame: usize) -> &Self::Output {
        match self.get(frame) {
            Some(sample) => sample,
            None => panic_frame_out_of_range(frame, self.frames),
        }
    }
}

impl<S: Sample, L: Layout> IndexMut<usize> for ChannelMut<'_, S, L> {
    fn index_mut(&mut self, frame: usize) -> &mut Self::Output {
        let frames = self.frames;

        match self.get_mut(frame) {
            Some(sample) => sample,
            None => panic_frame_out_of_range(frame, frames),
        }
    }
}

/// Iterator over the immutable channel views of an audio buffer, in channel order.
pub struct Channels<'a, S: Sample, L: Layout> {
    samples: &'a [S],
    frames: usize,
    channels: usize,
    next: usize,
    layout: PhantomData<L>,
}

impl<'a, S: Sample, L: Layout> Channels<'a, S, L> {
    pub(super) fn new(samples: &'a [S], frames: usize, channels: usize) -> Self {
        Channels { samples, frames, channels, next: 0, layout: PhantomData }
    }
}

impl<'a, S: Sample, L: Layout> Iterator for Channels<'a, S, L> {
    type Item = Channel<'a, S, L>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.channels {
            let channel = Channel::new(self.samples, self.frames, self.channels, self.next);
            self.next += 1;
            Some(channel)
        }
        else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.channels - self.next;
        (remaining, Some(remaining))
    }
}

impl<S: Sample, L: Layout> ExactSizeIterator for Channels<'_, S, L> {}

#[cold]
#[inline(never)]
fn panic_frame_out_of_range(frame: usize, frames: usize) -> ! {
    panic!("frame index {} is out of range for a channel of {} frames", frame, frames)
}
