// AAL
// Copyright (c) 2026 The AAL Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::marker::PhantomData;

use log::trace;

use crate::conv::FromSample;
use crate::errors::{channel_error, length_error, Result};
use crate::sample::Sample;

use super::util::{check_shape, convert_slice};
use super::{BufferShape, Channel, ChannelMut, Channels, Interleaved, Layout, NonInterleaved};
use super::{LayoutKind, RawBuffer};

/// A fixed-size container for multi-channel audio of a known sample format and sample layout.
///
/// An `AudioBuffer` is characterized by a number of frames and a number of channels, both fixed at
/// instantiation. It owns a single contiguous block of `frames × channels` samples ordered
/// according to the layout `L`.
///
/// The samples may be accessed in two equivalent ways:
///
///   * As raw storage, via [`AudioBuffer::samples`] and friends, in the buffer's own layout. This
///     is the interface for bulk copies from or to a device driver.
///   * Per channel, via [`AudioBuffer::channel`] and [`AudioBuffer::channel_mut`], where frame `i`
///     of a channel refers directly to the storage slot selected by the layout.
///
/// ## Realtime Safety
///
/// `AudioBuffer` never allocates after instantiation, except in [`AudioBuffer::make_equivalent`]
/// and [`AudioBuffer::convert`].
#[derive(Clone)]
pub struct AudioBuffer<S: Sample, L: Layout> {
    raw: RawBuffer<S>,
    shape: BufferShape,
    layout: PhantomData<L>,
}

/// An [`AudioBuffer`] with an interleaved sample layout.
pub type InterleavedBuffer<S> = AudioBuffer<S, Interleaved>;

/// An [`AudioBuffer`] with a non-interleaved (planar) sample layout.
pub type NonInterleavedBuffer<S> = AudioBuffer<S, NonInterleaved>;

impl<S: Sample, L: Layout> AudioBuffer<S, L> {
    /// Instantiate a new, silent, `AudioBuffer` of `frames` frames and `channels` channels.
    pub fn new(frames: u16, channels: u16) -> Result<Self> {
        Self::with_shape(BufferShape::new(frames, channels))
    }

    /// Instantiate a new, silent, `AudioBuffer` with the provided shape.
    pub fn with_shape(shape: BufferShape) -> Result<Self> {
        let raw = RawBuffer::new(shape.samples())?;

        trace!("allocated {} {} buffer of {}", L::KIND, S::FORMAT, shape);

        Ok(AudioBuffer { raw, shape, layout: PhantomData })
    }

    /// Gets the shape of the buffer.
    pub fn shape(&self) -> BufferShape {
        self.shape
    }

    /// Gets the number of frames in the buffer.
    pub fn frames(&self) -> usize {
        usize::from(self.shape.frames)
    }

    /// Gets the number of channels in the buffer.
    pub fn channels(&self) -> usize {
        usize::from(self.shape.channels)
    }

    /// Gets the sample layout of the buffer.
    pub fn layout(&self) -> LayoutKind {
        L::KIND
    }

    /// Returns `true` if the buffer stores no samples.
    pub fn is_empty(&self) -> bool {
        self.raw.capacity() == 0
    }

    /// Gets an immutable slice of the raw storage, in the buffer's layout.
    pub fn samples(&self) -> &[S] {
        self.raw.as_slice()
    }

    /// Gets a mutable slice of the raw storage, in the buffer's layout.
    pub fn samples_mut(&mut self) -> &mut [S] {
        self.raw.as_mut_slice()
    }

    /// Gets an immutable slice of the raw storage as native-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.raw.as_bytes()
    }

    /// Gets a mutable slice of the raw storage as native-endian bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.raw.as_bytes_mut()
    }

    /// Overwrites the raw storage with `src`.
    ///
    /// `src` must contain exactly `frames × channels` samples ordered in the buffer's layout. No
    /// reordering is performed.
    pub fn copy_from_samples(&mut self, src: &[S]) -> Result<()> {
        let dst = self.raw.as_mut_slice();

        if dst.len() != src.len() {
            return length_error(dst.len(), src.len());
        }

        dst.copy_from_slice(src);
        Ok(())
    }

    /// Overwrites the raw storage with `src`, a block of native-endian sample bytes.
    ///
    /// `src` must contain exactly `frames × channels` samples of the buffer's sample format,
    /// ordered in the buffer's layout. No reordering or conversion is performed.
    pub fn copy_from_bytes(&mut self, src: &[u8]) -> Result<()> {
        let dst = self.raw.as_bytes_mut();

        if dst.len() != src.len() {
            return length_error(dst.len(), src.len());
        }

        dst.copy_from_slice(src);
        Ok(())
    }

    /// Gets an immutable view of the channel at index `ch`.
    pub fn channel(&self, ch: usize) -> Result<Channel<'_, S, L>> {
        if ch >= self.channels() {
            return channel_error(ch, self.channels());
        }

        Ok(Channel::new(self.raw.as_slice(), self.frames(), self.channels(), ch))
    }

    /// Gets a mutable view of the channel at index `ch`.
    pub fn channel_mut(&mut self, ch: usize) -> Result<ChannelMut<'_, S, L>> {
        let frames = self.frames();
        let channels = self.channels();

        if ch >= channels {
            return channel_error(ch, channels);
        }

        Ok(ChannelMut::new(self.raw.as_mut_slice(), frames, channels, ch))
    }

    /// Gets an iterator over immutable views of every channel, in channel order.
    pub fn iter_channels(&self) -> Channels<'_, S, L> {
        Channels::new(self.raw.as_slice(), self.frames(), self.channels())
    }

    /// Sets every sample in the buffer to `sample`.
    pub fn fill(&mut self, sample: S) {
        self.raw.as_mut_slice().fill(sample);
    }

    /// Sets every sample in the buffer to silence.
    pub fn clear(&mut self) {
        self.fill(S::MID);
    }

    /// Copy every sample of this buffer into `dst`, converting to the sample format of `dst`.
    ///
    /// The buffers must have the same number of frames and channels. Samples are converted in raw
    /// storage order, therefore the layout of both buffers is the same `L`. If both buffers have
    /// the same sample format the copy is exact.
    ///
    /// On error, `dst` is not modified.
    pub fn copy_to<Sout>(&self, dst: &mut AudioBuffer<Sout, L>) -> Result<()>
    where
        Sout: Sample + FromSample<S>,
    {
        check_shape(self.shape, dst.shape)?;

        convert_slice(self.raw.as_slice(), dst.raw.as_mut_slice());
        Ok(())
    }

    /// Instantiate a new, silent, `AudioBuffer` with the same shape and layout as this buffer, but
    /// with a different sample format.
    pub fn make_equivalent<E: Sample>(&self) -> Result<AudioBuffer<E, L>> {
        AudioBuffer::with_shape(self.shape)
    }

    /// Instantiate a new `AudioBuffer` with the same shape and layout as this buffer, containing
    /// the samples of this buffer converted to the sample format `E`.
    pub fn convert<E>(&self) -> Result<AudioBuffer<E, L>>
    where
        E: Sample + FromSample<S>,
    {
        let mut dst = self.make_equivalent::<E>()?;
        self.copy_to(&mut dst)?;
        Ok(dst)
    }
}

impl<S: Sample, L: Layout> fmt::Debug for AudioBuffer<S, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioBuffer")
            .field("format", &S::FORMAT)
            .field("layout", &L::KIND)
            .field("frames", &self.shape.frames)
            .field("channels", &self.shape.channels)
            .field("samples", &self.raw)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{AudioBuffer, InterleavedBuffer, NonInterleavedBuffer};
    use crate::audio::{BufferShape, Interleaved, Layout, NonInterleaved};
    use crate::errors::Error;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn random_buffer<L: Layout>(
        rng: &mut SmallRng,
        frames: u16,
        channels: u16,
    ) -> AudioBuffer<i32, L> {
        let mut buf = AudioBuffer::<i32, L>::new(frames, channels).unwrap();
        buf.samples_mut().iter_mut().for_each(|s| *s = rng.random());
        buf
    }

    #[test]
    fn verify_new_buffer() {
        let buf = InterleavedBuffer::<f32>::new(4, 2).unwrap();

        assert_eq!(buf.frames(), 4);
        assert_eq!(buf.channels(), 2);
        assert_eq!(buf.shape(), BufferShape::new(4, 2));
        assert_eq!(buf.samples().len(), 8);
        assert_eq!(buf.as_bytes().len(), 32);
        assert!(buf.samples().iter().all(|&s| s == 0.0));
        assert_eq!(buf.iter_channels().len(), 2);
    }

    #[test]
    fn verify_channel_index_is_checked() {
        let mut buf = NonInterleavedBuffer::<i16>::new(4, 2).unwrap();

        assert!(buf.channel(1).is_ok());
        assert_eq!(buf.channel(2).err(), Some(Error::ChannelOutOfRange { index: 2, channels: 2 }));
        assert!(buf.channel_mut(2).is_err());

        let empty = NonInterleavedBuffer::<i16>::new(4, 0).unwrap();
        assert!(empty.is_empty());
        assert!(empty.channel(0).is_err());
    }

    #[test]
    fn verify_channel_and_raw_views_agree() {
        let mut buf = NonInterleavedBuffer::<i8>::new(3, 2).unwrap();
        buf.copy_from_samples(&[1, 2, 3, 4, 5, 6]).unwrap();

        assert_eq!(buf.channel(0).unwrap().to_vec(), [1, 2, 3]);
        assert_eq!(buf.channel(1).unwrap().to_vec(), [4, 5, 6]);

        buf.channel_mut(1).unwrap()[0] = -4;
        assert_eq!(buf.samples(), &[1, 2, 3, -4, 5, 6]);

        let mut buf = InterleavedBuffer::<i8>::new(3, 2).unwrap();
        buf.copy_from_samples(&[1, 2, 3, 4, 5, 6]).unwrap();

        assert_eq!(buf.channel(0).unwrap().to_vec(), [1, 3, 5]);
        assert_eq!(buf.channel(1).unwrap().to_vec(), [2, 4, 6]);

        buf.channel_mut(0).unwrap()[2] = -5;
        assert_eq!(buf.samples(), &[1, 2, 3, 4, -5, 6]);
    }

    #[test]
    fn verify_raw_import_checks_length() {
        let mut buf = InterleavedBuffer::<i16>::new(2, 2).unwrap();

        assert_eq!(
            buf.copy_from_samples(&[1, 2, 3]),
            Err(Error::LengthMismatch { expected: 4, actual: 3 })
        );
        assert_eq!(
            buf.copy_from_bytes(&[0; 9]),
            Err(Error::LengthMismatch { expected: 8, actual: 9 })
        );
        assert!(buf.samples().iter().all(|&s| s == 0));

        let block: Vec<u8> = [7i16, -7, 300, -300].iter().flat_map(|s| s.to_ne_bytes()).collect();
        buf.copy_from_bytes(&block).unwrap();
        assert_eq!(buf.samples(), &[7, -7, 300, -300]);
        assert_eq!(buf.as_bytes(), &block[..]);
    }

    #[test]
    fn verify_copy_to_same_type_is_exact() {
        let mut rng = SmallRng::seed_from_u64(0xc0ff_ee00);

        let src = random_buffer::<Interleaved>(&mut rng, 64, 3);
        let mut dst = InterleavedBuffer::<i32>::new(64, 3).unwrap();
        src.copy_to(&mut dst).unwrap();
        assert_eq!(src.samples(), dst.samples());

        let src = random_buffer::<NonInterleaved>(&mut rng, 17, 5);
        let mut dst = NonInterleavedBuffer::<i32>::new(17, 5).unwrap();
        src.copy_to(&mut dst).unwrap();
        assert_eq!(src.samples(), dst.samples());
    }

    #[test]
    fn verify_copy_to_converts_in_storage_order() {
        let mut src = NonInterleavedBuffer::<i16>::new(2, 2).unwrap();
        src.copy_from_samples(&[i16::MIN, -16_384, 0, i16::MAX]).unwrap();

        let mut dst = NonInterleavedBuffer::<f32>::new(2, 2).unwrap();
        src.copy_to(&mut dst).unwrap();
        assert_eq!(dst.samples(), &[-1.0, -0.5, 0.0, 32_767.0 / 32_768.0]);

        let wide = src.convert::<i32>().unwrap();
        assert_eq!(wide.samples(), &[i32::MIN, -16_384 << 16, 0, i32::from(i16::MAX) << 16]);
        assert_eq!(wide.convert::<i16>().unwrap().samples(), src.samples());
    }

    #[test]
    fn verify_copy_to_rejects_shape_mismatch() {
        let mut src = InterleavedBuffer::<f32>::new(4, 2).unwrap();
        src.fill(0.25);

        let mut dst = InterleavedBuffer::<i16>::new(4, 3).unwrap();
        dst.fill(42);

        assert_eq!(
            src.copy_to(&mut dst),
            Err(Error::ShapeMismatch {
                expected: BufferShape::new(4, 2),
                actual: BufferShape::new(4, 3),
            })
        );
        assert!(dst.samples().iter().all(|&s| s == 42));

        let mut dst = InterleavedBuffer::<i16>::new(5, 2).unwrap();
        assert!(src.copy_to(&mut dst).is_err());
        assert!(dst.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn verify_make_equivalent_is_silent() {
        let mut src = NonInterleavedBuffer::<i8>::new(8, 2).unwrap();
        src.fill(100);

        let eq = src.make_equivalent::<f32>().unwrap();
        assert_eq!(eq.shape(), src.shape());
        assert!(eq.samples().iter().all(|&s| s == 0.0));

        src.clear();
        assert!(src.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn verify_debug_output() {
        let mut buf = InterleavedBuffer::<i8>::new(2, 1).unwrap();
        buf.copy_from_samples(&[3, -3]).unwrap();

        assert_eq!(
            format!("{:?}", buf),
            "AudioBuffer { format: S8, layout: Interleaved, frames: 2, channels: 1, samples: [3, -3] }"
        );
    }
}
