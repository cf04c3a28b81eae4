// AAL
// Copyright (c) 2026 The AAL Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use aal_core::audio::{
    make_buffer, AnyAudioBuffer, BufferShape, GenericAudioBuffer, InterleavedBuffer, LayoutKind,
    NonInterleavedBuffer,
};
use aal_core::errors::{Error, Result};
use aal_core::sample::SampleFormat;

/// A device delivering a 4 frame stereo block with the left channel silent and the right channel
/// at full scale.
fn device_block() -> Result<InterleavedBuffer<f32>> {
    let mut device = InterleavedBuffer::<f32>::new(4, 2)?;
    device.copy_from_samples(&[0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0])?;
    Ok(device)
}

#[test]
fn device_block_reads_per_channel() -> Result<()> {
    let device = device_block()?;

    assert_eq!(device.channel(0)?.to_vec(), vec![0.0; 4]);
    assert_eq!(device.channel(1)?.to_vec(), vec![1.0; 4]);
    Ok(())
}

#[test]
fn device_block_converts_and_edits_in_place() -> Result<()> {
    let device = device_block()?;

    let mut app = device.make_equivalent::<i32>()?;
    device.copy_to(&mut app)?;

    assert_eq!(app.channel(0)?.to_vec(), vec![0; 4]);
    assert_eq!(app.channel(1)?.to_vec(), vec![i32::MAX; 4]);

    app.channel_mut(1)?[1] = 1337;

    assert_eq!(app.channel(1)?.to_vec(), vec![i32::MAX, 1337, i32::MAX, i32::MAX]);
    assert_eq!(app.channel(0)?.to_vec(), vec![0; 4]);
    assert_eq!(app.samples()[3], 1337);
    Ok(())
}

#[test]
fn planar_block_converts_in_storage_order() -> Result<()> {
    let mut device = NonInterleavedBuffer::<i16>::new(3, 2)?;
    device.channel_mut(0)?.copy_from_slice(&[i16::MIN, 0, 0x4000])?;
    device.channel_mut(1)?.fill(i16::MAX);

    let app = device.convert::<f32>()?;

    assert_eq!(app.samples()[..3], [-1.0, 0.0, 0.5]);
    assert!(app.channel(1)?.iter().all(|&s| (s - 1.0).abs() <= 1.0 / 32768.0));
    Ok(())
}

#[test]
fn mismatched_shape_is_rejected() -> Result<()> {
    let device = device_block()?;
    let mut app = InterleavedBuffer::<i32>::new(4, 3)?;

    let err = device.copy_to(&mut app).unwrap_err();

    assert_eq!(
        err,
        Error::ShapeMismatch { expected: BufferShape::new(4, 2), actual: BufferShape::new(4, 3) }
    );
    assert!(app.samples().iter().all(|&s| s == 0));
    Ok(())
}

#[test]
fn runtime_typed_device_block() -> Result<()> {
    let block: [f32; 8] = [0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0];

    let mut device = make_buffer(LayoutKind::Interleaved, SampleFormat::F32, 4, 2)?;
    device.copy_from_bytes(bytemuck::cast_slice(&block))?;

    let mut app = make_buffer(LayoutKind::Interleaved, SampleFormat::S16, 4, 2)?;
    device.copy_to(&mut app)?;

    match app {
        AnyAudioBuffer::Interleaved(GenericAudioBuffer::S16(buf)) => {
            assert_eq!(buf.channel(0)?.to_vec(), vec![0; 4]);
            assert_eq!(buf.channel(1)?.to_vec(), vec![i16::MAX; 4]);
        }
        _ => panic!("unexpected buffer type"),
    }

    let mut planar = make_buffer(LayoutKind::NonInterleaved, SampleFormat::S16, 4, 2)?;
    assert!(matches!(device.copy_to(&mut planar), Err(Error::LayoutMismatch { .. })));
    Ok(())
}
