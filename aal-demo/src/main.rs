// AAL Demo
// Copyright (c) 2026 The AAL Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

use aal_core::audio::{make_buffer, AnyAudioBuffer, AudioBuffer, GenericAudioBuffer, Layout};
use aal_core::audio::LayoutKind;
use aal_core::conv::{ConvertibleSample, FromSample};
use aal_core::errors::Result;
use aal_core::sample::SampleFormat;

use clap::Arg;
use log::{error, info};

struct DemoOptions {
    layout: LayoutKind,
    format: SampleFormat,
    frames: u16,
    channels: u16,
    dump: bool,
}

fn main() {
    pretty_env_logger::init();

    let args = clap::Command::new("AAL Demo")
        .version("0.1")
        .author("The AAL Developers")
        .about("Convert a driver-style audio block into another sample format")
        .arg(
            Arg::new("layout")
                .long("layout")
                .short('l')
                .takes_value(true)
                .possible_values(&["interleaved", "non-interleaved"])
                .default_value("interleaved")
                .help("The sample layout of both buffers"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .takes_value(true)
                .possible_values(&["s8", "s16", "s32", "f32"])
                .default_value("s32")
                .help("The sample format to convert the device block into"),
        )
        .arg(
            Arg::new("frames")
                .long("frames")
                .takes_value(true)
                .value_name("FRAMES")
                .default_value("4")
                .help("The number of frames per channel"),
        )
        .arg(
            Arg::new("channels")
                .long("channels")
                .takes_value(true)
                .value_name("CHANNELS")
                .default_value("2")
                .help("The number of channels"),
        )
        .arg(Arg::new("dump").long("dump").help("Print the complete contents of both buffers"))
        .get_matches();

    let layout = match args.value_of("layout") {
        Some("non-interleaved") => LayoutKind::NonInterleaved,
        _ => LayoutKind::Interleaved,
    };

    let format = match args.value_of("format") {
        Some("s8") => SampleFormat::S8,
        Some("s16") => SampleFormat::S16,
        Some("f32") => SampleFormat::F32,
        _ => SampleFormat::S32,
    };

    let frames = parse_count(args.value_of("frames"), "frames");
    let channels = parse_count(args.value_of("channels"), "channels");

    let opts = DemoOptions { layout, format, frames, channels, dump: args.is_present("dump") };

    // For any error, return an exit code -1.
    let code = match run(&opts) {
        Ok(()) => 0,
        Err(err) => {
            error!("{}", err);
            -1
        }
    };

    std::process::exit(code)
}

fn parse_count(value: Option<&str>, name: &str) -> u16 {
    match value.map(str::parse::<u16>) {
        Some(Ok(count)) => count,
        _ => {
            eprintln!("the number of {} must be an integer between 0 and {}", name, u16::MAX);
            std::process::exit(2);
        }
    }
}

fn run(opts: &DemoOptions) -> Result<()> {
    // A flat block as it could come from an audio driver. Every even channel is silent, and every
    // odd channel is at full scale.
    let samples = usize::from(opts.frames) * usize::from(opts.channels);

    let block = (0..samples)
        .map(|i| {
            let ch = match opts.layout {
                LayoutKind::Interleaved => i % usize::from(opts.channels),
                LayoutKind::NonInterleaved => i / usize::from(opts.frames),
            };
            (ch % 2) as f32
        })
        .collect::<Vec<f32>>();

    let mut device = make_buffer(opts.layout, SampleFormat::F32, opts.frames, opts.channels)?;
    device.copy_from_bytes(bytemuck::cast_slice(&block))?;

    info!("device buffer: {} layout, {}, {}", device.layout(), device.format(), device.shape());

    let mut user = make_buffer(opts.layout, opts.format, opts.frames, opts.channels)?;
    device.copy_to(&mut user)?;

    info!("user buffer: {} layout, {}, {}", user.layout(), user.format(), user.shape());

    mark_any(&mut user)?;

    println!("device buffer");
    print_any(&device, opts.dump);
    println!();
    println!("user buffer");
    print_any(&user, opts.dump);

    Ok(())
}

fn mark_any(buf: &mut AnyAudioBuffer) -> Result<()> {
    match buf {
        AnyAudioBuffer::Interleaved(buf) => mark_generic(buf),
        AnyAudioBuffer::NonInterleaved(buf) => mark_generic(buf),
    }
}

fn mark_generic<L: Layout>(buf: &mut GenericAudioBuffer<L>) -> Result<()> {
    match buf {
        GenericAudioBuffer::S8(buf) => mark(buf),
        GenericAudioBuffer::S16(buf) => mark(buf),
        GenericAudioBuffer::S32(buf) => mark(buf),
        GenericAudioBuffer::F32(buf) => mark(buf),
    }
}

/// Overwrite the second sample of the second channel through a channel view.
fn mark<S: ConvertibleSample, L: Layout>(buf: &mut AudioBuffer<S, L>) -> Result<()> {
    if buf.channels() < 2 || buf.frames() < 2 {
        return Ok(());
    }

    buf.channel_mut(1)?[1] = <S as FromSample<f32>>::from_sample(0.5);
    Ok(())
}

fn print_any(buf: &AnyAudioBuffer, dump: bool) {
    match buf {
        AnyAudioBuffer::Interleaved(buf) => print_generic(buf, dump),
        AnyAudioBuffer::NonInterleaved(buf) => print_generic(buf, dump),
    }
}

fn print_generic<L: Layout>(buf: &GenericAudioBuffer<L>, dump: bool) {
    match buf {
        GenericAudioBuffer::S8(buf) => print(buf, dump),
        GenericAudioBuffer::S16(buf) => print(buf, dump),
        GenericAudioBuffer::S32(buf) => print(buf, dump),
        GenericAudioBuffer::F32(buf) => print(buf, dump),
    }
}

fn print<S: ConvertibleSample, L: Layout>(buf: &AudioBuffer<S, L>, dump: bool) {
    for (ch, channel) in buf.iter_channels().enumerate() {
        print!("  samples of channel {}:", ch);
        for sample in channel.iter() {
            print!(" {:?}", sample);
        }
        println!();
    }

    if dump {
        println!("  {:?}", buf);
    }
}
