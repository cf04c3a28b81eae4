// AAL
// Copyright (c) 2026 The AAL Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layout-aware audio sample buffers.
//!
//! An [`AudioBuffer`](audio::AudioBuffer) owns a flat block of `frames × channels` samples stored
//! either interleaved or non-interleaved, exposes it both as raw contiguous storage and as
//! per-channel views, and converts its contents into buffers of the other standard sample
//! formats.

pub mod audio;
pub mod conv;
pub mod errors;
pub mod sample;
