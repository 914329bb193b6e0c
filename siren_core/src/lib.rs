//! Siren: a chiptune and procedural audio engine.
//!
//! Given a description of instruments and note sequences, synthesizes
//! stereo PCM audio from scratch and delivers it to a host audio-output
//! queue in real time. The hard-real-time core lives entirely in this
//! crate: oscillators, envelopes, a biquad filter, an LFO, a polyphonic
//! mixer, a sample-accurate sequencer, and sample playback. The host
//! audio device and WAV decoding are external collaborators; see
//! [`wav`] for the thin validation wrapper this crate keeps around
//! `hound`.

#[macro_use]
extern crate log;

pub mod bpm;
pub mod channel;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod lfo;
pub mod mixer;
pub mod notes;
pub mod osc;
pub mod presets;
pub mod sample_player;
pub mod seq;
pub mod sink;
pub mod wav;

/// Audio sample rate, in samples per second. Fixed for the lifetime of
/// the process; nothing in this crate supports resampling.
pub const SAMPLE_RATE: u32 = 44_100;

/// Mono frames produced per [`mixer::Mixer::tick`] call.
pub const BUF_FRAMES: usize = 512;

/// Interleaved stereo floats produced per tick (`BUF_FRAMES * 2`).
pub const BUF_SIZE: usize = BUF_FRAMES * 2;

/// Converts a duration in milliseconds to a sample count at [`SAMPLE_RATE`].
pub const fn ms_to_samps(ms: f32) -> f32 {
    ms * SAMPLE_RATE as f32 / 1000.0
}
