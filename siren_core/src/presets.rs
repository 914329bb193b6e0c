//! Instrument presets: plain constructor functions standing in for
//! the source's preset macros (`pluck-square`, `pad-sine`, ...).
//! Per spec.md §9's preset/macro re-architecture note, a macro system
//! buys nothing here beyond what a function already gives, so these
//! are just `Channel` builders with sensible defaults, not a distinct
//! abstraction layer.

use crate::channel::Channel;
use crate::envelope::EnvelopeParams;
use crate::filter::FilterKind;
use crate::osc::WaveformKind;

/// A short, percussive square-wave pluck: near-instant attack, a quick
/// decay into a low sustain, and a short release. Good for SFX and
/// bass lines.
pub fn pluck_square(gain: f32) -> Channel {
    let env = EnvelopeParams::new(2.0, 120.0, 0.1, 80.0).expect("pluck_square envelope is valid");
    Channel::new(WaveformKind::Square, env, gain)
}

/// A soft sustained pad: slow attack and release around a sine tone,
/// lightly low-passed to round off the edges.
pub fn pad_sine(gain: f32) -> Channel {
    let env = EnvelopeParams::new(300.0, 200.0, 0.8, 400.0).expect("pad_sine envelope is valid");
    let mut ch = Channel::new(WaveformKind::Sine, env, gain);
    ch.set_filter(FilterKind::LowPass, 4000.0, 0.707)
        .expect("pad_sine filter params are valid");
    ch
}

/// A bright lead voice: naive sawtooth with a fast attack and a long
/// tail, for melodic lines.
pub fn lead_saw(gain: f32) -> Channel {
    let env = EnvelopeParams::new(5.0, 60.0, 0.6, 150.0).expect("lead_saw envelope is valid");
    Channel::new(WaveformKind::Saw, env, gain)
}

/// A one-shot noise hit for percussion-style SFX: instant attack,
/// fast decay, no sustain.
pub fn noise_hit(gain: f32) -> Channel {
    let env = EnvelopeParams::new(1.0, 60.0, 0.0, 10.0).expect("noise_hit envelope is valid");
    Channel::new(WaveformKind::Noise, env, gain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_play_without_panicking() {
        let mut buf = [0.0f32; crate::BUF_FRAMES];
        for mut ch in [pluck_square(0.8), pad_sine(0.5), lead_saw(0.7), noise_hit(1.0)] {
            ch.play(440.0);
            ch.tick(&mut buf);
            assert!(buf.iter().all(|s| s.is_finite()));
        }
    }
}
