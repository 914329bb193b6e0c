//! Mixer: the top of the DSP graph. Owns every voice, the fixed SFX
//! and sample pools, and the working buffers; `tick` is the only
//! entry point the runtime loop calls, and it is infallible by
//! construction (spec.md §4.8 "Failure: none").

use crate::channel::Channel;
use crate::sample_player::SamplePlayer;
use crate::seq::Seq;

/// Fixed SFX pool size (spec.md §3, K).
pub const SFX_POOL_SIZE: usize = 4;
/// Fixed sample-player pool size (spec.md §3, M).
pub const SAMPLE_POOL_SIZE: usize = 4;

/// Linear pan law: `left = (1-p)/2`, `right = (1+p)/2`. `p` is clamped
/// to `[-1, 1]` so a caller's out-of-range pan cannot push a
/// contribution outside the mono signal's magnitude.
fn pan_gains(pan: f32) -> (f32, f32) {
    let p = pan.clamp(-1.0, 1.0);
    ((1.0 - p) / 2.0, (1.0 + p) / 2.0)
}

struct VoiceSlot {
    name: String,
    channel: Channel,
    seq: Seq,
    pan: f32,
}

struct SfxSlot {
    channel: Channel,
    pan: f32,
}

struct SampleSlot {
    player: SamplePlayer,
    pan: f32,
}

pub struct Mixer {
    voices: Vec<VoiceSlot>,
    sfx: Vec<SfxSlot>,
    samples: Vec<SampleSlot>,
    pub master_gain: f32,
    next_sfx_slot: usize,
    mono_work: [f32; crate::BUF_FRAMES],
    stereo_out: [f32; crate::BUF_SIZE],
}

impl Mixer {
    /// Builds a mixer with `voices.len()` named slots (N may be 0; see
    /// spec.md §8 scenario 1) plus the fixed SFX and sample pools,
    /// both initially silent/inactive.
    pub fn new(voices: Vec<(String, Channel, Seq, f32)>) -> Self {
        let voice_slots = voices
            .into_iter()
            .map(|(name, channel, seq, pan)| VoiceSlot { name, channel, seq, pan })
            .collect();

        let sfx = (0..SFX_POOL_SIZE)
            .map(|_| SfxSlot {
                channel: silent_sfx_channel(),
                pan: 0.0,
            })
            .collect();

        let samples = (0..SAMPLE_POOL_SIZE)
            .map(|_| SampleSlot {
                player: SamplePlayer::new(Vec::new()),
                pan: 0.0,
            })
            .collect();

        Mixer {
            voices: voice_slots,
            sfx,
            samples,
            master_gain: 1.0,
            next_sfx_slot: 0,
            mono_work: [0.0; crate::BUF_FRAMES],
            stereo_out: [0.0; crate::BUF_SIZE],
        }
    }

    /// Looks up a named voice's channel for direct control (e.g. live
    /// filter/LFO changes). Sequencer-driven play/release should go
    /// through the paired [`Seq`]'s note list instead.
    pub fn voice_channel_mut(&mut self, name: &str) -> Option<&mut Channel> {
        self.voices.iter_mut().find(|v| v.name == name).map(|v| &mut v.channel)
    }

    /// Replaces a named slot's note list.
    pub fn set_voice_notes(&mut self, name: &str, notes: Vec<crate::seq::Note>) -> bool {
        if let Some(v) = self.voices.iter_mut().find(|v| v.name == name) {
            v.seq = Seq::new(notes);
            true
        } else {
            false
        }
    }

    /// Fires a one-shot SFX voice: copies `instrument` into the next
    /// SFX slot round-robin, sets its pan, and plays `freq_hz`. No
    /// error if a currently-sounding slot is overwritten — cutting off
    /// an older SFX mid-envelope is the documented contract.
    pub fn sfx_at(&mut self, freq_hz: f32, pan: f32, instrument: Channel) {
        let slot = &mut self.sfx[self.next_sfx_slot];
        if slot.channel.is_sounding() {
            debug!("sfx slot {} overwritten while still sounding", self.next_sfx_slot);
        }
        slot.channel = instrument;
        slot.pan = pan;
        slot.channel.play(freq_hz);
        self.next_sfx_slot = (self.next_sfx_slot + 1) % SFX_POOL_SIZE;
    }

    /// Loads a mono sample into sample-pool slot `idx` (0-indexed,
    /// `< SAMPLE_POOL_SIZE`) with an optional loop region and pan. Does
    /// nothing if `idx` is out of range.
    pub fn load_sample(&mut self, idx: usize, samples: Vec<f32>, loop_start: usize, loop_end: usize, pan: f32) {
        if let Some(slot) = self.samples.get_mut(idx) {
            let mut player = SamplePlayer::new(samples);
            player.set_loop(loop_start, loop_end);
            slot.player = player;
            slot.pan = pan;
        }
    }

    /// Starts playback of sample-pool slot `idx` from the beginning.
    /// Does nothing if `idx` is out of range.
    pub fn play_sample(&mut self, idx: usize) {
        if let Some(slot) = self.samples.get_mut(idx) {
            slot.player.play();
        }
    }

    /// Produces one tick's worth of interleaved stereo output:
    /// `BUF_SIZE` floats in `[-1.0, 1.0]`.
    ///
    /// Order, per spec.md §4.8: zero the output; tick every named
    /// Seq+Channel pair and sum with pan; tick active SFX slots and
    /// sum; tick every sample slot and sum; apply master gain; clamp.
    pub fn tick(&mut self) -> &[f32] {
        self.stereo_out.fill(0.0);

        for voice in self.voices.iter_mut() {
            voice.seq.tick(&mut voice.channel);
            voice.channel.tick(&mut self.mono_work);
            sum_into_stereo(&self.mono_work, voice.pan, &mut self.stereo_out);
        }

        for slot in self.sfx.iter_mut() {
            if slot.channel.is_sounding() {
                slot.channel.tick(&mut self.mono_work);
                sum_into_stereo(&self.mono_work, slot.pan, &mut self.stereo_out);
            }
        }

        for slot in self.samples.iter_mut() {
            slot.player.tick(&mut self.mono_work);
            sum_into_stereo(&self.mono_work, slot.pan, &mut self.stereo_out);
        }

        for s in self.stereo_out.iter_mut() {
            let mut v = *s * self.master_gain;
            if !v.is_finite() {
                v = 0.0;
            }
            *s = v.clamp(-1.0, 1.0);
        }

        &self.stereo_out
    }
}

fn sum_into_stereo(mono: &[f32], pan: f32, stereo: &mut [f32]) {
    let (left_gain, right_gain) = pan_gains(pan);
    for (i, s) in mono.iter().enumerate() {
        let v = if s.is_finite() { *s } else { 0.0 };
        stereo[2 * i] += v * left_gain;
        stereo[2 * i + 1] += v * right_gain;
    }
}

/// A silent placeholder channel for unused SFX slots: zero gain and an
/// already-Done envelope, so it never sounds until `sfx_at` overwrites
/// it with a real instrument.
fn silent_sfx_channel() -> Channel {
    Channel::new(
        crate::osc::WaveformKind::Sine,
        crate::envelope::EnvelopeParams::new(0.0, 0.0, 0.0, 0.0).unwrap(),
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::EnvelopeParams;
    use crate::osc::WaveformKind;
    use crate::seq::Note;

    fn square(gain: f32) -> Channel {
        Channel::new(WaveformKind::Square, EnvelopeParams::new(0.0, 0.0, 1.0, 0.0).unwrap(), gain)
    }

    #[test]
    fn silent_mixer_is_all_zero() {
        let mut mixer = Mixer::new(vec![]);
        let out = mixer.tick();
        assert_eq!(out.len(), crate::BUF_SIZE);
        assert!(out.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn output_is_always_within_unit_range() {
        let voices = vec![
            ("a".to_string(), square(1.0), Seq::new(vec![Note::new(440.0, 1_000_000.0)]), 0.0),
            ("b".to_string(), square(1.0), Seq::new(vec![Note::new(110.0, 1_000_000.0)]), 0.5),
            ("c".to_string(), square(1.0), Seq::new(vec![Note::new(220.0, 1_000_000.0)]), -0.5),
        ];
        let mut mixer = Mixer::new(voices);
        mixer.master_gain = 1.0;
        for _ in 0..50 {
            let out = mixer.tick();
            for s in out {
                assert!(s.abs() <= 1.0);
            }
        }
    }

    #[test]
    fn full_left_pan_silences_right_channel() {
        let voices = vec![(
            "a".to_string(),
            square(1.0),
            Seq::new(vec![Note::new(440.0, 1_000_000.0)]),
            -1.0,
        )];
        let mut mixer = Mixer::new(voices);
        let out = mixer.tick();
        for frame in out.chunks(2) {
            assert_eq!(frame[1], 0.0);
        }
    }

    #[test]
    fn pan_law_conserves_total_signal_for_any_pan() {
        for pan in [-1.0, -0.5, 0.0, 0.3, 1.0] {
            let (l, r) = pan_gains(pan);
            assert!((l + r - 1.0).abs() < 1e-6, "pan={pan} l={l} r={r}");
        }
    }

    #[test]
    fn sfx_round_robin_overwrites_oldest_slot() {
        let mut mixer = Mixer::new(vec![]);
        for _ in 0..6 {
            mixer.sfx_at(440.0, 0.0, square(1.0));
        }
        assert_eq!(mixer.next_sfx_slot, 2);
    }

    #[test]
    fn sample_player_with_empty_samples_is_silent_and_safe() {
        let mut mixer = Mixer::new(vec![]);
        mixer.load_sample(0, vec![], 0, 0, 0.0);
        mixer.play_sample(0);
        let out = mixer.tick();
        assert!(out.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn out_of_range_sample_index_is_ignored() {
        let mut mixer = Mixer::new(vec![]);
        mixer.load_sample(SAMPLE_POOL_SIZE + 1, vec![1.0], 0, 0, 0.0);
        mixer.play_sample(SAMPLE_POOL_SIZE + 1);
        let out = mixer.tick();
        assert!(out.iter().all(|s| *s == 0.0));
    }
}
