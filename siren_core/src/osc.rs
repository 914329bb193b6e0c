//! Oscillator: fills a mono buffer from a waveform kind, a frequency,
//! and an incoming phase, and returns the outgoing phase. Total
//! function, no failure mode.

use rand::Rng;
use std::f32::consts::PI;

/// The selectable waveform shapes. Square and Saw are intentionally
/// naive (not band-limited) — aliasing is accepted as chiptune
/// character, per spec; do not "fix" this with band-limited variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveformKind {
    Sine,
    Square,
    Saw,
    Triangle,
    Noise,
}

/// Phase-accumulator state for one voice's oscillator.
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    pub kind: WaveformKind,
    phase: f32,
}

impl Oscillator {
    pub fn new(kind: WaveformKind) -> Self {
        Oscillator { kind, phase: 0.0 }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Fills `out` with one tick's worth of `freq_hz` signal, advancing
    /// and wrapping the stored phase. Dispatch on `kind` is hoisted
    /// outside the per-sample loop.
    pub fn fill(&mut self, out: &mut [f32], freq_hz: f32) {
        let step = 2.0 * PI * freq_hz / super::SAMPLE_RATE as f32;
        let mut phase = self.phase;
        match self.kind {
            WaveformKind::Sine => {
                for s in out.iter_mut() {
                    *s = phase.sin();
                    phase = wrap(phase + step);
                }
            }
            WaveformKind::Square => {
                for s in out.iter_mut() {
                    *s = if phase < PI { 1.0 } else { -1.0 };
                    phase = wrap(phase + step);
                }
            }
            WaveformKind::Saw => {
                for s in out.iter_mut() {
                    *s = saw(phase);
                    phase = wrap(phase + step);
                }
            }
            WaveformKind::Triangle => {
                for s in out.iter_mut() {
                    *s = 2.0 * saw(phase).abs() - 1.0;
                    phase = wrap(phase + step);
                }
            }
            WaveformKind::Noise => {
                let mut rng = rand::thread_rng();
                for s in out.iter_mut() {
                    *s = rng.gen_range(-1.0..=1.0);
                    phase = wrap(phase + step);
                }
            }
        }
        self.phase = phase;
    }
}

fn saw(phase: f32) -> f32 {
    2.0 * (phase / (2.0 * PI)) - 1.0
}

fn wrap(phase: f32) -> f32 {
    let two_pi = 2.0 * PI;
    let p = phase % two_pi;
    if p < 0.0 {
        p + two_pi
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_matches_formula_at_sample_zero() {
        let mut osc = Oscillator::new(WaveformKind::Sine);
        let mut buf = [0.0f32; 8];
        osc.fill(&mut buf, 440.0);
        assert!((buf[0] - 0.0).abs() < 1e-6);
    }

    #[test]
    fn phase_wraps_into_0_2pi() {
        let mut osc = Oscillator::new(WaveformKind::Sine);
        let mut buf = [0.0f32; super::super::BUF_FRAMES];
        for _ in 0..100 {
            osc.fill(&mut buf, 440.0);
            assert!(osc.phase() >= 0.0 && osc.phase() < 2.0 * PI);
        }
    }

    #[test]
    fn phase_continuity_across_tick_boundary() {
        // Two ticks back to back must equal one long tick sample-for-sample.
        let freq = 220.0;
        let mut joined = Oscillator::new(WaveformKind::Sine);
        let mut one_shot = [0.0f32; 32];
        joined.fill(&mut one_shot, freq);

        let mut split = Oscillator::new(WaveformKind::Sine);
        let mut a = [0.0f32; 16];
        let mut b = [0.0f32; 16];
        split.fill(&mut a, freq);
        split.fill(&mut b, freq);

        for i in 0..16 {
            assert!((one_shot[i] - a[i]).abs() < 1e-6);
            assert!((one_shot[16 + i] - b[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn square_is_plus_minus_one() {
        let mut osc = Oscillator::new(WaveformKind::Square);
        let mut buf = [0.0f32; 64];
        osc.fill(&mut buf, 440.0);
        for s in buf {
            assert!(s == 1.0 || s == -1.0);
        }
    }

    #[test]
    fn triangle_is_bounded() {
        let mut osc = Oscillator::new(WaveformKind::Triangle);
        let mut buf = [0.0f32; 64];
        osc.fill(&mut buf, 440.0);
        for s in buf {
            assert!((-1.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn noise_is_bounded_and_advances_phase() {
        let mut osc = Oscillator::new(WaveformKind::Noise);
        let before = osc.phase();
        let mut buf = [0.0f32; 64];
        osc.fill(&mut buf, 440.0);
        for s in buf {
            assert!((-1.0..=1.0).contains(&s));
        }
        assert_ne!(before, osc.phase());
    }
}
