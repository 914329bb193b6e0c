//! Channel: one voice. Oscillator + envelope + optional filter +
//! optional LFO + gain, producing one mono buffer per tick.

use crate::envelope::{EnvelopeParams, EnvelopeState};
use crate::error::SirenError;
use crate::filter::{FilterKind, FilterState};
use crate::lfo::{LfoState, LfoTarget};
use crate::osc::{Oscillator, WaveformKind};

#[derive(Clone, Copy)]
pub struct Channel {
    osc: Oscillator,
    envelope: EnvelopeState,
    filter: FilterState,
    lfo: LfoState,
    pub gain: f32,
    current_freq_hz: f32,
}

impl Channel {
    pub fn new(waveform: WaveformKind, envelope: EnvelopeParams, gain: f32) -> Self {
        Channel {
            osc: Oscillator::new(waveform),
            envelope: EnvelopeState::new(envelope),
            filter: FilterState::passthrough(),
            lfo: LfoState::off(),
            gain: gain.clamp(0.0, 1.0),
            current_freq_hz: 0.0,
        }
    }

    pub fn set_filter(&mut self, kind: FilterKind, cutoff_hz: f32, q: f32) -> Result<(), SirenError> {
        self.filter.set(kind, cutoff_hz, q)
    }

    pub fn clear_filter(&mut self) {
        let _ = self.filter.set(FilterKind::None, 1000.0, 0.707);
    }

    pub fn set_lfo(&mut self, target: LfoTarget, rate_hz: f32, depth: f32) {
        self.lfo = LfoState::new(target, rate_hz, depth);
    }

    pub fn clear_lfo(&mut self) {
        self.lfo = LfoState::off();
    }

    pub fn play(&mut self, freq_hz: f32) {
        self.current_freq_hz = freq_hz;
        self.envelope.note_on();
    }

    pub fn release(&mut self) {
        self.envelope.note_off();
    }

    pub fn is_sounding(&self) -> bool {
        !matches!(self.envelope.stage(), crate::envelope::Stage::Idle | crate::envelope::Stage::Done)
    }

    /// Fills `out` with one tick's worth of this voice's signal.
    /// Order: oscillator -> envelope -> LFO-amp -> filter -> gain. This
    /// order is observable (filtering after gain changes headroom) and
    /// must be preserved.
    pub fn tick(&mut self, out: &mut [f32]) {
        let m = if self.lfo.target == LfoTarget::Freq {
            Some(self.lfo.advance())
        } else {
            None
        };
        let f_eff = self.current_freq_hz + m.unwrap_or(0.0);

        self.osc.fill(out, f_eff);

        for s in out.iter_mut() {
            *s *= self.envelope.next_sample();
        }

        if self.lfo.target == LfoTarget::Amp {
            let m = self.lfo.advance();
            let factor = self.lfo.amp_factor(m);
            for s in out.iter_mut() {
                *s *= factor;
            }
        }

        if self.filter.kind() != FilterKind::None {
            self.filter.fill(out);
        }

        for s in out.iter_mut() {
            *s *= self.gain;
        }
    }
}
