//! Sequencer: drives a paired [`Channel`] by walking a note list and
//! firing note-on/note-off at sample-accurate (tick-boundary-rounded)
//! instants. Looping is implicit: when the index wraps, the sequence
//! restarts seamlessly.

use crate::channel::Channel;
use crate::ms_to_samps;

/// `freq_hz == 0.0` denotes a rest.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    pub freq_hz: f32,
    pub duration_ms: f32,
}

impl Note {
    pub fn new(freq_hz: f32, duration_ms: f32) -> Self {
        Note { freq_hz, duration_ms }
    }

    pub fn rest(duration_ms: f32) -> Self {
        Note { freq_hz: 0.0, duration_ms }
    }

    fn is_rest(&self) -> bool {
        self.freq_hz <= 0.0
    }
}

pub struct Seq {
    notes: Vec<Note>,
    index: usize,
    samples_into_note: f32,
    triggered: bool,
}

impl Seq {
    pub fn new(notes: Vec<Note>) -> Self {
        Seq {
            notes,
            index: 0,
            samples_into_note: 0.0,
            triggered: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Advances by one tick (`BUF_FRAMES` samples), firing `play`/`release`
    /// on `channel` as note boundaries are crossed. An empty note list
    /// is a no-op.
    pub fn tick(&mut self, channel: &mut Channel) {
        if self.notes.is_empty() {
            return;
        }

        let note = self.notes[self.index];

        if self.samples_into_note == 0.0 && !self.triggered {
            if !note.is_rest() {
                channel.play(note.freq_hz);
                self.triggered = true;
            } else if channel.is_sounding() {
                channel.release();
            }
        }

        let dur_samples = ms_to_samps(note.duration_ms);
        self.samples_into_note += crate::BUF_FRAMES as f32;

        if self.samples_into_note >= dur_samples {
            if !note.is_rest() {
                channel.release();
            }
            self.index = (self.index + 1) % self.notes.len();
            self.samples_into_note = 0.0;
            self.triggered = false;
        }
    }
}
