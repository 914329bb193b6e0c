//! A small demo song, standing in for the ROM argument the teacher's
//! CLI took: three named voices (lead, bass, pad) sequenced over a
//! simple melody, built from siren_core's note constants, BPM
//! durations, and instrument presets.

use siren_core::bpm::Durations;
use siren_core::mixer::Mixer;
use siren_core::notes::*;
use siren_core::presets::{lead_saw, pad_sine, pluck_square};
use siren_core::seq::{Note, Seq};

pub fn demo_mixer() -> Mixer {
    let d = Durations::new(100.0);

    let lead_notes = vec![
        Note::new(C4, d.quarter),
        Note::new(C4, d.eighth),
        Note::new(G4, d.eighth),
        Note::new(G4, d.eighth),
        Note::new(A4, d.eighth),
        Note::new(A4, d.eighth),
        Note::new(G4, d.quarter),
        Note::rest(d.quarter),
        Note::new(F4, d.eighth),
        Note::new(F4, d.eighth),
        Note::new(E4, d.eighth),
        Note::new(E4, d.eighth),
        Note::new(D4, d.eighth),
        Note::new(D4, d.eighth),
        Note::new(C4, d.quarter),
        Note::rest(d.quarter),
    ];

    let bass_notes = vec![
        Note::new(C3, d.half),
        Note::new(G3, d.half),
        Note::new(F3, d.half),
        Note::new(C3, d.half),
    ];

    let pad_notes = vec![Note::new(C3, d.whole), Note::new(F3, d.whole)];

    let voices = vec![
        ("lead".to_string(), lead_saw(0.5), Seq::new(lead_notes), 0.15),
        ("bass".to_string(), pluck_square(0.4), Seq::new(bass_notes), -0.2),
        ("pad".to_string(), pad_sine(0.3), Seq::new(pad_notes), 0.0),
    ];

    let mut mixer = Mixer::new(voices);
    mixer.master_gain = 0.9;
    mixer
}
