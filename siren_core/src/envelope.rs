//! ADSR envelope: a state machine producing one amplitude multiplier
//! per sample. Attack/Decay/Release are linear ramps; Sustain holds a
//! level; retriggering from any stage restarts Attack from the current
//! level rather than from zero.

use crate::error::SirenError;
use crate::ms_to_samps;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Attack,
    Decay,
    Sustain,
    Release,
    Done,
}

#[derive(Debug, Clone, Copy)]
pub struct EnvelopeParams {
    attack_samps: f32,
    decay_samps: f32,
    pub sustain_level: f32,
    release_samps: f32,
}

impl EnvelopeParams {
    pub fn new(
        attack_ms: f32,
        decay_ms: f32,
        sustain_level: f32,
        release_ms: f32,
    ) -> Result<Self, SirenError> {
        if attack_ms < 0.0 {
            return Err(SirenError::NegativeAttack(attack_ms));
        }
        if decay_ms < 0.0 {
            return Err(SirenError::NegativeDecay(decay_ms));
        }
        if release_ms < 0.0 {
            return Err(SirenError::NegativeRelease(release_ms));
        }
        if !(0.0..=1.0).contains(&sustain_level) {
            return Err(SirenError::InvalidSustainLevel(sustain_level));
        }
        Ok(EnvelopeParams {
            attack_samps: ms_to_samps(attack_ms).max(0.0),
            decay_samps: ms_to_samps(decay_ms).max(0.0),
            sustain_level,
            release_samps: ms_to_samps(release_ms).max(0.0),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EnvelopeState {
    params: EnvelopeParams,
    stage: Stage,
    samples_in_stage: f32,
    level: f32,
    release_start_level: f32,
}

impl EnvelopeState {
    pub fn new(params: EnvelopeParams) -> Self {
        EnvelopeState {
            params,
            stage: Stage::Idle,
            samples_in_stage: 0.0,
            level: 0.0,
            release_start_level: 0.0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    /// Restarts Attack from the envelope's current level, unless that
    /// level is already 0, in which case Attack restarts from 0.
    pub fn note_on(&mut self) {
        if self.level > 0.0 && self.params.attack_samps > 0.0 {
            // Find the samples_in_stage a linear attack ramp would be
            // at for the emitted level to already equal `self.level`.
            self.samples_in_stage = self.level * self.params.attack_samps;
        } else {
            self.samples_in_stage = 0.0;
        }
        self.stage = Stage::Attack;
    }

    /// Fades from the actual current level, never from 1.0.
    pub fn note_off(&mut self) {
        self.release_start_level = self.level;
        self.samples_in_stage = 0.0;
        self.stage = Stage::Release;
    }

    /// Produces the next amplitude sample and advances the state machine.
    pub fn next_sample(&mut self) -> f32 {
        match self.stage {
            Stage::Idle => {
                self.level = 0.0;
            }
            Stage::Attack => {
                if self.params.attack_samps <= 0.0 {
                    self.level = 1.0;
                } else {
                    self.level = (self.samples_in_stage / self.params.attack_samps).min(1.0);
                }
                self.samples_in_stage += 1.0;
                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.stage = Stage::Decay;
                    self.samples_in_stage = 0.0;
                }
            }
            Stage::Decay => {
                if self.params.decay_samps <= 0.0 {
                    self.level = self.params.sustain_level;
                    self.stage = Stage::Sustain;
                    self.samples_in_stage = 0.0;
                } else {
                    let t = (self.samples_in_stage / self.params.decay_samps).min(1.0);
                    self.level = 1.0 + (self.params.sustain_level - 1.0) * t;
                    self.samples_in_stage += 1.0;
                    if self.samples_in_stage >= self.params.decay_samps {
                        self.level = self.params.sustain_level;
                        self.stage = Stage::Sustain;
                        self.samples_in_stage = 0.0;
                    }
                }
            }
            Stage::Sustain => {
                self.level = self.params.sustain_level;
            }
            Stage::Release => {
                if self.params.release_samps <= 0.0 {
                    self.level = 0.0;
                    self.stage = Stage::Done;
                } else {
                    let t = (self.samples_in_stage / self.params.release_samps).min(1.0);
                    self.level = self.release_start_level * (1.0 - t);
                    self.samples_in_stage += 1.0;
                    if self.samples_in_stage >= self.params.release_samps || self.level <= 0.0 {
                        self.level = 0.0;
                        self.stage = Stage::Done;
                    }
                }
            }
            Stage::Done => {
                self.level = 0.0;
            }
        }
        self.level
    }
}
