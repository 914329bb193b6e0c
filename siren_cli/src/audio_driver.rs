//! Host audio device adapter: binds siren_core's mixer output to
//! SDL2's queue-mode audio device. This is the one real crate in the
//! pack that exposes open/queue/bytes-queued/close/pause exactly as
//! spec.md §6 specifies the host device interface (the teacher's
//! `cpal`-based driver is callback/pull-mode and never exposes a
//! queue depth, so it can't stand in for this external collaborator).

use sdl2::audio::{AudioQueue, AudioSpecDesired};
use sdl2::Sdl;
use siren_core::sink::SinkRef;

pub struct AudioDriver {
    queue: AudioQueue<f32>,
}

impl AudioDriver {
    /// Opens the default output device in queue mode: interleaved
    /// f32, `channels` channels, at `sample_rate` Hz.
    pub fn open(sdl_context: &Sdl, sample_rate: u32, channels: u8) -> Result<Self, String> {
        let audio_subsystem = sdl_context.audio()?;
        let desired_spec = AudioSpecDesired {
            freq: Some(sample_rate as i32),
            channels: Some(channels),
            samples: None,
        };
        let queue: AudioQueue<f32> = audio_subsystem.open_queue(None, &desired_spec)?;
        info!(
            "opened audio device: {} Hz, {} channel(s), driver {:?}",
            queue.spec().freq,
            queue.spec().channels,
            audio_subsystem.current_audio_driver()
        );
        queue.resume();
        Ok(AudioDriver { queue })
    }

    /// Enqueues one tick's worth of interleaved stereo samples.
    pub fn queue(&self, samples: &[f32]) -> Result<(), String> {
        self.queue.queue_audio(samples)
    }

    /// Bytes currently queued but not yet played.
    pub fn bytes_queued(&self) -> u32 {
        self.queue.size()
    }

    pub fn pause(&self, paused: bool) {
        if paused {
            self.queue.pause();
        } else {
            self.queue.resume();
        }
    }

    /// Closes the device, per spec.md §6's `close(device_id)`. SDL2
    /// closes the underlying device when the `AudioQueue` drops; this
    /// consumes `self` so the adapter has an explicit close path rather
    /// than relying on an implicit drop at process exit.
    pub fn close(self) {
        info!("closing audio device");
        drop(self.queue);
    }
}

/// Mirrors the teacher's `AudioDriverSink` impl of `SinkRef`: lets the
/// runtime loop hand a mixer tick straight to the device through the
/// same narrow interface siren_core uses for its own buffer handoffs,
/// instead of a driver-specific method.
impl SinkRef<[f32]> for AudioDriver {
    fn append(&mut self, value: &[f32]) {
        if let Err(e) = self.queue(value) {
            error!("failed to queue audio: {}", e);
        }
    }
}
