//! WAV loading glue. Decoding itself is out of scope for the core
//! (spec.md §1) and is delegated to `hound`; this module only
//! validates the decoded format and normalizes samples. Any mismatch
//! or IO error returns an empty `Vec` rather than propagating an
//! error — the caller checks length before use, per spec.md §6.

use std::path::Path;

/// Loads a mono 16-bit PCM WAV file at [`crate::SAMPLE_RATE`] Hz,
/// normalizing samples by dividing by 32768. Returns an empty `Vec` on
/// any format mismatch (wrong channel count, sample rate, bit depth,
/// or sample format) or IO error.
pub fn load_mono_wav(path: impl AsRef<Path>) -> Vec<f32> {
    let mut reader = match hound::WavReader::open(path.as_ref()) {
        Ok(r) => r,
        Err(e) => {
            warn!("failed to open WAV {:?}: {}", path.as_ref(), e);
            return Vec::new();
        }
    };

    let spec = reader.spec();
    if spec.channels != 1
        || spec.sample_rate != crate::SAMPLE_RATE
        || spec.bits_per_sample != 16
        || spec.sample_format != hound::SampleFormat::Int
    {
        warn!(
            "WAV {:?} has unsupported format {:?}; expected mono 16-bit PCM at {} Hz",
            path.as_ref(),
            spec,
            crate::SAMPLE_RATE
        );
        return Vec::new();
    }

    match reader.samples::<i16>().collect::<Result<Vec<i16>, _>>() {
        Ok(samples) => samples.into_iter().map(|s| s as f32 / 32768.0).collect(),
        Err(e) => {
            warn!("failed reading samples from WAV {:?}: {}", path.as_ref(), e);
            Vec::new()
        }
    }
}
