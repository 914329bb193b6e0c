//! Output sinks: the narrow interface the core uses to hand buffers to
//! whatever is downstream (a host audio device, a test harness, a WAV
//! writer). Mirrors the teacher's `Sink`/`SinkRef` split: `Sink` takes
//! owned values, `SinkRef` takes borrowed slices so a single tick's
//! buffer can be appended without a copy.

/// A sink that accepts owned values for later processing.
pub trait Sink<T> {
    fn append(&mut self, value: T);
}

/// A sink that accepts borrowed slices.
pub trait SinkRef<T: ?Sized> {
    fn append(&mut self, value: &T);
}

/// One interleaved stereo tick's worth of output: `BUF_SIZE` floats,
/// L,R,L,R,... in `[-1.0, 1.0]`.
pub type StereoFrame = Box<[f32]>;
