#[macro_use]
extern crate log;

mod audio_driver;
mod song;

use audio_driver::AudioDriver;
use clap::{App, Arg};
use siren_core::sink::SinkRef;
use siren_core::wav::load_mono_wav;
use std::time::Duration;

fn main() {
    env_logger::init();

    let matches = App::new("siren")
        .version("0.1")
        .author("Siren Contributors")
        .about("Chiptune and procedural audio engine")
        .arg(
            Arg::with_name("sample")
                .help("Mono 16-bit PCM WAV file to load into sample slot 0")
                .long("sample")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("high-water-ticks")
                .help("Queue depth, in ticks, to keep buffered ahead of playback")
                .long("high-water-ticks")
                .takes_value(true)
                .default_value("4"),
        )
        .get_matches();

    let high_water_ticks: u32 = matches
        .value_of("high-water-ticks")
        .unwrap()
        .parse()
        .unwrap_or(4);
    let high_water_bytes = high_water_ticks * (siren_core::BUF_SIZE as u32) * 4;

    let sdl_context = sdl2::init().expect("failed to init SDL2");
    let mut driver = AudioDriver::open(&sdl_context, siren_core::SAMPLE_RATE, 2)
        .expect("failed to open audio device");

    let mut mixer = song::demo_mixer();

    if let Some(path) = matches.value_of("sample") {
        let samples = load_mono_wav(path);
        if samples.is_empty() {
            warn!("sample {:?} failed to load or had an unsupported format; slot 0 will be silent", path);
        } else {
            info!("loaded {} samples from {:?}", samples.len(), path);
        }
        mixer.load_sample(0, samples, 0, 0, 0.0);
        mixer.play_sample(0);
    }

    info!("running; press Ctrl-C to stop");
    loop {
        while driver.bytes_queued() < high_water_bytes {
            let buf = mixer.tick();
            driver.append(buf);
        }
        spin_sleep::sleep(Duration::from_millis(1));
    }
}
