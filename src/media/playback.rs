//! Playback through the default output device (`playback` feature).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample, StreamConfig};
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};
use tracing::{debug, error};

use super::pcm::AudioBuffer;
use super::sink::AudioSink;
use crate::{Error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(10);
const DRAIN_MARGIN: Duration = Duration::from_secs(2);

/// Plays each buffer on a fresh output stream and blocks until it has drained.
///
/// Gives up when the stream reports an error or when the buffer's duration
/// plus a margin has elapsed.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpalSink;

struct PlaybackState {
    samples: Vec<f32>,
    pos: usize,
}

impl AudioSink for CpalSink {
    fn play(&self, buffer: AudioBuffer) -> Result<()> {
        if buffer.is_empty() {
            return Ok(());
        }

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Playback("no default output device".into()))?;
        let supported = device
            .default_output_config()
            .map_err(|e| Error::Playback(e.to_string()))?;
        let sample_format = supported.sample_format();
        let config: StreamConfig = supported.into();

        let mono = buffer.downmix();
        let samples = resample(&mono, buffer.sample_rate(), config.sample_rate.0)?;
        debug!(
            frames = samples.len(),
            device_rate = config.sample_rate.0,
            device_channels = config.channels,
            "starting playback"
        );

        let device_rate = config.sample_rate.0.max(1) as f64;
        let limit = Duration::from_secs_f64(samples.len() as f64 / device_rate) + DRAIN_MARGIN;
        let state = Arc::new(Mutex::new(PlaybackState { samples, pos: 0 }));
        let finished = Arc::new(AtomicBool::new(false));
        let failed = Arc::new(AtomicBool::new(false));

        let stream = match sample_format {
            cpal::SampleFormat::F32 => {
                build_stream::<f32>(&device, &config, &state, &finished, &failed)?
            }
            cpal::SampleFormat::F64 => {
                build_stream::<f64>(&device, &config, &state, &finished, &failed)?
            }
            cpal::SampleFormat::I16 => {
                build_stream::<i16>(&device, &config, &state, &finished, &failed)?
            }
            cpal::SampleFormat::U16 => {
                build_stream::<u16>(&device, &config, &state, &finished, &failed)?
            }
            cpal::SampleFormat::I32 => {
                build_stream::<i32>(&device, &config, &state, &finished, &failed)?
            }
            cpal::SampleFormat::U8 => {
                build_stream::<u8>(&device, &config, &state, &finished, &failed)?
            }
            other => {
                return Err(Error::Playback(format!(
                    "unsupported sample format: {:?}",
                    other
                )))
            }
        };
        stream.play().map_err(|e| Error::Playback(e.to_string()))?;

        wait_for_drain(&finished, &failed, limit)?;
        // let the device flush its last period
        std::thread::sleep(Duration::from_millis(100));
        Ok(())
    }
}

fn wait_for_drain(finished: &AtomicBool, failed: &AtomicBool, limit: Duration) -> Result<()> {
    let deadline = Instant::now() + limit;
    loop {
        if failed.load(Ordering::Relaxed) {
            return Err(Error::Playback("output stream failed".into()));
        }
        if finished.load(Ordering::Relaxed) {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(Error::Playback("playback timed out".into()));
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    state: &Arc<Mutex<PlaybackState>>,
    finished: &Arc<AtomicBool>,
    failed: &Arc<AtomicBool>,
) -> Result<cpal::Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels.max(1) as usize;
    let state = Arc::clone(state);
    let finished = Arc::clone(finished);
    let failed = Arc::clone(failed);

    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                let Ok(mut st) = state.lock() else {
                    return;
                };
                for frame in data.chunks_mut(channels) {
                    let value = if st.pos < st.samples.len() {
                        let v = st.samples[st.pos];
                        st.pos += 1;
                        v
                    } else {
                        finished.store(true, Ordering::Relaxed);
                        0.0
                    };
                    for out in frame.iter_mut() {
                        *out = <T as Sample>::from_sample(value);
                    }
                }
            },
            move |err| {
                error!(error = %err, "an error occurred on the output audio stream");
                failed.store(true, Ordering::Relaxed);
            },
            None,
        )
        .map_err(|e| Error::Playback(e.to_string()))
}

fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>> {
    if from_rate == to_rate || samples.is_empty() {
        return Ok(samples.to_vec());
    }

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };
    let ratio = to_rate as f64 / from_rate as f64;
    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, samples.len(), 1)
        .map_err(|e| Error::Playback(e.to_string()))?;
    let mut output = resampler
        .process(&[samples], None)
        .map_err(|e| Error::Playback(e.to_string()))?;
    Ok(output.pop().unwrap_or_default())
}
