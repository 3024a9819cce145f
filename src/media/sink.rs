//! Audio output seam.

use std::sync::{Arc, Mutex};

use tracing::debug;

use super::pcm::AudioBuffer;
use crate::Result;

/// Destination for decoded audio. Implementations may block until playback ends.
pub trait AudioSink: Send + Sync {
    fn play(&self, buffer: AudioBuffer) -> Result<()>;
}

/// Discards audio. Used when no output device is compiled in.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&self, buffer: AudioBuffer) -> Result<()> {
        debug!(
            frames = buffer.frames(),
            sample_rate = buffer.sample_rate(),
            "no audio output configured, discarding buffer"
        );
        Ok(())
    }
}

/// Keeps every buffer it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    buffers: Arc<Mutex<Vec<AudioBuffer>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffers(&self) -> Vec<AudioBuffer> {
        self.buffers
            .lock()
            .map(|b| b.clone())
            .unwrap_or_default()
    }
}

impl AudioSink for RecordingSink {
    fn play(&self, buffer: AudioBuffer) -> Result<()> {
        if let Ok(mut buffers) = self.buffers.lock() {
            buffers.push(buffer);
        }
        Ok(())
    }
}

/// Sink used when the builder is not given one.
pub fn default_sink() -> Arc<dyn AudioSink> {
    #[cfg(feature = "playback")]
    {
        Arc::new(super::playback::CpalSink::default())
    }
    #[cfg(not(feature = "playback"))]
    {
        Arc::new(NullSink)
    }
}
