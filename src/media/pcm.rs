//! Raw PCM decoding for speech replies.

use base64::Engine as _;

use crate::{Error, ErrorContext, Result};

/// Sample rate of the speech model's PCM output.
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;
/// Speech replies are mono.
pub const SPEECH_CHANNELS: u16 = 1;

/// Decoded audio, one normalized `[-1, 1)` sample vector per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> u16 {
        self.channels.len() as u16
    }

    /// Number of sample frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.channels.first().map(Vec::len).unwrap_or(0)
    }

    pub fn channel_data(&self, channel: usize) -> Option<&[f32]> {
        self.channels.get(channel).map(Vec::as_slice)
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / self.sample_rate as f64
    }

    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }

    /// Average all channels into one.
    pub fn downmix(&self) -> Vec<f32> {
        let count = self.channels.len().max(1) as f32;
        (0..self.frames())
            .map(|i| self.channels.iter().map(|c| c[i]).sum::<f32>() / count)
            .collect()
    }
}

/// Decode base64 into raw bytes.
pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(data.trim())
        .map_err(|e| {
            Error::decode_with_context(
                format!("invalid base64 payload: {}", e),
                ErrorContext::new().with_source("pcm_codec"),
            )
        })
}

pub fn encode_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Decode interleaved 16-bit little-endian PCM.
///
/// Frame count is `bytes.len() / 2 / channels`; a trailing partial frame is
/// dropped. Each sample is `raw / 32768.0`.
pub fn decode_pcm16(bytes: &[u8], sample_rate: u32, channels: u16) -> Result<AudioBuffer> {
    if channels == 0 {
        return Err(Error::validation_with_context(
            "channel count must be at least 1",
            ErrorContext::new()
                .with_field_path("channels")
                .with_source("pcm_codec"),
        ));
    }
    let channel_count = channels as usize;
    let frames = bytes.len() / 2 / channel_count;

    let mut planar: Vec<Vec<f32>> = (0..channel_count)
        .map(|_| Vec::with_capacity(frames))
        .collect();
    for (i, pair) in bytes.chunks_exact(2).take(frames * channel_count).enumerate() {
        let raw = i16::from_le_bytes([pair[0], pair[1]]);
        planar[i % channel_count].push(raw as f32 / 32768.0);
    }

    Ok(AudioBuffer {
        sample_rate,
        channels: planar,
    })
}

/// Decode a base64 speech payload (24 kHz mono PCM).
pub fn decode_speech(base64_pcm: &str) -> Result<AudioBuffer> {
    let bytes = decode_base64(base64_pcm)?;
    decode_pcm16(&bytes, SPEECH_SAMPLE_RATE, SPEECH_CHANNELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcm_bytes(samples: &[i16]) -> Vec<u8> {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    #[test]
    fn test_decode_stereo() {
        let raw: [i16; 6] = [0, 16384, -32768, 32767, -1, 1];
        let bytes = pcm_bytes(&raw);
        let buf = decode_pcm16(&bytes, 24_000, 2).unwrap();

        assert_eq!(buf.frames(), bytes.len() / 2 / 2);
        assert_eq!(buf.channel_count(), 2);
        let left = buf.channel_data(0).unwrap();
        let right = buf.channel_data(1).unwrap();
        for frame in 0..buf.frames() {
            assert_eq!(left[frame], raw[frame * 2] as f32 / 32768.0);
            assert_eq!(right[frame], raw[frame * 2 + 1] as f32 / 32768.0);
        }
        assert_eq!(left[1], -1.0);
        assert_eq!(right[0], 0.5);
    }

    #[test]
    fn test_partial_frame_dropped() {
        // 5 bytes of stereo: one full frame (4 bytes) plus a stray byte
        let buf = decode_pcm16(&[1, 0, 2, 0, 9], 24_000, 2).unwrap();
        assert_eq!(buf.frames(), 1);
        assert_eq!(buf.channel_data(1).unwrap()[0], 2.0 / 32768.0);
    }

    #[test]
    fn test_every_channel_preallocated() {
        let buf = decode_pcm16(&pcm_bytes(&[1, 2, 3, 4, 5, 6]), 24_000, 3).unwrap();
        for channel in &buf.channels {
            assert_eq!(channel.len(), 2);
            assert_eq!(channel.capacity(), 2);
        }
    }

    #[test]
    fn test_zero_channels_rejected() {
        assert!(decode_pcm16(&[0, 0], 24_000, 0).is_err());
    }

    #[test]
    fn test_decode_speech_mono() {
        let b64 = encode_base64(&pcm_bytes(&[100, -100, 0, 200]));
        let buf = decode_speech(&b64).unwrap();
        assert_eq!(buf.sample_rate(), SPEECH_SAMPLE_RATE);
        assert_eq!(buf.channel_count(), 1);
        assert_eq!(buf.frames(), 4);
        assert!((buf.duration_secs() - 4.0 / 24_000.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_base64() {
        assert!(decode_speech("@@not base64@@").is_err());
    }

    #[test]
    fn test_downmix() {
        let buf = decode_pcm16(&pcm_bytes(&[16384, 0]), 24_000, 2).unwrap();
        assert_eq!(buf.downmix(), vec![0.25]);
    }
}
