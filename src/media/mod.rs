//! Media codec: base64/PCM conversion, `data:` URLs and audio output.

pub mod data_url;
pub mod pcm;
#[cfg(feature = "playback")]
pub mod playback;
pub mod sink;

pub use data_url::{data_url_mime_type, strip_data_url_prefix, to_data_uri};
pub use pcm::{decode_pcm16, decode_speech, AudioBuffer, SPEECH_CHANNELS, SPEECH_SAMPLE_RATE};
#[cfg(feature = "playback")]
pub use playback::CpalSink;
pub use sink::{AudioSink, NullSink, RecordingSink};
