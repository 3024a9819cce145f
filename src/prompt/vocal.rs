//! Deterministic mapping from the vocal pad coordinates to descriptors.

use std::fmt;

/// Beyond this distance from the centre the prompt names a gender / pitch.
pub const DESCRIPTOR_THRESHOLD: f64 = 30.0;

/// Beyond this distance from the centre the voice preview picks a gendered voice.
pub const VOICE_THRESHOLD: f64 = 20.0;

/// Vocal descriptor for the style prompt, e.g. `"Female vocals, High pitch"`.
pub fn vocal_descriptor(vocal_x: f64, vocal_y: f64) -> String {
    let mut descriptor = String::from(if vocal_x < -DESCRIPTOR_THRESHOLD {
        "Male vocals"
    } else if vocal_x > DESCRIPTOR_THRESHOLD {
        "Female vocals"
    } else {
        "Androgynous vocals"
    });

    if vocal_y < -DESCRIPTOR_THRESHOLD {
        descriptor.push_str(", Low pitch");
    } else if vocal_y > DESCRIPTOR_THRESHOLD {
        descriptor.push_str(", High pitch");
    }
    descriptor
}

/// Prebuilt speech voices used for previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    /// Low male voice.
    Fenrir,
    /// Female voice.
    Kore,
    /// Neutral voice.
    Puck,
}

impl Voice {
    /// Pick a preview voice from the male/female axis.
    pub fn for_vocal_x(vocal_x: f64) -> Self {
        if vocal_x < -VOICE_THRESHOLD {
            Voice::Fenrir
        } else if vocal_x > VOICE_THRESHOLD {
            Voice::Kore
        } else {
            Voice::Puck
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Fenrir => "Fenrir",
            Voice::Kore => "Kore",
            Voice::Puck => "Puck",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
