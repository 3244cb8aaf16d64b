//! Voice heuristic: an energy bucket derived from upload size alone.
//!
//! No audio is decoded. Longer or louder recordings produce larger payloads,
//! and the payload size is the only signal used.

use serde::{Deserialize, Serialize};

const BYTES_PER_KB: f64 = 1024.0;

/// Energy bucket for a voice upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceEnergy {
    VeryLow,
    LowModerate,
    Moderate,
    High,
}

impl VoiceEnergy {
    /// Bucket for a payload of `len` bytes.
    #[must_use]
    pub fn from_len(len: usize) -> Self {
        let size_kb = len as f64 / BYTES_PER_KB;
        if size_kb < 20.0 {
            VoiceEnergy::VeryLow
        } else if size_kb < 80.0 {
            VoiceEnergy::LowModerate
        } else if size_kb < 200.0 {
            VoiceEnergy::Moderate
        } else {
            VoiceEnergy::High
        }
    }

    /// Mood label reported to callers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VoiceEnergy::VeryLow => "very low energy / very short recording",
            VoiceEnergy::LowModerate => "low to moderate energy",
            VoiceEnergy::Moderate => "moderate energy",
            VoiceEnergy::High => "high energy / long or loud recording",
        }
    }

    /// Energy in `[0, 1]`.
    #[must_use]
    pub fn energy(self) -> f64 {
        match self {
            VoiceEnergy::VeryLow => 0.2,
            VoiceEnergy::LowModerate => 0.4,
            VoiceEnergy::Moderate => 0.6,
            VoiceEnergy::High => 0.85,
        }
    }

    /// Tempo in beats per minute.
    #[must_use]
    pub fn tempo(self) -> f64 {
        match self {
            VoiceEnergy::VeryLow => 60.0,
            VoiceEnergy::LowModerate => 80.0,
            VoiceEnergy::Moderate => 100.0,
            VoiceEnergy::High => 120.0,
        }
    }
}

/// Features reported for a voice upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceFeatures {
    pub mood: String,
    pub energy: f64,
    pub tempo: f64,
}

impl From<VoiceEnergy> for VoiceFeatures {
    fn from(bucket: VoiceEnergy) -> Self {
        Self {
            mood: bucket.label().to_owned(),
            energy: bucket.energy(),
            tempo: bucket.tempo(),
        }
    }
}

/// Classify an upload by its byte length. Total over every input.
#[must_use]
pub fn classify_voice(audio: &[u8]) -> VoiceFeatures {
    let bucket = VoiceEnergy::from_len(audio.len());
    tracing::debug!(bytes = audio.len(), ?bucket, "voice classified");
    bucket.into()
}
