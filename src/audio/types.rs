//! Audio domain: sound identifiers and clip definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every sound the game can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Jump,
    Dash,
    Land,
    Music,
}

impl SoundId {
    pub const ALL: [SoundId; 4] = [SoundId::Jump, SoundId::Dash, SoundId::Land, SoundId::Music];

    /// Manifest key for this sound.
    pub fn name(self) -> &'static str {
        match self {
            SoundId::Jump => "jump",
            SoundId::Dash => "dash",
            SoundId::Land => "land",
            SoundId::Music => "music",
        }
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sound name that does not match any [`SoundId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSound(pub String);

impl fmt::Display for UnknownSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sound '{}' not found", self.0)
    }
}

impl std::error::Error for UnknownSound {}

impl FromStr for SoundId {
    type Err = UnknownSound;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoundId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSound(s.to_string()))
    }
}

/// Upper bound for volume and pitch.
pub const MAX_GAIN: f32 = 4.0;

/// One clip entry in the sound manifest.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SoundDef {
    /// Clip path, relative to assets/.
    pub path: String,
    #[serde(default = "unit_gain")]
    pub volume: f32,
    #[serde(default = "unit_gain")]
    pub pitch: f32,
    #[serde(default)]
    pub looping: bool,
}

fn unit_gain() -> f32 {
    1.0
}

impl SoundDef {
    /// Clamp volume and pitch into `[0, MAX_GAIN]`. Returns true if anything changed.
    pub fn clamp_gains(&mut self) -> bool {
        let volume = self.volume.clamp(0.0, MAX_GAIN);
        let pitch = self.pitch.clamp(0.0, MAX_GAIN);
        let changed = volume != self.volume || pitch != self.pitch;
        self.volume = volume;
        self.pitch = pitch;
        changed
    }
}
