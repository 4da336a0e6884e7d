//! Audio domain: play and stop requests.

use bevy::ecs::message::Message;

use crate::audio::SoundId;

/// A request against the sound bank. Requests sent in one frame are applied in send order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundRequest {
    /// (Re)start a sound.
    Play(SoundId),
    /// Stop every playing instance of a sound.
    Stop(SoundId),
}

impl SoundRequest {
    pub fn id(&self) -> SoundId {
        match *self {
            SoundRequest::Play(id) | SoundRequest::Stop(id) => id,
        }
    }
}

impl Message for SoundRequest {}
