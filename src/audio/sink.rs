//! Audio domain: the fire-and-forget sound trigger capability.

use bevy::ecs::message::MessageWriter;

use crate::audio::{SoundId, SoundRequest};

/// Where gameplay code sends sound cues. Nothing is returned to the caller.
pub trait SoundSink {
    fn play(&mut self, id: SoundId);
}

impl SoundSink for MessageWriter<'_, SoundRequest> {
    fn play(&mut self, id: SoundId) {
        self.write(SoundRequest::Play(id));
    }
}

/// Records cues in order.
impl SoundSink for Vec<SoundId> {
    fn play(&mut self, id: SoundId) {
        self.push(id);
    }
}
