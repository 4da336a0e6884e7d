//! Audio domain: named sounds, the clip bank, and playback requests.

mod bank;
mod events;
mod sink;
mod systems;
#[cfg(test)]
mod tests;
mod types;

pub use bank::{ResolvedManifest, SoundBank, SoundEntry, SoundManifest};
pub use events::SoundRequest;
pub use sink::SoundSink;
pub use systems::{PlaybackPlan, SoundInstance, plan_playback};
pub use types::{MAX_GAIN, SoundDef, SoundId, UnknownSound};

use bevy::prelude::*;

use crate::audio::systems::{load_sound_bank, process_sound_requests, start_music};

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundBank>()
            .add_message::<SoundRequest>()
            .add_systems(Startup, (load_sound_bank, start_music).chain())
            .add_systems(PostUpdate, process_sound_requests);
    }
}
