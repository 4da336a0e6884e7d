//! Audio domain: systems that turn play/stop requests into audio entities.

use bevy::audio::Volume;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::collections::HashSet;

use crate::audio::{SoundBank, SoundDef, SoundId, SoundRequest};

/// Tags an entity playing a sound from the bank.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundInstance(pub SoundId);

/// Entities to despawn and sounds to start for one batch of requests.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlaybackPlan {
    pub despawn: Vec<Entity>,
    pub spawn: Vec<SoundId>,
    /// Requests for sounds the bank does not know.
    pub unresolved: Vec<SoundId>,
}

/// Decide what to do for a batch of requests against the live sound instances.
///
/// Playing a sound restarts it: live instances of that id are stopped first.
/// A later request for the same id replaces an earlier one in the same batch.
pub fn plan_playback(
    requests: &[SoundRequest],
    bank: &SoundBank,
    live: &[(Entity, SoundId)],
) -> PlaybackPlan {
    let mut plan = PlaybackPlan::default();
    let mut despawned = HashSet::new();

    for request in requests {
        let id = request.id();

        if !bank.contains(id) {
            if !plan.unresolved.contains(&id) {
                plan.unresolved.push(id);
            }
            continue;
        }

        for (entity, live_id) in live {
            if *live_id == id && despawned.insert(*entity) {
                plan.despawn.push(*entity);
            }
        }
        plan.spawn.retain(|pending| *pending != id);

        if let SoundRequest::Play(id) = *request {
            plan.spawn.push(id);
        }
    }

    plan
}

pub(crate) fn playback_settings(def: &SoundDef) -> PlaybackSettings {
    let base = if def.looping {
        PlaybackSettings::LOOP
    } else {
        PlaybackSettings::DESPAWN
    };
    base.with_volume(Volume::Linear(def.volume))
        .with_speed(def.pitch)
}

/// System to load the sound manifest at startup.
pub(crate) fn load_sound_bank(mut bank: ResMut<SoundBank>, asset_server: Res<AssetServer>) {
    bank.load_from_file("assets/audio/manifest.json", &asset_server);
}

/// Start background music if the bank has any.
pub(crate) fn start_music(bank: Res<SoundBank>, mut requests: MessageWriter<SoundRequest>) {
    if bank.contains(SoundId::Music) {
        info!("Starting background music");
        requests.write(SoundRequest::Play(SoundId::Music));
    }
}

pub(crate) fn process_sound_requests(
    mut commands: Commands,
    mut events: MessageReader<SoundRequest>,
    bank: Res<SoundBank>,
    instances: Query<(Entity, &SoundInstance)>,
) {
    let requests: Vec<SoundRequest> = events.read().copied().collect();

    if requests.is_empty() {
        return;
    }

    let live: Vec<(Entity, SoundId)> = instances
        .iter()
        .map(|(entity, instance)| (entity, instance.0))
        .collect();

    let plan = plan_playback(&requests, &bank, &live);

    for id in &plan.unresolved {
        warn!("Sound '{}' not found!", id);
    }

    for entity in plan.despawn {
        commands.entity(entity).despawn();
    }

    for id in plan.spawn {
        let Some(entry) = bank.get(id) else {
            continue;
        };
        debug!("Playing sound '{}'", id);
        commands.spawn((
            SoundInstance(id),
            AudioPlayer::new(entry.handle.clone()),
            playback_settings(&entry.def),
        ));
    }
}
