//! Audio domain: tests for sound names, manifest parsing, and playback planning.

use bevy::prelude::{Entity, Handle, World};

use super::{
    PlaybackPlan, SoundBank, SoundDef, SoundId, SoundManifest, SoundRequest, SoundSink,
    UnknownSound, plan_playback,
};

fn def(path: &str) -> SoundDef {
    SoundDef {
        path: path.to_string(),
        volume: 1.0,
        pitch: 1.0,
        looping: false,
    }
}

fn entities(count: usize) -> Vec<Entity> {
    let mut world = World::new();
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

fn bank_with(ids: &[SoundId]) -> SoundBank {
    let mut bank = SoundBank::default();
    for id in ids {
        bank.insert(*id, def(&format!("audio/{}.ogg", id)), Handle::default());
    }
    bank
}

// -----------------------------------------------------------------------------
// SoundId tests
// -----------------------------------------------------------------------------

#[test]
fn test_sound_names_parse_back() {
    for id in SoundId::ALL {
        assert_eq!(id.name().parse::<SoundId>(), Ok(id));
    }
}

#[test]
fn test_sound_name_parse_ignores_case_and_whitespace() {
    assert_eq!(" Jump ".parse::<SoundId>(), Ok(SoundId::Jump));
    assert_eq!("LAND".parse::<SoundId>(), Ok(SoundId::Land));
}

#[test]
fn test_unknown_sound_name() {
    let err = "footstep".parse::<SoundId>().unwrap_err();
    assert_eq!(err, UnknownSound("footstep".to_string()));
    assert_eq!(err.to_string(), "Sound 'footstep' not found");
}

#[test]
fn test_vec_sink_records_in_order() {
    let mut sink: Vec<SoundId> = Vec::new();
    sink.play(SoundId::Jump);
    sink.play(SoundId::Land);
    assert_eq!(sink, vec![SoundId::Jump, SoundId::Land]);
}

// -----------------------------------------------------------------------------
// Manifest tests
// -----------------------------------------------------------------------------

#[test]
fn test_manifest_parse_and_resolve() {
    let json = r#"{
        "version": 2,
        "sounds": {
            "jump": { "path": "audio/jump.ogg", "volume": 0.8 },
            "music": { "path": "audio/theme.ogg", "looping": true },
            "footstep": { "path": "audio/step.ogg" }
        }
    }"#;

    let manifest = SoundManifest::parse(json).unwrap();
    assert_eq!(manifest.version, 2);

    let resolved = manifest.resolve();
    assert_eq!(resolved.unknown, vec!["footstep".to_string()]);
    assert!(resolved.clamped.is_empty());
    assert_eq!(resolved.sounds.len(), 2);

    let (id, jump) = &resolved.sounds[0];
    assert_eq!(*id, SoundId::Jump);
    assert_eq!(jump.volume, 0.8);
    assert_eq!(jump.pitch, 1.0);
    assert!(!jump.looping);

    let (id, music) = &resolved.sounds[1];
    assert_eq!(*id, SoundId::Music);
    assert!(music.looping);
}

#[test]
fn test_manifest_clamps_gains() {
    let json = r#"{
        "version": 1,
        "sounds": { "dash": { "path": "audio/dash.ogg", "volume": 9.0, "pitch": -1.0 } }
    }"#;

    let resolved = SoundManifest::parse(json).unwrap().resolve();
    assert_eq!(resolved.clamped, vec![SoundId::Dash]);
    let (_, dash) = &resolved.sounds[0];
    assert_eq!(dash.volume, 4.0);
    assert_eq!(dash.pitch, 0.0);
}

#[test]
fn test_manifest_rejects_missing_path() {
    let json = r#"{ "version": 1, "sounds": { "jump": { "volume": 1.0 } } }"#;
    assert!(SoundManifest::parse(json).is_err());
}

#[test]
fn test_bank_reports_missing_sounds() {
    let bank = bank_with(&[SoundId::Jump, SoundId::Dash]);
    assert_eq!(bank.missing(), vec![SoundId::Land, SoundId::Music]);
}

// -----------------------------------------------------------------------------
// Playback planning tests
// -----------------------------------------------------------------------------

#[test]
fn test_play_spawns_new_instance() {
    let bank = bank_with(&[SoundId::Jump]);
    let plan = plan_playback(&[SoundRequest::Play(SoundId::Jump)], &bank, &[]);
    assert_eq!(
        plan,
        PlaybackPlan {
            despawn: vec![],
            spawn: vec![SoundId::Jump],
            unresolved: vec![],
        }
    );
}

#[test]
fn test_play_restarts_live_instance() {
    let bank = bank_with(&[SoundId::Jump, SoundId::Land]);
    let ids = entities(2);
    let (jump, land) = (ids[0], ids[1]);

    let plan = plan_playback(
        &[SoundRequest::Play(SoundId::Jump)],
        &bank,
        &[(jump, SoundId::Jump), (land, SoundId::Land)],
    );
    assert_eq!(plan.despawn, vec![jump]);
    assert_eq!(plan.spawn, vec![SoundId::Jump]);
}

#[test]
fn test_stop_despawns_all_instances_of_id() {
    let bank = bank_with(&[SoundId::Music]);
    let ids = entities(2);
    let (a, b) = (ids[0], ids[1]);

    let plan = plan_playback(
        &[SoundRequest::Stop(SoundId::Music)],
        &bank,
        &[(a, SoundId::Music), (b, SoundId::Music)],
    );
    assert_eq!(plan.despawn, vec![a, b]);
    assert!(plan.spawn.is_empty());
}

#[test]
fn test_stop_after_play_in_same_batch_cancels_spawn() {
    let bank = bank_with(&[SoundId::Dash]);
    let plan = plan_playback(
        &[
            SoundRequest::Play(SoundId::Dash),
            SoundRequest::Stop(SoundId::Dash),
        ],
        &bank,
        &[],
    );
    assert!(plan.spawn.is_empty());
}

#[test]
fn test_repeated_play_spawns_once_and_despawns_once() {
    let bank = bank_with(&[SoundId::Land]);
    let live = entities(1)[0];
    let plan = plan_playback(
        &[
            SoundRequest::Play(SoundId::Land),
            SoundRequest::Play(SoundId::Land),
        ],
        &bank,
        &[(live, SoundId::Land)],
    );
    assert_eq!(plan.despawn, vec![live]);
    assert_eq!(plan.spawn, vec![SoundId::Land]);
}

#[test]
fn test_missing_sound_is_noop() {
    let bank = bank_with(&[SoundId::Jump]);
    let plan = plan_playback(
        &[
            SoundRequest::Play(SoundId::Dash),
            SoundRequest::Stop(SoundId::Dash),
        ],
        &bank,
        &[],
    );
    assert!(plan.spawn.is_empty());
    assert!(plan.despawn.is_empty());
    assert_eq!(plan.unresolved, vec![SoundId::Dash]);
}

#[test]
fn test_bundled_manifest_covers_every_sound() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/audio/manifest.json");
    let contents = std::fs::read_to_string(path).unwrap();
    let resolved = SoundManifest::parse(&contents).unwrap().resolve();

    assert!(resolved.unknown.is_empty());
    assert!(resolved.clamped.is_empty());
    let ids: Vec<SoundId> = resolved.sounds.iter().map(|(id, _)| *id).collect();
    for id in SoundId::ALL {
        assert!(ids.contains(&id), "missing {}", id);
    }
}

// -----------------------------------------------------------------------------
// System wiring tests
// -----------------------------------------------------------------------------

fn sound_app() -> bevy::prelude::App {
    use bevy::prelude::*;

    use super::systems::process_sound_requests;

    let mut app = App::new();
    app.insert_resource(bank_with(&[SoundId::Dash]))
        .add_message::<SoundRequest>()
        .add_systems(Update, process_sound_requests);
    app
}

fn live_instances(app: &mut bevy::prelude::App) -> usize {
    let mut query = app.world_mut().query::<&super::SoundInstance>();
    query.iter(app.world()).count()
}

#[test]
fn test_requests_in_one_frame_apply_in_send_order() {
    let mut app = sound_app();
    app.world_mut().write_message(SoundRequest::Play(SoundId::Dash));
    app.world_mut().write_message(SoundRequest::Stop(SoundId::Dash));
    app.update();
    assert_eq!(live_instances(&mut app), 0);

    app.world_mut().write_message(SoundRequest::Stop(SoundId::Dash));
    app.world_mut().write_message(SoundRequest::Play(SoundId::Dash));
    app.update();
    assert_eq!(live_instances(&mut app), 1);
}
