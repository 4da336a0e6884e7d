//! Sound manifest loading and the clip lookup table.
//!
//! Loads the sound manifest JSON which maps sound names to clip paths and
//! playback settings, and preloads a handle for every clip.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::audio::{SoundDef, SoundId};

/// Resource holding every configured sound, keyed by id.
#[derive(Resource, Default)]
pub struct SoundBank {
    /// Version of the manifest schema.
    pub version: u32,
    pub sounds: HashMap<SoundId, SoundEntry>,
}

/// A configured sound with its preloaded clip.
#[derive(Debug, Clone)]
pub struct SoundEntry {
    pub def: SoundDef,
    pub handle: Handle<AudioSource>,
}

/// Raw manifest JSON structure.
#[derive(Debug, Deserialize)]
pub struct SoundManifest {
    pub version: u32,
    pub sounds: HashMap<String, SoundDef>,
}

/// Manifest entries split into usable definitions and rejected names.
#[derive(Debug, Default)]
pub struct ResolvedManifest {
    pub sounds: Vec<(SoundId, SoundDef)>,
    pub unknown: Vec<String>,
    /// Sounds whose volume or pitch had to be clamped.
    pub clamped: Vec<SoundId>,
}

impl SoundManifest {
    pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Resolve names to ids and clamp gains. Output is sorted by name so logs are stable.
    pub fn resolve(self) -> ResolvedManifest {
        let mut resolved = ResolvedManifest::default();
        let mut entries: Vec<_> = self.sounds.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, mut def) in entries {
            match name.parse::<SoundId>() {
                Ok(id) => {
                    if def.clamp_gains() {
                        resolved.clamped.push(id);
                    }
                    resolved.sounds.push((id, def));
                }
                Err(_) => resolved.unknown.push(name),
            }
        }
        resolved
    }
}

impl SoundBank {
    pub fn insert(&mut self, id: SoundId, def: SoundDef, handle: Handle<AudioSource>) {
        self.sounds.insert(id, SoundEntry { def, handle });
    }

    pub fn get(&self, id: SoundId) -> Option<&SoundEntry> {
        self.sounds.get(&id)
    }

    pub fn contains(&self, id: SoundId) -> bool {
        self.sounds.contains_key(&id)
    }

    /// Ids with no manifest entry.
    pub fn missing(&self) -> Vec<SoundId> {
        SoundId::ALL
            .into_iter()
            .filter(|id| !self.contains(*id))
            .collect()
    }

    /// Load the manifest from a JSON file.
    pub fn load_from_file(&mut self, path: &str, asset_server: &AssetServer) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!("Sound manifest not found at {:?}, using empty bank", path);
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sound manifest: {}", e);
                return;
            }
        };

        let manifest = match SoundManifest::parse(&contents) {
            Ok(m) => m,
            Err(e) => {
                error!("Failed to parse sound manifest: {}", e);
                return;
            }
        };

        self.version = manifest.version;
        let resolved = manifest.resolve();

        for name in &resolved.unknown {
            warn!("Sound manifest entry '{}' does not match any sound, skipping", name);
        }
        for id in &resolved.clamped {
            warn!("Sound '{}' volume/pitch clamped to [0, 4]", id);
        }

        for (id, def) in resolved.sounds {
            let handle = asset_server.load(def.path.clone());
            self.insert(id, def, handle);
        }

        for id in self.missing() {
            warn!("Sound '{}' has no manifest entry; it will be silent", id);
        }

        info!("Loaded sound manifest v{} with {} sounds", self.version, self.sounds.len());
    }
}
