//! JSON-file profile store.
//!
//! The whole store is one document: the active profile id plus every saved
//! profile. It is loaded, changed in memory and written back on `persist`.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ProfileError, StoreError};
use crate::profile::{generate_id, BrandProfile};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreFile {
    active_profile_id: Option<String>,
    #[serde(default)]
    profiles: Vec<BrandProfile>,
}

pub struct ProfileStore {
    path: PathBuf,
    data: StoreFile,
}

impl ProfileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let data = match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreFile::default(),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        debug!(path = %path.display(), profiles = data.profiles.len(), "loaded profile store");
        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// Writes the store through a sibling temp file and a rename.
    pub fn persist(&self) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }

    pub fn list(&self) -> &[BrandProfile] {
        &self.data.profiles
    }

    pub fn get(&self, id: &str) -> Option<&BrandProfile> {
        self.data.profiles.iter().find(|p| p.id == id)
    }

    fn require(&self, id: &str) -> Result<&BrandProfile, StoreError> {
        self.get(id).ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Inserts or replaces by id. `updated_at` is always refreshed.
    /// `created_at` is stamped on insert and carried over from the stored
    /// record on replace, whatever the caller's copy holds.
    pub fn save(&mut self, mut profile: BrandProfile) -> Result<(), StoreError> {
        profile.validate()?;

        let now = Utc::now();
        profile.updated_at = now;

        match self.data.profiles.iter().position(|p| p.id == profile.id) {
            Some(index) => {
                profile.created_at = self.data.profiles[index].created_at;
                self.data.profiles[index] = profile;
            }
            None => {
                profile.created_at = now;
                info!(id = %profile.id, name = %profile.name, "added profile");
                self.data.profiles.push(profile);
            }
        }
        Ok(())
    }

    /// Removes a profile. Deleting the active profile moves the active
    /// marker to the first remaining profile, if any.
    pub fn delete(&mut self, id: &str) -> Result<BrandProfile, StoreError> {
        let index = self
            .data
            .profiles
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        let removed = self.data.profiles.remove(index);

        if self.data.active_profile_id.as_deref() == Some(id) {
            self.data.active_profile_id = self.data.profiles.first().map(|p| p.id.clone());
        }
        Ok(removed)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.data.active_profile_id.as_deref()
    }

    pub fn active(&self) -> Option<&BrandProfile> {
        self.active_id().and_then(|id| self.get(id))
    }

    pub fn set_active(&mut self, id: Option<&str>) -> Result<(), StoreError> {
        if let Some(id) = id {
            self.require(id)?;
        }
        self.data.active_profile_id = id.map(str::to_string);
        Ok(())
    }

    /// Pretty-printed JSON for one profile.
    pub fn export(&self, id: &str) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self.require(id)?)?)
    }

    /// Adds a profile from exported JSON under a fresh id. `name`, `colors`
    /// and `typography` are required; other sections default.
    pub fn import(&mut self, json: &str) -> Result<BrandProfile, StoreError> {
        let mut value: Value = serde_json::from_str(json)?;
        let object = value
            .as_object_mut()
            .ok_or_else(|| StoreError::MalformedImport("expected a JSON object".to_string()))?;

        let has_name = object
            .get("name")
            .and_then(Value::as_str)
            .is_some_and(|n| !n.is_empty());
        if !has_name || !object.contains_key("colors") || !object.contains_key("typography") {
            return Err(StoreError::MalformedImport(
                "name, colors and typography are required".to_string(),
            ));
        }

        let now = Utc::now();
        object.insert("id".to_string(), Value::String(generate_id()));
        object.insert("createdAt".to_string(), serde_json::to_value(now)?);
        object.insert("updatedAt".to_string(), serde_json::to_value(now)?);

        let mut profile: BrandProfile = serde_json::from_value(value)?;
        profile.name.push_str(" (Imported)");
        self.save(profile.clone())?;
        Ok(profile)
    }

    pub fn duplicate(&mut self, id: &str) -> Result<BrandProfile, StoreError> {
        let mut copy = self.require(id)?.clone();
        copy.id = generate_id();
        copy.name.push_str(" (Copy)");
        self.save(copy.clone())?;
        Ok(copy)
    }
}
