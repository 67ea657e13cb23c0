use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::classification::PatientContext;
use crate::models::DistanceUnit;
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

/// What the user has told us about themselves; used to pre-fill new walk tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientProfile {
    /// Left `None` until the user answers; classification then uses the
    /// healthy targets.
    pub has_copd: Option<bool>,
    pub oxygen_on: bool,
    pub default_oxygen_flow: Option<f64>,
    pub distance_unit: DistanceUnit,
}

impl Default for PatientProfile {
    fn default() -> Self {
        Self {
            has_copd: None,
            oxygen_on: false,
            default_oxygen_flow: None,
            distance_unit: DistanceUnit::Meters,
        }
    }
}

impl PatientProfile {
    pub fn walk_test_context(&self) -> PatientContext {
        PatientContext::new(
            self.has_copd,
            Some(self.oxygen_on),
            self.oxygen_on.then_some(self.default_oxygen_flow).flatten(),
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct UserSettings {
    profile: PatientProfile,
}

pub struct ProfileStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!(
                    "Ignoring unreadable settings in {}: {}",
                    path.display(),
                    err
                );
                UserSettings::default()
            })
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn profile(&self) -> Result<PatientProfile> {
        let guard = self
            .data
            .read()
            .map_err(|_| anyhow!("settings lock poisoned"))?;
        Ok(guard.profile.clone())
    }

    pub fn update_profile(&self, profile: PatientProfile) -> Result<()> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| anyhow!("settings lock poisoned"))?;
        guard.profile = profile;
        self.persist(&guard)?;
        log_info!("Saved patient profile to {}", self.path.display());
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let data: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        let mut guard = self
            .data
            .write()
            .map_err(|_| anyhow!("settings lock poisoned"))?;
        *guard = data;
        Ok(())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
