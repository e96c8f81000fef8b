//! Versioned on-disk state file.
//!
//! The file is UTF-8 text, one section per line:
//!
//! ```text
//! FTRK 1
//! profile {"name":"Ada","age":30,"weight_kg":65.0,"height_cm":170.0}
//! activities [{"date":"2025-01-10","category":"Cardio","type":"Running",...}]
//! goals [{"id":"...","goal_type":"Calories Burned","target":1000.0,...}]
//! ```
//!
//! The first line holds the magic and the format version. Each following line starts
//! with its section tag and carries one JSON document; `profile` is `null` when unset.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::activities::Activity;
use crate::goals::Goal;
use crate::profile::UserProfile;

/// Magic identifier at the start of the file.
pub const MAGIC: &str = "FTRK";

/// File format version.
pub const FORMAT_VERSION: u32 = 1;

/// Default file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "fitness_tracker_data.txt";

const PROFILE_TAG: &str = "profile";
const ACTIVITIES_TAG: &str = "activities";
const GOALS_TAG: &str = "goals";

/// Everything the tracker persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    pub profile: Option<UserProfile>,
    pub activities: Vec<Activity>,
    pub goals: Vec<Goal>,
}

/// Data file errors.
#[derive(Debug, Error)]
pub enum DataFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file format")]
    InvalidMagic,

    #[error("Unsupported version: {0}")]
    UnsupportedVersion(u32),

    #[error("Corrupt data file: {0}")]
    Corrupt(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Handle to the state file at a fixed path.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the state file. A missing file yields empty state.
    pub fn load(&self) -> Result<TrackerState, DataFileError> {
        if !self.path.exists() {
            tracing::info!("No data file at {}, starting empty", self.path.display());
            return Ok(TrackerState::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let state = decode(&content)?;

        tracing::info!(
            "Loaded {} activities and {} goals from {}",
            state.activities.len(),
            state.goals.len(),
            self.path.display()
        );
        Ok(state)
    }

    /// Write the state file atomically.
    ///
    /// The content goes to a sibling temporary file which is then renamed over the
    /// primary, so an interrupted save leaves the previous file intact.
    pub fn save(&self, state: &TrackerState) -> Result<(), DataFileError> {
        let content = encode(state)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        if let Err(e) = write_synced(&temp_path, content.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        // Atomic rename
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::info!(
            "Saved {} activities and {} goals to {}",
            state.activities.len(),
            state.goals.len(),
            self.path.display()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Default for DataFile {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Serialize state to the file format.
pub fn encode(state: &TrackerState) -> Result<String, DataFileError> {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", MAGIC, FORMAT_VERSION));
    out.push_str(&format!(
        "{} {}\n",
        PROFILE_TAG,
        serde_json::to_string(&state.profile)?
    ));
    out.push_str(&format!(
        "{} {}\n",
        ACTIVITIES_TAG,
        serde_json::to_string(&state.activities)?
    ));
    out.push_str(&format!(
        "{} {}\n",
        GOALS_TAG,
        serde_json::to_string(&state.goals)?
    ));
    Ok(out)
}

/// Parse the file format back into state.
pub fn decode(content: &str) -> Result<TrackerState, DataFileError> {
    let mut lines = content.lines();

    let header = lines
        .next()
        .ok_or_else(|| DataFileError::Corrupt("file is empty".to_string()))?;
    let (magic, version) = header.split_once(' ').ok_or(DataFileError::InvalidMagic)?;
    if magic != MAGIC {
        return Err(DataFileError::InvalidMagic);
    }
    let version: u32 = version
        .trim()
        .parse()
        .map_err(|_| DataFileError::Corrupt(format!("bad version '{}'", version)))?;
    if version != FORMAT_VERSION {
        return Err(DataFileError::UnsupportedVersion(version));
    }

    let profile = serde_json::from_str(section(&mut lines, PROFILE_TAG)?)?;
    let activities = serde_json::from_str(section(&mut lines, ACTIVITIES_TAG)?)?;
    let goals = serde_json::from_str(section(&mut lines, GOALS_TAG)?)?;

    if lines.any(|line| !line.trim().is_empty()) {
        return Err(DataFileError::Corrupt(
            "unexpected content after goals".to_string(),
        ));
    }

    let state = TrackerState {
        profile,
        activities,
        goals,
    };
    check_records(&state)?;
    Ok(state)
}

/// Apply the same field rules the constructors enforce to every decoded record.
fn check_records(state: &TrackerState) -> Result<(), DataFileError> {
    if let Some(profile) = &state.profile {
        profile
            .validate()
            .map_err(|e| DataFileError::Corrupt(format!("profile: {}", e)))?;
    }
    for (index, activity) in state.activities.iter().enumerate() {
        activity
            .validate()
            .map_err(|e| DataFileError::Corrupt(format!("activity {}: {}", index + 1, e)))?;
    }
    for goal in &state.goals {
        goal.validate()
            .map_err(|e| DataFileError::Corrupt(format!("goal {}: {}", goal.id, e)))?;
    }
    Ok(())
}

fn section<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    tag: &str,
) -> Result<&'a str, DataFileError> {
    let line = lines
        .next()
        .ok_or_else(|| DataFileError::Corrupt(format!("missing {} section", tag)))?;
    match line.split_once(' ') {
        Some((found, payload)) if found == tag => Ok(payload),
        _ => Err(DataFileError::Corrupt(format!(
            "expected {} section",
            tag
        ))),
    }
}
