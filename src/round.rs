use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CoreError;
use crate::model::{Player, RosterEntry, TeeSet, WagerInstance};

/// A group's round as handed over by the app shell: tee, roster with raw
/// scores, and the side games they agreed on.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundFile {
    #[serde(default)]
    pub played_on: Option<NaiveDate>,
    #[serde(default)]
    pub course: Option<String>,
    pub tee: TeeSet,
    pub roster: Vec<RosterEntry>,
    #[serde(default)]
    pub wagers: Vec<WagerInstance>,
}

impl RoundFile {
    /// # Errors
    /// Returns an error if the JSON is malformed or a team config is invalid.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    /// Returns `CoreError::NotFound` or `CoreError::Io` if the file cannot be
    /// read, otherwise the parse errors of [`RoundFile::from_json`].
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Players with course handicap and stroke allocation for this tee.
    pub fn players(&self) -> Vec<Player> {
        self.roster
            .iter()
            .map(|entry| Player::enrich(entry, &self.tee))
            .collect()
    }
}
