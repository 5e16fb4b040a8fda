use std::fs;
use std::path::Path;

use sc_core::Result;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RosterFile {
    teams: Vec<TeamEntry>,
}

#[derive(Debug, Deserialize)]
struct TeamEntry {
    name: String,
}

/// Ordered list of known team names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(Into::into)
                // An empty name would match every article at offset 0.
                .filter(|name: &String| !name.is_empty())
                .collect(),
        }
    }

    /// Parses `{"teams": [{"name": ...}, ...]}`. Extra fields are ignored.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: RosterFile = serde_json::from_str(json)?;
        Ok(Self::new(file.teams.into_iter().map(|team| team.name)))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let roster = Self::from_json_str(&fs::read_to_string(path)?)?;
        debug!("Loaded {} teams from {}", roster.len(), path.display());
        Ok(roster)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
