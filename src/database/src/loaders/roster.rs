use draft_core::{Person, PersonId};
use log::debug;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const STATIC_ROSTER_JSON: &str = include_str!("../data/roster.json");

#[derive(Error, Debug)]
pub enum RosterLoadError {
    #[error("failed to read roster {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse roster {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate person id in roster: {0}")]
    DuplicateId(PersonId),

    #[error("person {0} has a blank name")]
    BlankName(PersonId),
}

pub struct RosterLoader;

impl RosterLoader {
    /// Sample roster bundled with the binary.
    pub fn load() -> Result<Vec<Person>, RosterLoadError> {
        Self::from_json(STATIC_ROSTER_JSON, "<embedded>")
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<Person>, RosterLoadError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|source| RosterLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json, &path.display().to_string())
    }

    pub fn from_json(json: &str, origin: &str) -> Result<Vec<Person>, RosterLoadError> {
        let people: Vec<Person> =
            serde_json::from_str(json).map_err(|source| RosterLoadError::Parse {
                origin: origin.to_string(),
                source,
            })?;

        Self::validate(&people)?;

        debug!("roster {} loaded: {} people", origin, people.len());

        Ok(people)
    }

    fn validate(people: &[Person]) -> Result<(), RosterLoadError> {
        let mut ids = HashSet::with_capacity(people.len());

        for person in people {
            if !ids.insert(person.id) {
                return Err(RosterLoadError::DuplicateId(person.id));
            }
            if person.name.trim().is_empty() {
                return Err(RosterLoadError::BlankName(person.id));
            }
        }

        Ok(())
    }
}
