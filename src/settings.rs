use color_eyre::eyre::{WrapErr, eyre};
use core::{MatchFormat, Role, TeamIndex};
use std::env;
use std::path::PathBuf;

const DEFAULT_ROOM_ID: &str = "LOBBY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    Embedded,
    File(PathBuf),
    QuickFill,
}

/// Run configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct DraftSettings {
    pub roster: RosterSource,
    pub room_id: String,
    pub format: MatchFormat,
    pub seed: Option<u64>,
    pub reroll: Option<(TeamIndex, Role)>,
    pub output: OutputMode,
}

impl DraftSettings {
    pub fn from_env() -> color_eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> color_eyre::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let roster = if lookup("QUICK_FILL").is_some_and(|v| is_enabled(&v)) {
            RosterSource::QuickFill
        } else {
            match lookup("ROSTER") {
                Some(path) if !path.trim().is_empty() => RosterSource::File(PathBuf::from(path)),
                _ => RosterSource::Embedded,
            }
        };

        let room_id = lookup("ROOM")
            .map(|room| room.trim().to_string())
            .filter(|room| !room.is_empty())
            .unwrap_or_else(|| DEFAULT_ROOM_ID.to_string());

        let team_count = match lookup("TEAMS") {
            Some(teams) => teams
                .trim()
                .parse::<usize>()
                .wrap_err_with(|| format!("TEAMS must be a number, got '{}'", teams))?,
            None => MatchFormat::standard().team_count,
        };

        let coach_mode = lookup("COACH_MODE").is_some_and(|v| is_enabled(&v));

        let seed = match lookup("SEED") {
            Some(seed) => Some(
                seed.trim()
                    .parse::<u64>()
                    .wrap_err_with(|| format!("SEED must be an unsigned integer, got '{}'", seed))?,
            ),
            None => None,
        };

        let reroll = match lookup("REROLL") {
            Some(target) => Some(parse_reroll_target(&target)?),
            None => None,
        };

        let output = match lookup("OUTPUT").as_deref().map(str::trim) {
            Some("json") => OutputMode::Json,
            Some("text") | None => OutputMode::Text,
            Some(other) => return Err(eyre!("OUTPUT must be 'text' or 'json', got '{}'", other)),
        };

        Ok(DraftSettings {
            roster,
            room_id,
            format: MatchFormat::new(team_count, coach_mode),
            seed,
            reroll,
            output,
        })
    }
}

fn is_enabled(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// `<team index>:<role>`, e.g. `1:farm`.
fn parse_reroll_target(target: &str) -> color_eyre::Result<(TeamIndex, Role)> {
    let (team, role) = target
        .split_once(':')
        .ok_or_else(|| eyre!("REROLL must look like '<team>:<role>', got '{}'", target))?;

    let team = team
        .trim()
        .parse::<TeamIndex>()
        .wrap_err_with(|| format!("invalid team index in REROLL '{}'", target))?;
    let role = role
        .parse::<Role>()
        .wrap_err_with(|| format!("invalid role in REROLL '{}'", target))?;

    Ok((team, role))
}
