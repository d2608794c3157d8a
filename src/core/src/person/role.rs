use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Clash Lane", alias = "clash")]
    Clash,
    #[serde(rename = "Jungler", alias = "jungle")]
    Jungle,
    #[serde(rename = "Mid Lane", alias = "mid")]
    Mid,
    #[serde(rename = "Farm Lane", alias = "farm")]
    Farm,
    #[serde(rename = "Roam", alias = "roam")]
    Roam,
    #[serde(rename = "Coach", alias = "coach")]
    Coach,
}

/// Standard lane roles in canonical display order.
pub const LANE_ROLES: [Role; 5] = [Role::Clash, Role::Jungle, Role::Mid, Role::Farm, Role::Roam];

pub const LANE_ROLES_COUNT: usize = LANE_ROLES.len();

impl Role {
    pub fn is_lane(self) -> bool {
        self != Role::Coach
    }

    pub fn is_coach(self) -> bool {
        self == Role::Coach
    }

    /// Position in the canonical ordering. Coach sorts after every lane.
    pub fn order(self) -> u8 {
        match self {
            Role::Clash => 0,
            Role::Jungle => 1,
            Role::Mid => 2,
            Role::Farm => 3,
            Role::Roam => 4,
            Role::Coach => 5,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Role::Clash => "Clash Lane",
            Role::Jungle => "Jungler",
            Role::Mid => "Mid Lane",
            Role::Farm => "Farm Lane",
            Role::Roam => "Roam",
            Role::Coach => "Coach",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Role::Clash => "clash",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Farm => "farm",
            Role::Roam => "roam",
            Role::Coach => "coach",
        }
    }

    pub fn all() -> [Role; 6] {
        [Role::Clash, Role::Jungle, Role::Mid, Role::Farm, Role::Roam, Role::Coach]
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown role: '{0}'")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        Role::all()
            .into_iter()
            .find(|role| {
                role.key() == normalized || role.display_name().to_lowercase() == normalized
            })
            .ok_or_else(|| RoleParseError(s.to_string()))
    }
}
