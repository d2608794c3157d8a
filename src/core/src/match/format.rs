use crate::person::{Role, LANE_ROLES, LANE_ROLES_COUNT};
use crate::r#match::MatchmakingError;
use serde::{Deserialize, Serialize};

pub const MIN_TEAMS: usize = 2;
pub const MAX_TEAMS: usize = 8;

const DUEL_TEAM_NAMES: [&str; MIN_TEAMS] = ["Azure", "Crimson"];

const BRACKET_TEAM_NAMES: [&str; MAX_TEAMS] = [
    "Alpha", "Beta", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel",
];

pub type TeamIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFormat {
    pub team_count: usize,
    pub coach_mode: bool,
}

impl MatchFormat {
    pub fn new(team_count: usize, coach_mode: bool) -> Self {
        MatchFormat {
            team_count,
            coach_mode,
        }
    }

    pub fn standard() -> Self {
        Self::new(MIN_TEAMS, false)
    }

    pub fn coached() -> Self {
        Self::new(MIN_TEAMS, true)
    }

    pub fn bracket(team_count: usize) -> Self {
        Self::new(team_count, false)
    }

    pub fn is_bracket(&self) -> bool {
        self.team_count > MIN_TEAMS
    }

    pub fn validate(&self) -> Result<(), MatchmakingError> {
        if (MIN_TEAMS..=MAX_TEAMS).contains(&self.team_count) {
            Ok(())
        } else {
            Err(MatchmakingError::InvalidTeamCount {
                requested: self.team_count,
                min: MIN_TEAMS,
                max: MAX_TEAMS,
            })
        }
    }

    /// Roles every team must field, lanes first, Coach last when enabled.
    pub fn team_roles(&self) -> Vec<Role> {
        let mut roles = LANE_ROLES.to_vec();
        if self.coach_mode {
            roles.push(Role::Coach);
        }
        roles
    }

    pub fn slots_per_team(&self) -> usize {
        LANE_ROLES_COUNT + usize::from(self.coach_mode)
    }

    pub fn required_players(&self) -> usize {
        self.team_count * self.slots_per_team()
    }

    pub fn team_name(&self, team: TeamIndex) -> String {
        if self.is_bracket() {
            match BRACKET_TEAM_NAMES.get(team) {
                Some(name) => format!("Team {}", name),
                None => format!("Team {}", team + 1),
            }
        } else {
            DUEL_TEAM_NAMES
                .get(team)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("Team {}", team + 1))
        }
    }

    /// Required slots grouped by team in canonical role order. Coach slots
    /// are appended after every team's lanes.
    pub fn slots(&self) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(self.required_players());

        for team in 0..self.team_count {
            slots.extend(LANE_ROLES.iter().map(|&role| Slot::new(team, role)));
        }

        if self.coach_mode {
            slots.extend((0..self.team_count).map(|team| Slot::new(team, Role::Coach)));
        }

        slots
    }
}

impl Default for MatchFormat {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub team: TeamIndex,
    pub role: Role,
}

impl Slot {
    pub fn new(team: TeamIndex, role: Role) -> Self {
        Slot { team, role }
    }
}
