use crate::person::{PersonId, Role};
use crate::r#match::TeamIndex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchmakingError {
    #[error("invalid team count: {requested} requested, supported range is {min}..={max}")]
    InvalidTeamCount {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("insufficient players: need {required} active players, current: {actual}")]
    InsufficientRoster { required: usize, actual: usize },

    #[error(
        "critical shortage: need {required} players for {}, but only {actual} are available",
        .role.display_name().to_uppercase()
    )]
    RoleShortage {
        role: Role,
        required: usize,
        actual: usize,
    },

    #[error(
        "impossible composition: unable to assign all roles validly with the current player pool"
    )]
    InfeasibleComposition,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RerollError {
    #[error("team {team} has no {role} slot")]
    UnknownSlot { team: TeamIndex, role: Role },

    #[error("no available bench players found for role: {role} (team {team})")]
    NoEligibleBenchCandidate { team: TeamIndex, role: Role },

    #[error("person {person} cannot play {role}")]
    Ineligible { person: PersonId, role: Role },

    #[error("person {person} already holds another slot")]
    AlreadyAssigned { person: PersonId },
}
