pub mod person;
pub mod r#match;

pub use person::{
    Person, PersonBuilder, PersonId, PersonStatistics, Role, RoleParseError,
    active_people, LANE_ROLES, LANE_ROLES_COUNT,
};

pub use r#match::{
    Assignment, LineupSlot, MatchFormat, MatchmakingError, RerollError, Slot, TeamIndex,
    TeamLineup, MAX_TEAMS, MIN_TEAMS,
};

pub use r#match::draft::{
    AssignmentSolver, CandidateRanking, FeasibilityCheck, Reroll, SlotOrder, can_assign,
    capable_count, fills_every_slot, versatility,
};
