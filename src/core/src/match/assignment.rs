use crate::person::{Person, PersonId, Role};
use crate::r#match::draft::can_assign;
use crate::r#match::{MatchFormat, RerollError, TeamIndex};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupSlot {
    pub role: Role,
    pub person: Person,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLineup {
    pub index: TeamIndex,
    pub name: String,
    pub slots: Vec<LineupSlot>,
}

impl TeamLineup {
    pub fn new(index: TeamIndex, name: String, mut slots: Vec<LineupSlot>) -> Self {
        slots.sort_by_key(|slot| slot.role.order());

        TeamLineup { index, name, slots }
    }

    pub fn person(&self, role: Role) -> Option<&Person> {
        self.slots
            .iter()
            .find(|slot| slot.role == role)
            .map(|slot| &slot.person)
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.slots.iter().map(|slot| &slot.person)
    }
}

/// Result of a successful draft: one lineup per team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub room_id: String,
    pub format: MatchFormat,
    pub teams: Vec<TeamLineup>,
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    pub fn new(room_id: &str, format: MatchFormat, teams: Vec<TeamLineup>) -> Self {
        Assignment {
            room_id: room_id.to_string(),
            format,
            teams,
            created_at: Utc::now(),
        }
    }

    pub fn team(&self, team: TeamIndex) -> Option<&TeamLineup> {
        self.teams.get(team)
    }

    pub fn person_at(&self, team: TeamIndex, role: Role) -> Option<&Person> {
        self.team(team).and_then(|lineup| lineup.person(role))
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.teams.iter().flat_map(|team| team.people())
    }

    pub fn assigned_ids(&self) -> HashSet<PersonId> {
        self.people().map(|p| p.id).collect()
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.people().any(|p| p.id == id)
    }

    pub fn slot_count(&self) -> usize {
        self.teams.iter().map(|team| team.slots.len()).sum()
    }

    /// Copy of this assignment with a single slot changed. Every other slot,
    /// the room id and the creation time are carried over untouched.
    ///
    /// The newcomer must be eligible for `role` and must not already hold a
    /// different slot.
    pub fn with_replacement(
        &self,
        team: TeamIndex,
        role: Role,
        person: Person,
    ) -> Result<Assignment, RerollError> {
        if self.person_at(team, role).is_none() {
            return Err(RerollError::UnknownSlot { team, role });
        }

        if !can_assign(&person, role) {
            return Err(RerollError::Ineligible {
                person: person.id,
                role,
            });
        }

        let holds_other_slot = self.teams.iter().enumerate().any(|(index, lineup)| {
            lineup
                .slots
                .iter()
                .any(|slot| slot.person.id == person.id && (index, slot.role) != (team, role))
        });
        if holds_other_slot {
            return Err(RerollError::AlreadyAssigned { person: person.id });
        }

        let mut replaced = self.clone();

        for slot in replaced.teams[team].slots.iter_mut() {
            if slot.role == role {
                slot.person = person;
                break;
            }
        }

        Ok(replaced)
    }
}
