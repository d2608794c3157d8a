use crate::person::{PersonBuilder, PersonStatistics, Role};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result};

pub type PersonId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub roles: BTreeSet<Role>,
    #[serde(default)]
    pub accepts_any_role: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub statistics: PersonStatistics,
}

fn default_active() -> bool {
    true
}

impl Person {
    pub fn builder() -> PersonBuilder {
        PersonBuilder::new()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Coach is the only capability and the wildcard is not set.
    pub fn is_pure_coach(&self) -> bool {
        !self.accepts_any_role && self.roles.len() == 1 && self.has_role(Role::Coach)
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

/// Keeps only the people who take part in the next draft.
pub fn active_people(roster: &[Person]) -> Vec<Person> {
    roster.iter().filter(|p| p.is_active).cloned().collect()
}
