use crate::person::{Person, PersonId, PersonStatistics, Role};
use std::collections::BTreeSet;

// Builder for Person
#[derive(Default)]
pub struct PersonBuilder {
    id: Option<PersonId>,
    name: Option<String>,
    roles: BTreeSet<Role>,
    accepts_any_role: bool,
    is_active: Option<bool>,
    statistics: Option<PersonStatistics>,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: PersonId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles.extend(roles);
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    pub fn accepts_any_role(mut self, accepts_any_role: bool) -> Self {
        self.accepts_any_role = accepts_any_role;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn statistics(mut self, statistics: PersonStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn build(self) -> Result<Person, String> {
        let name = self.name.ok_or("name is required")?;
        if name.trim().is_empty() {
            return Err(String::from("name must not be blank"));
        }

        Ok(Person {
            id: self.id.ok_or("id is required")?,
            name,
            roles: self.roles,
            accepts_any_role: self.accepts_any_role,
            is_active: self.is_active.unwrap_or(true),
            statistics: self.statistics.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_id_and_name() {
        assert!(PersonBuilder::new().name("No id").build().is_err());
        assert!(PersonBuilder::new().id(1).build().is_err());
        assert!(PersonBuilder::new().id(1).name("   ").build().is_err());
    }

    #[test]
    fn test_build_defaults() {
        let person = PersonBuilder::new()
            .id(7)
            .name("Luna")
            .role(Role::Jungle)
            .role(Role::Mid)
            .build()
            .unwrap();

        assert_eq!(person.id, 7);
        assert!(person.is_active);
        assert!(!person.accepts_any_role);
        assert_eq!(person.roles.len(), 2);
        assert_eq!(person.statistics, PersonStatistics::default());
    }
}
