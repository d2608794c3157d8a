use crate::person::{Person, Role};

/// Whether `person` may legally occupy a `role` slot.
///
/// Coach needs the explicit capability; the any-role wildcard only covers
/// lanes. A person whose sole capability is Coach never plays a lane.
pub fn can_assign(person: &Person, role: Role) -> bool {
    if role.is_coach() {
        return person.has_role(Role::Coach);
    }

    if person.is_pure_coach() {
        return false;
    }

    person.accepts_any_role || person.has_role(role)
}

pub fn capable_count<'p, I>(people: I, role: Role) -> usize
where
    I: IntoIterator<Item = &'p Person>,
{
    people
        .into_iter()
        .filter(|person| can_assign(person, role))
        .count()
}
