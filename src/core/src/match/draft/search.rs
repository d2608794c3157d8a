use crate::person::{Person, PersonId};
use crate::r#match::Slot;
use crate::r#match::draft::{can_assign, capable_count, fills_every_slot};
use std::collections::HashSet;

/// Order in which required slots are visited by the backtracking search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOrder {
    /// Team by team, lanes in canonical order, coaches last.
    Canonical,
    /// Slots whose role has the fewest capable people first.
    Scarcity,
}

impl SlotOrder {
    pub fn arrange(self, mut slots: Vec<Slot>, pool: &[&Person]) -> Vec<Slot> {
        if self == SlotOrder::Scarcity {
            // stable: ties keep canonical order
            slots.sort_by_cached_key(|slot| capable_count(pool.iter().copied(), slot.role));
        }
        slots
    }
}

/// Depth-first search over `slots`. `order` decides the trial order of the
/// eligible, unused candidates at each step.
///
/// A candidate is only kept if the remaining slots can still be matched to
/// the remaining people, so an unsolvable pool is rejected before the first
/// step and a solvable one never walks into a dead branch.
pub struct Backtracker<'s, 'p, F> {
    slots: &'s [Slot],
    pool: &'s [&'p Person],
    order: F,
    used: HashSet<PersonId>,
    picks: Vec<&'p Person>,
    visited: usize,
}

impl<'s, 'p, F> Backtracker<'s, 'p, F>
where
    F: FnMut(Vec<&'p Person>) -> Vec<&'p Person>,
{
    pub fn new(slots: &'s [Slot], pool: &'s [&'p Person], order: F) -> Self {
        Backtracker {
            slots,
            pool,
            order,
            used: HashSet::with_capacity(slots.len()),
            picks: Vec::with_capacity(slots.len()),
            visited: 0,
        }
    }

    /// People chosen for each slot, index-aligned with `slots`.
    pub fn run(mut self) -> SearchOutcome<'p> {
        let solved = self.completable(0) && self.fill(0);

        SearchOutcome {
            picks: if solved { Some(self.picks) } else { None },
            visited: self.visited,
        }
    }

    fn fill(&mut self, index: usize) -> bool {
        let Some(&slot) = self.slots.get(index) else {
            return true;
        };

        self.visited += 1;

        let candidates: Vec<&'p Person> = self
            .pool
            .iter()
            .copied()
            .filter(|person| !self.used.contains(&person.id) && can_assign(person, slot.role))
            .collect();

        for person in (self.order)(candidates) {
            self.used.insert(person.id);

            if self.completable(index + 1) {
                self.picks.push(person);

                if self.fill(index + 1) {
                    return true;
                }

                self.picks.pop();
            }

            self.used.remove(&person.id);
        }

        false
    }

    fn completable(&self, from: usize) -> bool {
        fills_every_slot(&self.slots[from..], self.pool, &self.used)
    }
}

pub struct SearchOutcome<'p> {
    pub picks: Option<Vec<&'p Person>>,
    pub visited: usize,
}
