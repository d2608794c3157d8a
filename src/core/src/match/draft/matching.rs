use crate::person::{Person, PersonId};
use crate::r#match::Slot;
use crate::r#match::draft::can_assign;
use std::collections::HashSet;

/// Whether every slot can be given a distinct eligible person from `pool`,
/// leaving out the ids in `excluded`.
///
/// Maximum bipartite matching by augmenting paths; polynomial in the number
/// of slots and people, so it answers quickly even when no lineup exists.
pub fn fills_every_slot(slots: &[Slot], pool: &[&Person], excluded: &HashSet<PersonId>) -> bool {
    let candidates: Vec<&Person> = pool
        .iter()
        .copied()
        .filter(|person| !excluded.contains(&person.id))
        .collect();

    if candidates.len() < slots.len() {
        return false;
    }

    let holder = vec![None; candidates.len()];
    let mut matching = SlotMatching {
        slots,
        candidates,
        holder,
    };

    (0..slots.len()).all(|slot| {
        let mut seen = vec![false; matching.candidates.len()];
        matching.augment(slot, &mut seen)
    })
}

struct SlotMatching<'s, 'p> {
    slots: &'s [Slot],
    candidates: Vec<&'p Person>,
    /// Slot currently held by each candidate.
    holder: Vec<Option<usize>>,
}

impl SlotMatching<'_, '_> {
    fn augment(&mut self, slot: usize, seen: &mut [bool]) -> bool {
        let role = self.slots[slot].role;

        for candidate in 0..self.candidates.len() {
            if seen[candidate] || !can_assign(self.candidates[candidate], role) {
                continue;
            }
            seen[candidate] = true;

            let free = match self.holder[candidate] {
                None => true,
                Some(other) => self.augment(other, seen),
            };

            if free {
                self.holder[candidate] = Some(slot);
                return true;
            }
        }

        false
    }
}
