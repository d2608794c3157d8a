use crate::person::{Person, Role};
use crate::r#match::draft::can_assign;
use crate::r#match::{Assignment, RerollError, TeamIndex};
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

/// Single-slot replacement from the bench.
///
/// The replacement is drawn uniformly among eligible bench people rather
/// than through the versatility ranking: one slot is being corrected, there
/// is nothing downstream to keep flexible people for.
pub struct Reroll;

impl Reroll {
    /// Active roster members that hold no slot in `assignment`.
    pub fn bench<'p>(assignment: &Assignment, roster: &'p [Person]) -> Vec<&'p Person> {
        let assigned = assignment.assigned_ids();

        roster
            .iter()
            .filter(|p| p.is_active && !assigned.contains(&p.id))
            .collect()
    }

    pub fn candidates<'p>(
        assignment: &Assignment,
        team: TeamIndex,
        role: Role,
        bench: &[&'p Person],
    ) -> Result<Vec<&'p Person>, RerollError> {
        if assignment.person_at(team, role).is_none() {
            return Err(RerollError::UnknownSlot { team, role });
        }

        let assigned = assignment.assigned_ids();

        Ok(bench
            .iter()
            .copied()
            .filter(|p| !assigned.contains(&p.id) && can_assign(p, role))
            .collect())
    }

    pub fn pick(
        assignment: &Assignment,
        team: TeamIndex,
        role: Role,
        bench: &[&Person],
    ) -> Result<Person, RerollError> {
        Self::pick_with_rng(assignment, team, role, bench, &mut rand::thread_rng())
    }

    /// Chooses the person to put into `(team, role)`. The assignment itself
    /// is not touched; merge with [`Assignment::with_replacement`].
    pub fn pick_with_rng<R: Rng + ?Sized>(
        assignment: &Assignment,
        team: TeamIndex,
        role: Role,
        bench: &[&Person],
        rng: &mut R,
    ) -> Result<Person, RerollError> {
        let candidates = Self::candidates(assignment, team, role, bench)?;

        let Some(chosen) = candidates.choose(rng) else {
            warn!(
                "no bench player for {} in {} ({} on bench)",
                role,
                assignment.format.team_name(team),
                bench.len()
            );
            return Err(RerollError::NoEligibleBenchCandidate { team, role });
        };

        debug!(
            "re-roll {} {}: {} chosen from {} candidates",
            assignment.format.team_name(team),
            role,
            chosen,
            candidates.len()
        );

        Ok((*chosen).clone())
    }

    /// Picks a replacement and merges it, returning the new assignment.
    pub fn apply<R: Rng + ?Sized>(
        assignment: &Assignment,
        team: TeamIndex,
        role: Role,
        roster: &[Person],
        rng: &mut R,
    ) -> Result<Assignment, RerollError> {
        let bench = Self::bench(assignment, roster);
        let replacement = Self::pick_with_rng(assignment, team, role, &bench, rng)?;

        assignment.with_replacement(team, role, replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{LANE_ROLES, PersonId};
    use crate::r#match::MatchFormat;
    use crate::r#match::draft::AssignmentSolver;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn person(id: PersonId, roles: &[Role], any: bool) -> Person {
        Person::builder()
            .id(id)
            .name(format!("P{}", id))
            .roles(roles.iter().copied())
            .accepts_any_role(any)
            .build()
            .unwrap()
    }

    fn specialists() -> Vec<Person> {
        LANE_ROLES
            .iter()
            .enumerate()
            .flat_map(|(i, &role)| {
                let id = (i * 2) as PersonId;
                vec![person(id, &[role], false), person(id + 1, &[role], false)]
            })
            .collect()
    }

    #[test]
    fn test_bench_is_roster_minus_assigned() {
        let mut roster = specialists();
        roster.push(person(50, &[Role::Coach], false));
        roster.push(
            Person::builder()
                .id(51)
                .name("Benched")
                .role(Role::Farm)
                .active(false)
                .build()
                .unwrap(),
        );
        let assignment = AssignmentSolver::solve(&roster, "R", MatchFormat::standard()).unwrap();

        let bench = Reroll::bench(&assignment, &roster);

        assert_eq!(bench.iter().map(|p| p.id).collect::<Vec<_>>(), vec![50]);
    }

    #[test]
    fn test_reroll_without_eligible_bench() {
        let mut roster = specialists();
        roster.push(person(50, &[Role::Mid], false));
        roster.push(person(51, &[Role::Coach], false));
        let assignment = AssignmentSolver::solve(&roster, "R", MatchFormat::standard()).unwrap();
        let before = assignment.clone();

        let bench = Reroll::bench(&assignment, &roster);
        let result = Reroll::pick(&assignment, 1, Role::Farm, &bench);

        assert_eq!(
            result,
            Err(RerollError::NoEligibleBenchCandidate {
                team: 1,
                role: Role::Farm
            })
        );
        assert_eq!(assignment, before);
    }

    #[test]
    fn test_reroll_unknown_slot() {
        let roster = specialists();
        let assignment = AssignmentSolver::solve(&roster, "R", MatchFormat::standard()).unwrap();

        assert_eq!(
            Reroll::pick(&assignment, 0, Role::Coach, &[]),
            Err(RerollError::UnknownSlot {
                team: 0,
                role: Role::Coach
            })
        );
    }

    #[test]
    fn test_reroll_picks_eligible_bench_person() {
        let mut roster = specialists();
        roster.push(person(50, &[Role::Mid], false));
        roster.push(person(51, &[], true));
        roster.push(person(52, &[Role::Coach], false));
        let assignment = AssignmentSolver::solve(&roster, "R", MatchFormat::standard()).unwrap();
        let bench = Reroll::bench(&assignment, &roster);

        let expected: HashSet<PersonId> = bench
            .iter()
            .filter(|p| can_assign(p, Role::Mid))
            .map(|p| p.id)
            .collect();
        assert!(!expected.is_empty());

        let mut rng = StdRng::seed_from_u64(8);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let chosen =
                Reroll::pick_with_rng(&assignment, 0, Role::Mid, &bench, &mut rng).unwrap();
            assert!(!assignment.contains(chosen.id));
            seen.insert(chosen.id);
        }

        assert_eq!(seen, expected);
    }

    #[test]
    fn test_reroll_ignores_bench_entries_already_assigned() {
        let roster = specialists();
        let assignment = AssignmentSolver::solve(&roster, "R", MatchFormat::standard()).unwrap();
        let everyone: Vec<&Person> = roster.iter().collect();

        assert!(matches!(
            Reroll::pick(&assignment, 0, Role::Roam, &everyone),
            Err(RerollError::NoEligibleBenchCandidate { .. })
        ));
    }

    #[test]
    fn test_apply_changes_only_target_slot() {
        let mut roster = specialists();
        roster.push(person(60, &[Role::Jungle], false));
        let mut rng = StdRng::seed_from_u64(2);
        let assignment =
            AssignmentSolver::solve_with_rng(&roster, "R", MatchFormat::standard(), &mut rng)
                .unwrap();

        let benched_jungler = Reroll::bench(&assignment, &roster)[0].id;

        let rerolled = Reroll::apply(&assignment, 1, Role::Jungle, &roster, &mut rng).unwrap();

        assert_eq!(rerolled.person_at(1, Role::Jungle).map(|p| p.id), Some(benched_jungler));
        for team in 0..2 {
            for role in LANE_ROLES {
                if (team, role) != (1, Role::Jungle) {
                    assert_eq!(rerolled.person_at(team, role), assignment.person_at(team, role));
                }
            }
        }
    }

}
