use crate::person::Person;
use crate::r#match::draft::{Backtracker, CandidateRanking, SlotOrder, capable_count};
use crate::r#match::{MatchFormat, MatchmakingError};
use log::{debug, warn};

/// Cheap rejection of rosters that cannot possibly fill a format, followed
/// by a deterministic solvability search.
pub struct FeasibilityCheck;

impl FeasibilityCheck {
    pub fn check(roster: &[Person], format: MatchFormat) -> Result<(), MatchmakingError> {
        format.validate()?;

        let pool: Vec<&Person> = roster.iter().filter(|p| p.is_active).collect();

        Self::necessary_conditions(&pool, format)?;
        Self::search_composition(&pool, format)
    }

    /// Roster size, then per-role capable counts. Necessary, not sufficient.
    pub fn necessary_conditions(
        pool: &[&Person],
        format: MatchFormat,
    ) -> Result<(), MatchmakingError> {
        let required = format.required_players();
        if pool.len() < required {
            warn!(
                "insufficient players: need {} for {} teams, have {}",
                required,
                format.team_count,
                pool.len()
            );
            return Err(MatchmakingError::InsufficientRoster {
                required,
                actual: pool.len(),
            });
        }

        for role in format.team_roles() {
            let actual = capable_count(pool.iter().copied(), role);
            if actual < format.team_count {
                warn!(
                    "shortage for {}: need {}, have {}",
                    role, format.team_count, actual
                );
                return Err(MatchmakingError::RoleShortage {
                    role,
                    required: format.team_count,
                    actual,
                });
            }
        }

        Ok(())
    }

    /// Scarcest roles first, least flexible candidates first. The search is
    /// guided by slot matching, so a failure here means no composition exists
    /// at all, and it is reported without enumerating lineups.
    fn search_composition(pool: &[&Person], format: MatchFormat) -> Result<(), MatchmakingError> {
        let slots = SlotOrder::Scarcity.arrange(format.slots(), pool);

        let outcome = Backtracker::new(&slots, pool, CandidateRanking::by_versatility).run();

        debug!("feasibility search finished in {} search steps", outcome.visited);

        match outcome.picks {
            Some(_) => Ok(()),
            None => Err(MatchmakingError::InfeasibleComposition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{LANE_ROLES, PersonId, Role};
    use crate::r#match::draft::AssignmentSolver;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    fn person(id: PersonId, roles: &[Role], any: bool) -> Person {
        Person::builder()
            .id(id)
            .name(format!("P{}", id))
            .roles(roles.iter().copied())
            .accepts_any_role(any)
            .build()
            .unwrap()
    }

    fn specialists(per_role: usize) -> Vec<Person> {
        let mut roster = Vec::new();
        for (i, &role) in LANE_ROLES.iter().enumerate() {
            for k in 0..per_role {
                roster.push(person((i * 100 + k) as PersonId, &[role], false));
            }
        }
        roster
    }

    #[test]
    fn test_check_passes_for_exact_roster() {
        let standard = FeasibilityCheck::check(&specialists(2), MatchFormat::standard());
        let bracket = FeasibilityCheck::check(&specialists(4), MatchFormat::bracket(4));

        assert_eq!(standard, Ok(()));
        assert_eq!(bracket, Ok(()));
    }

    #[test]
    fn test_check_insufficient_players() {
        let mut roster = specialists(2);
        roster.pop();

        assert_eq!(
            FeasibilityCheck::check(&roster, MatchFormat::standard()),
            Err(MatchmakingError::InsufficientRoster { required: 10, actual: 9 })
        );
    }

    #[test]
    fn test_check_counts_only_active_people() {
        let mut roster = specialists(2);
        roster[3].is_active = false;

        assert_eq!(
            FeasibilityCheck::check(&roster, MatchFormat::standard()),
            Err(MatchmakingError::InsufficientRoster { required: 10, actual: 9 })
        );
    }

    #[test]
    fn test_check_role_shortage() {
        let mut roster = specialists(3);
        roster.retain(|p| !p.has_role(Role::Farm));
        roster.push(person(900, &[Role::Farm], false));
        roster.push(person(901, &[Role::Farm], false));
        roster.push(person(902, &[Role::Mid], false));

        assert_eq!(
            FeasibilityCheck::check(&roster, MatchFormat::bracket(3)),
            Err(MatchmakingError::RoleShortage {
                role: Role::Farm,
                required: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_check_coach_shortage() {
        let mut roster = specialists(2);
        roster.push(person(500, &[Role::Coach], false));
        roster.push(person(501, &[], true));

        assert_eq!(
            FeasibilityCheck::check(&roster, MatchFormat::coached()),
            Err(MatchmakingError::RoleShortage {
                role: Role::Coach,
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_check_detects_impossible_composition() {
        // three Clash/Jungle people shared between both lanes
        let mut roster = Vec::new();
        for id in 0..3 {
            roster.push(person(id, &[Role::Clash, Role::Jungle], false));
        }
        for (i, &role) in [Role::Mid, Role::Farm, Role::Roam].iter().enumerate() {
            for k in 0..3 {
                roster.push(person(10 + (i * 3 + k) as PersonId, &[role], false));
            }
        }
        let format = MatchFormat::bracket(3);

        // 12 people for 15 slots is caught early
        assert!(matches!(
            FeasibilityCheck::check(&roster, format),
            Err(MatchmakingError::InsufficientRoster { .. })
        ));

        roster.push(person(40, &[Role::Mid], false));
        roster.push(person(41, &[Role::Farm], false));
        roster.push(person(42, &[Role::Roam], false));
        roster.push(person(43, &[Role::Clash], false));

        // Clash: 4 capable, Jungle: 3 capable, but Clash and Jungle together
        // need six of those four distinct people
        assert_eq!(
            FeasibilityCheck::check(&roster, format),
            Err(MatchmakingError::InfeasibleComposition)
        );
    }

    #[test]
    fn test_check_answers_quickly_on_overlapping_bracket() {
        // 8 Clash/Jungle slots shared by 7 people, every other lane has slack
        let mut roster = Vec::new();
        for id in 0..7 {
            roster.push(person(id, &[Role::Clash, Role::Jungle], false));
        }
        for (i, &role) in [Role::Mid, Role::Farm, Role::Roam].iter().enumerate() {
            for k in 0..5 {
                roster.push(person(100 + (i * 10 + k) as PersonId, &[role], false));
            }
        }

        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let _ = sender.send(FeasibilityCheck::check(&roster, MatchFormat::bracket(4)));
        });

        assert_eq!(
            receiver.recv_timeout(Duration::from_secs(5)),
            Ok(Err(MatchmakingError::InfeasibleComposition))
        );
    }

    #[test]
    fn test_check_ok_implies_solve_succeeds() {
        let mut roster = specialists(2);
        roster.push(person(700, &[Role::Jungle, Role::Mid], false));
        roster.push(person(701, &[], true));
        roster.push(person(702, &[Role::Coach], false));
        roster.push(person(703, &[Role::Coach, Role::Farm], false));

        for format in [MatchFormat::standard(), MatchFormat::coached(), MatchFormat::bracket(2)] {
            assert_eq!(FeasibilityCheck::check(&roster, format), Ok(()));

            for seed in 0..50 {
                let mut rng = StdRng::seed_from_u64(seed);
                let assignment = AssignmentSolver::solve_with_rng(&roster, "R", format, &mut rng);
                assert!(assignment.is_ok());
            }
        }
    }

    #[test]
    fn test_check_invalid_team_count() {
        assert!(matches!(
            FeasibilityCheck::check(&specialists(2), MatchFormat::bracket(12)),
            Err(MatchmakingError::InvalidTeamCount { requested: 12, .. })
        ));
    }
}
