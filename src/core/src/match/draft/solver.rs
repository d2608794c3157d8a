use crate::person::Person;
use crate::r#match::draft::{Backtracker, CandidateRanking, FeasibilityCheck, SlotOrder};
use crate::r#match::{Assignment, LineupSlot, MatchFormat, MatchmakingError, Slot, TeamLineup};
use log::{debug, info, warn};
use rand::Rng;

pub struct AssignmentSolver;

impl AssignmentSolver {
    pub fn solve(
        roster: &[Person],
        room_id: &str,
        format: MatchFormat,
    ) -> Result<Assignment, MatchmakingError> {
        Self::solve_with_rng(roster, room_id, format, &mut rand::thread_rng())
    }

    /// Fills every slot of `format` from the active people of `roster`.
    ///
    /// Slots are filled team by team in canonical role order. Candidates are
    /// re-ranked with fresh randomness at every step, so two calls on the
    /// same roster usually produce different lineups.
    pub fn solve_with_rng<R: Rng + ?Sized>(
        roster: &[Person],
        room_id: &str,
        format: MatchFormat,
        rng: &mut R,
    ) -> Result<Assignment, MatchmakingError> {
        format.validate()?;

        let pool: Vec<&Person> = roster.iter().filter(|p| p.is_active).collect();

        FeasibilityCheck::necessary_conditions(&pool, format)?;

        let slots = SlotOrder::Canonical.arrange(format.slots(), &pool);

        debug!(
            "solving room '{}': {} teams, coach mode: {}, {} slots, {} candidates",
            room_id,
            format.team_count,
            format.coach_mode,
            slots.len(),
            pool.len()
        );

        let outcome = Backtracker::new(&slots, &pool, |candidates| {
            CandidateRanking::rank(candidates, rng)
        })
        .run();

        let Some(picks) = outcome.picks else {
            warn!(
                "no valid composition for room '{}' after {} search steps",
                room_id, outcome.visited
            );
            return Err(MatchmakingError::InfeasibleComposition);
        };

        info!(
            "room '{}' drafted in {} search steps",
            room_id, outcome.visited
        );

        Ok(Self::build_assignment(room_id, format, &slots, &picks))
    }

    fn build_assignment(
        room_id: &str,
        format: MatchFormat,
        slots: &[Slot],
        picks: &[&Person],
    ) -> Assignment {
        let mut lineups: Vec<Vec<LineupSlot>> =
            vec![Vec::with_capacity(format.slots_per_team()); format.team_count];

        for (slot, person) in slots.iter().zip(picks) {
            debug!("{} -> {} {}", person, format.team_name(slot.team), slot.role);

            lineups[slot.team].push(LineupSlot {
                role: slot.role,
                person: (*person).clone(),
            });
        }

        let teams = lineups
            .into_iter()
            .enumerate()
            .map(|(index, slots)| TeamLineup::new(index, format.team_name(index), slots))
            .collect();

        Assignment::new(room_id, format, teams)
    }
}
