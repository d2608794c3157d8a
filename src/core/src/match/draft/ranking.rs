use crate::person::{Person, Role, LANE_ROLES};
use crate::r#match::draft::can_assign;
use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;

/// Versatility given to "accepts any role" people: above any explicit
/// enumeration of the five lanes.
pub const ANY_ROLE_VERSATILITY: f32 = 6.0;

/// Width of the uniform jitter added to versatility. Wide enough that a
/// 2-lane person sometimes outranks a 1-lane person, narrow enough that
/// wildcards never outrank a 1-lane person.
pub const RANKING_NOISE: f32 = 2.5;

pub fn versatility(person: &Person) -> f32 {
    if person.accepts_any_role {
        return ANY_ROLE_VERSATILITY;
    }

    LANE_ROLES
        .iter()
        .filter(|&&role| person.has_role(role))
        .count() as f32
}

pub struct CandidateRanking;

impl CandidateRanking {
    /// Soft priority order: least flexible first, with jitter so the order
    /// differs between calls. Lower score is tried first.
    pub fn rank<'p, R: Rng + ?Sized>(
        mut candidates: Vec<&'p Person>,
        rng: &mut R,
    ) -> Vec<&'p Person> {
        if candidates.len() < 2 {
            return candidates;
        }

        candidates.shuffle(rng);

        candidates
            .into_iter()
            .map(|person| (versatility(person) + rng.gen_range(0.0..RANKING_NOISE), person))
            .sorted_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, person)| person)
            .collect()
    }

    pub fn rank_for_role<'p, R: Rng + ?Sized>(
        pool: &[&'p Person],
        role: Role,
        rng: &mut R,
    ) -> Vec<&'p Person> {
        let candidates = pool
            .iter()
            .copied()
            .filter(|person| can_assign(person, role))
            .collect();

        Self::rank(candidates, rng)
    }

    /// Best-ranked eligible person for `role`, if any.
    pub fn pick<'p, R: Rng + ?Sized>(
        pool: &[&'p Person],
        role: Role,
        rng: &mut R,
    ) -> Option<&'p Person> {
        Self::rank_for_role(pool, role, rng).into_iter().next()
    }

    /// Deterministic least-flexible-first order used by the feasibility search.
    pub fn by_versatility(mut candidates: Vec<&Person>) -> Vec<&Person> {
        candidates.sort_by(|a, b| versatility(a).total_cmp(&versatility(b)));
        candidates
    }
}
