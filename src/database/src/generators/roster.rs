use draft_core::{Person, PersonStatistics, Role};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

static PERSON_ID_SEQUENCE: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(1000));

const QUICK_FILL_HEROES: usize = 15;
const QUICK_FILL_FLEX_PLAYERS: usize = 5;
const MAX_ROSTER_SIZE: usize = 30;

const HEROES: [(&str, &[Role]); 30] = [
    ("Arthur", &[Role::Clash]),
    ("Sun Ce", &[Role::Clash, Role::Jungle]),
    ("Kaizer", &[Role::Clash, Role::Jungle]),
    ("Biron", &[Role::Clash]),
    ("Li Xin", &[Role::Clash]),
    ("Charlotte", &[Role::Clash]),
    ("Lam", &[Role::Jungle]),
    ("Prince of Lanling", &[Role::Jungle, Role::Roam]),
    ("Wukong", &[Role::Jungle]),
    ("Li Bai", &[Role::Jungle]),
    ("Han Xin", &[Role::Jungle]),
    ("Luna", &[Role::Jungle, Role::Mid]),
    ("Angela", &[Role::Mid]),
    ("Diaochan", &[Role::Mid]),
    ("Xiao Qiao", &[Role::Mid]),
    ("Mai Shiranui", &[Role::Mid, Role::Jungle]),
    ("Lady Zhen", &[Role::Mid]),
    ("Milady", &[Role::Mid]),
    ("Luban No.7", &[Role::Farm]),
    ("Marco Polo", &[Role::Farm]),
    ("Hou Yi", &[Role::Farm]),
    ("Consort Yu", &[Role::Farm]),
    ("Di Renjie", &[Role::Farm]),
    ("Arli", &[Role::Farm, Role::Jungle]),
    ("Dolia", &[Role::Roam]),
    ("Kui", &[Role::Roam]),
    ("Zhuangzi", &[Role::Roam, Role::Clash]),
    ("Zhang Fei", &[Role::Roam]),
    ("Da Qiao", &[Role::Roam, Role::Mid]),
    ("Yaria", &[Role::Roam]),
];

const COACHES: [&str; 2] = ["Coach Gemik", "Coach KPL"];

/// Random demo rosters ("quick fill").
pub struct RosterGenerator;

impl RosterGenerator {
    /// 15 random heroes, 5 any-role flex players and, for coach mode, two
    /// pure coaches.
    pub fn quick_fill<R: Rng + ?Sized>(coach_mode: bool, rng: &mut R) -> Vec<Person> {
        let mut heroes = HEROES.to_vec();
        heroes.shuffle(rng);

        let mut people: Vec<Person> = heroes
            .into_iter()
            .take(QUICK_FILL_HEROES)
            .map(|(name, roles)| Self::generate(name, roles.iter().copied(), false))
            .collect();

        people.extend(
            (1..=QUICK_FILL_FLEX_PLAYERS)
                .map(|i| Self::generate(&format!("Flex Player {}", i), std::iter::empty(), true)),
        );

        if coach_mode {
            people.extend(COACHES.iter().map(|name| Self::generate(name, [Role::Coach], false)));
        }

        debug!("quick fill generated {} people", people.len());

        people
    }

    /// Appends `generated` to `existing`, skipping names already present,
    /// capped at the maximum roster size.
    pub fn merge(existing: Vec<Person>, generated: Vec<Person>) -> Vec<Person> {
        let names: HashSet<String> = existing.iter().map(|p| p.name.clone()).collect();

        existing
            .into_iter()
            .chain(generated.into_iter().filter(|p| !names.contains(&p.name)))
            .take(MAX_ROSTER_SIZE)
            .collect()
    }

    fn generate(
        name: &str,
        roles: impl IntoIterator<Item = Role>,
        accepts_any_role: bool,
    ) -> Person {
        Person {
            id: PERSON_ID_SEQUENCE.fetch_add(1, Ordering::SeqCst),
            name: name.to_string(),
            roles: roles.into_iter().collect::<BTreeSet<Role>>(),
            accepts_any_role,
            is_active: true,
            statistics: PersonStatistics::new(),
        }
    }
}
