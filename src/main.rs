mod settings;

use color_eyre::eyre::WrapErr;
use core::{
    Assignment, AssignmentSolver, FeasibilityCheck, Person, Reroll, RerollError, active_people,
};
use database::{RosterGenerator, RosterLoader};
use env_logger::Env;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use settings::{DraftSettings, OutputMode, RosterSource};
use std::time::Instant;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let settings = DraftSettings::from_env()?;

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let roster = match &settings.roster {
        RosterSource::Embedded => RosterLoader::load()?,
        RosterSource::File(path) => RosterLoader::load_from_path(path)?,
        RosterSource::QuickFill => {
            RosterGenerator::quick_fill(settings.format.coach_mode, &mut rng)
        }
    };

    info!("roster loaded: {} people, {} active", roster.len(), active_people(&roster).len());

    if settings.format.is_bracket() {
        FeasibilityCheck::check(&roster, settings.format)
            .wrap_err_with(|| format!("{} teams cannot be formed", settings.format.team_count))?;
    }

    let started = Instant::now();

    let assignment =
        AssignmentSolver::solve_with_rng(&roster, &settings.room_id, settings.format, &mut rng)
            .wrap_err("failed to find valid composition, ensure role coverage")?;

    info!("draft completed: {} ms", started.elapsed().as_millis());

    let assignment = match settings.reroll {
        Some((team, role)) => match Reroll::apply(&assignment, team, role, &roster, &mut rng) {
            Ok(rerolled) => {
                info!("re-rolled {} {}", rerolled.format.team_name(team), role);
                rerolled
            }
            Err(error @ RerollError::NoEligibleBenchCandidate { .. }) => {
                warn!("{}", error);
                assignment
            }
            Err(error) => return Err(error.into()),
        },
        None => assignment,
    };

    match settings.output {
        OutputMode::Text => print_assignment(&assignment, &Reroll::bench(&assignment, &roster)),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&assignment)?),
    }

    Ok(())
}

fn print_assignment(assignment: &Assignment, bench: &[&Person]) {
    println!("room {} ({})", assignment.room_id, assignment.created_at.format("%Y-%m-%d %H:%M:%S"));

    for team in &assignment.teams {
        println!();
        println!("{}", team.name.to_uppercase());

        for slot in &team.slots {
            println!("  {:<12} {}", slot.role.display_name(), slot.person.name);
        }
    }

    if !bench.is_empty() {
        println!();
        println!("BENCH");

        for person in bench {
            println!("  {}", person.name);
        }
    }
}
