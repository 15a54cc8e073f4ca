//! Tournament Planning Example
//!
//! Demonstrates the full pipeline from entries to a printed match schedule.

use dojo_brackets::{EngineConfig, Entry, IdStrategy, TournamentPlanner, TournamentSchedule};

fn main() {
    println!("=== Tournament Planning Example ===\n");

    let entries = vec![
        Entry::new("1", "Ana", 10.0, 30.0, "Yellow", "Male", "Tigers"),
        Entry::new("2", "Bo", 11.0, 31.0, "Yellow", "Male", "Cranes"),
        Entry::new("3", "Cal", 12.0, 32.5, "Yellow", "Male", "Owls"),
        Entry::new("4", "Cy", 25.0, 70.0, "Black", "Female", "Tigers"),
        Entry::new("5", "Di", 26.0, 71.0, "Black", "Female", "Owls"),
        Entry::new("6", "Ed", 9.0, 28.0, "White", "", "Cranes"),
    ];

    let planner = TournamentPlanner::new(EngineConfig {
        id_strategy: IdStrategy::Deterministic,
        ..EngineConfig::default()
    });

    let plan = match planner.plan(&entries, &TournamentSchedule::starting_at("09:30")) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Planning failed: {e}");
            std::process::exit(1);
        }
    };

    for division in &plan.divisions {
        println!("{} ({} fighters)", division.title(), division.len());
        for m in &plan.matches_by_division_id[&division.id] {
            let names: Vec<&str> = m.participants.iter().map(|p| p.name.as_str()).collect();
            let fighters = match names.as_slice() {
                [] => "winners of earlier matches".to_string(),
                [solo] => format!("{solo} (bye)"),
                _ => names.join(" vs "),
            };
            println!(
                "  #{} round {} at {}: {}",
                m.name, m.tournament_round_text, m.start_time, fighters
            );
        }
        println!();
    }

    println!("{} matches in total", plan.match_count());
}
