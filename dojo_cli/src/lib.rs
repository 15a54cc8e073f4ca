//! Command-line driver for the division and bracket engine.
//!
//! Loads entries from a JSON file, runs the full pipeline and renders the
//! resulting plan as JSON.

pub mod config;

use anyhow::{Context, Result};
use dojo_brackets::{
    BracketFilter, Entry, EntryLimits, TournamentPlan, TournamentPlanner, entry::unique_values,
};
use log::{info, warn};
use std::path::Path;

pub use config::{CliConfig, CliOverrides, ConfigError};

/// Parse a JSON array of entries.
pub fn parse_entries(raw: &str) -> Result<Vec<Entry>> {
    serde_json::from_str(raw).context("Entries must be a JSON array of entry objects")
}

/// Read and parse an entries file.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read entries file {}", path.display()))?;
    parse_entries(&raw).with_context(|| format!("Invalid entries file {}", path.display()))
}

/// Log a warning for every entry outside the registration limits.
///
/// Such entries are still planned; the limits belong to the entry form.
///
/// # Returns
///
/// * `usize` - Number of entries with at least one violation
pub fn report_limit_violations(entries: &[Entry], limits: &EntryLimits) -> usize {
    let mut flagged = 0;
    for entry in entries {
        let problems = limits.check(entry);
        if problems.is_empty() {
            continue;
        }
        flagged += 1;
        warn!("Entry {}: {}", entry.id, problems.join(", "));
    }
    flagged
}

/// Build the filtered plan for `entries`.
pub fn build_plan(config: &CliConfig, entries: &[Entry]) -> Result<TournamentPlan> {
    report_limit_violations(entries, &EntryLimits::default());

    let planner = TournamentPlanner::new(config.engine_config());
    let plan = planner
        .plan(entries, &config.schedule())
        .context("Failed to build tournament plan")?;
    info!(
        "{} entries, {} divisions, {} matches",
        entries.len(),
        plan.divisions.len(),
        plan.match_count()
    );

    if config.filter.is_empty() {
        return Ok(plan);
    }
    warn_on_unknown_filter_values(&config.filter, entries);
    let filtered = config.filter.apply(&plan);
    info!(
        "Filter kept {} of {} divisions",
        filtered.divisions.len(),
        plan.divisions.len()
    );
    Ok(filtered)
}

/// Warn when a belt or club filter names a value no entry carries.
fn warn_on_unknown_filter_values(filter: &BracketFilter, entries: &[Entry]) {
    let checks = [
        ("belt", filter.belt.trim(), unique_values(entries, |e| e.belt.as_str())),
        ("club", filter.club.trim(), unique_values(entries, |e| e.club.as_str())),
    ];
    for (field, wanted, known) in checks {
        if !wanted.is_empty() && !known.iter().any(|k| k.eq_ignore_ascii_case(wanted)) {
            warn!("No entry has {field} {wanted:?}; known: {}", known.join(", "));
        }
    }
}

/// Run the CLI end to end and return the pretty JSON plan.
pub fn run(config: &CliConfig) -> Result<String> {
    config.validate()?;
    let entries = load_entries(&config.entries_path)?;
    let plan = build_plan(config, &entries)?;
    plan.to_json_pretty().context("Failed to serialize plan")
}
