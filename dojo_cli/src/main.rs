//! Turns a tournament's entries into divisions and scheduled brackets.

use std::path::PathBuf;

use anyhow::Error;
use dojo_brackets::BracketFilter;
use dojo_cli::{CliConfig, CliOverrides};
use log::info;
use pico_args::Arguments;

const HELP: &str = "\
Create divisions, brackets and a match schedule from tournament entries

USAGE:
  dojo_cli --entries FILE [OPTIONS]

OPTIONS:
  --entries    FILE        JSON array of entries           [default: env ENTRIES_FILE]
  --start      HH:MM       First match start time          [default: env MATCH_START_TIME or 09:30]
  --span       N           Age and weight band span        [default: env BAND_SPAN or 2]
  --idle       SECS        Idle seconds after every match  [default: env IDLE_SECONDS_BETWEEN_MATCHES or 300]
  --belt       BELT        Only show divisions of this belt
  --club       CLUB        Only show matches with a fighter from this club
  --search     QUERY       Only show matches whose number or fighter name contains QUERY

FLAGS:
  --deterministic-ids      Derive ids from entry data instead of random UUIDs
  --single-round           Reserve one round per match instead of all rounds
  -h, --help               Print help information

ENVIRONMENT:
  DETERMINISTIC_IDS        true/false
  SLOT_POLICY              all_rounds or single_round
  RUST_LOG                 Log level (e.g. info, debug)
  (A .env file in the working directory is loaded first)
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = CliOverrides {
        entries_path: pargs.opt_value_from_str::<_, PathBuf>("--entries")?,
        start_match_time: pargs.opt_value_from_str("--start")?,
        band_span: pargs.opt_value_from_str("--span")?,
        idle_seconds: pargs.opt_value_from_str("--idle")?,
        deterministic_ids: pargs.contains("--deterministic-ids"),
        single_round: pargs.contains("--single-round"),
        filter: BracketFilter {
            search_query: pargs.opt_value_from_str("--search")?.unwrap_or_default(),
            belt: pargs.opt_value_from_str("--belt")?.unwrap_or_default(),
            club: pargs.opt_value_from_str("--club")?.unwrap_or_default(),
        },
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {remaining:?}\n\n{HELP}");
    }

    env_logger::builder().format_target(false).init();

    let config = CliConfig::from_env(overrides)?;
    info!(
        "Planning entries from {} starting at {}",
        config.entries_path.display(),
        config.start_match_time
    );

    let json = dojo_cli::run(&config)?;
    println!("{json}");

    Ok(())
}
