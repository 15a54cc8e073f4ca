//! CLI configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use dojo_brackets::{
    BracketFilter, EngineConfig, IdStrategy, PartitionSettings, SlotPolicy, TournamentSchedule,
    constants::{DEFAULT_BAND_SPAN, DEFAULT_START_MATCH_TIME, IDLE_SECONDS_BETWEEN_MATCHES},
    schedule::parse_start_time,
};
use std::path::PathBuf;

/// Values given on the command line; they win over the environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub entries_path: Option<PathBuf>,
    pub start_match_time: Option<String>,
    pub band_span: Option<u32>,
    pub idle_seconds: Option<u32>,
    pub deterministic_ids: bool,
    pub single_round: bool,
    pub filter: BracketFilter,
}

/// Complete CLI configuration loaded from arguments and environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// JSON file holding an array of entries
    pub entries_path: PathBuf,
    /// First match start time, `HH:MM`
    pub start_match_time: String,
    /// Span of both age and weight bands
    pub band_span: u32,
    /// Idle buffer after every match, in seconds
    pub idle_seconds: u32,
    /// Identifier generation
    pub id_strategy: IdStrategy,
    /// Match slot sizing
    pub slot_policy: SlotPolicy,
    /// Display filter applied to the finished plan
    pub filter: BracketFilter,
}

impl CliConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if required variables are missing or invalid
    pub fn from_env(overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// # Arguments
    ///
    /// * `overrides` - Values from the command line
    /// * `lookup` - Variable source, e.g. the process environment
    ///
    /// # Returns
    ///
    /// * `Result<CliConfig, ConfigError>` - Loaded configuration or error
    pub fn from_lookup<F>(overrides: CliOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let entries_path = overrides
            .entries_path
            .or_else(|| lookup("ENTRIES_FILE").map(PathBuf::from))
            .ok_or_else(|| ConfigError::MissingRequired {
                var: "ENTRIES_FILE".to_string(),
                hint: "Pass --entries FILE or set ENTRIES_FILE".to_string(),
            })?;

        let start_match_time = overrides
            .start_match_time
            .or_else(|| lookup("MATCH_START_TIME"))
            .unwrap_or_else(|| DEFAULT_START_MATCH_TIME.to_string());

        let band_span = match overrides.band_span {
            Some(span) => span,
            None => parse_var_or(&lookup, "BAND_SPAN", DEFAULT_BAND_SPAN)?,
        };

        let idle_seconds = match overrides.idle_seconds {
            Some(idle) => idle,
            None => parse_var_or(
                &lookup,
                "IDLE_SECONDS_BETWEEN_MATCHES",
                IDLE_SECONDS_BETWEEN_MATCHES,
            )?,
        };

        let deterministic =
            overrides.deterministic_ids || parse_flag(&lookup, "DETERMINISTIC_IDS")?;
        let id_strategy = if deterministic {
            IdStrategy::Deterministic
        } else {
            IdStrategy::Random
        };

        let slot_policy = if overrides.single_round {
            SlotPolicy::SingleRound
        } else {
            match lookup("SLOT_POLICY").as_deref().map(str::trim) {
                None | Some("") | Some("all_rounds") => SlotPolicy::AllRounds,
                Some("single_round") => SlotPolicy::SingleRound,
                Some(other) => {
                    return Err(ConfigError::Invalid {
                        var: "SLOT_POLICY".to_string(),
                        reason: format!("Expected all_rounds or single_round, got {other:?}"),
                    });
                }
            }
        };

        Ok(CliConfig {
            entries_path,
            start_match_time,
            band_span,
            idle_seconds,
            id_strategy,
            slot_policy,
            filter: overrides.filter,
        })
    }

    /// Validate configuration after loading
    ///
    /// # Returns
    ///
    /// * `Result<(), ConfigError>` - Success or validation error
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_start_time(&self.start_match_time).map_err(|e| ConfigError::Invalid {
            var: "MATCH_START_TIME".to_string(),
            reason: e.to_string(),
        })?;

        self.engine_config()
            .validate()
            .map_err(|e| ConfigError::Invalid {
                var: "BAND_SPAN / IDLE_SECONDS_BETWEEN_MATCHES".to_string(),
                reason: e.to_string(),
            })
    }

    /// Engine configuration derived from the CLI settings
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            partition: PartitionSettings {
                age_span: self.band_span,
                weight_span: self.band_span,
                ..PartitionSettings::default()
            },
            idle_seconds: self.idle_seconds,
            slot_policy: self.slot_policy,
            id_strategy: self.id_strategy,
        }
    }

    pub fn schedule(&self) -> TournamentSchedule {
        TournamentSchedule::starting_at(self.start_match_time.clone())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse a variable with default fallback when unset or blank
fn parse_var_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("Cannot parse {raw:?}"),
            })
        }
        _ => Ok(default),
    }
}

/// Boolean variable, accepting `1/0`, `true/false`, `yes/no`
fn parse_flag<F>(lookup: &F, key: &str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(false);
    };
    match raw.trim().to_lowercase().as_str() {
        "" | "0" | "false" | "no" => Ok(false),
        "1" | "true" | "yes" => Ok(true),
        _ => Err(ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("Expected a boolean, got {raw:?}"),
        }),
    }
}
