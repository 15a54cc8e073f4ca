//! Engine configuration.
//!
//! Every tunable of the pipeline lives here as an explicit parameter: band
//! spans, the weight upper-bound convention, the idle buffer between matches,
//! how a match slot is sized, and how identifiers are generated.

use crate::constants::{
    DEFAULT_BAND_SPAN, IDLE_SECONDS_BETWEEN_MATCHES, MAX_BAND_SPAN, SECONDS_PER_DAY,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// How the stored upper bound of a weight band is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUpperBound {
    /// `start + span + 1`: the exclusive ceiling of a continuous weight range.
    #[default]
    Exclusive,
    /// `start + span`: same convention as age bands.
    Inclusive,
}

/// How long a single match occupies the schedule, before the idle buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPolicy {
    /// Every match reserves `num_rounds * duration`.
    ///
    /// Known to inflate schedules for divisions with many rounds.
    #[default]
    AllRounds,
    /// Every match reserves a single round `duration`.
    SingleRound,
}

/// Identifier generation for divisions and participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Fresh random UUIDs on every run
    #[default]
    Random,
    /// Name-based UUIDs derived from stable keys, identical across runs
    Deterministic,
}

impl IdStrategy {
    /// Generate an identifier for the given stable key.
    pub fn generate(&self, key: &str) -> Uuid {
        match self {
            IdStrategy::Random => Uuid::new_v4(),
            IdStrategy::Deterministic => Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()),
        }
    }
}

/// Band partitioning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSettings {
    /// Age band span (band width is `span + 1`)
    pub age_span: u32,
    /// Weight band span (band width is `span + 1`)
    pub weight_span: u32,
    /// Stored upper bound convention for weight bands
    pub weight_upper: WeightUpperBound,
}

impl Default for PartitionSettings {
    fn default() -> Self {
        Self {
            age_span: DEFAULT_BAND_SPAN,
            weight_span: DEFAULT_BAND_SPAN,
            weight_upper: WeightUpperBound::default(),
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Band partitioning
    pub partition: PartitionSettings,
    /// Idle buffer after every match, in seconds
    pub idle_seconds: u32,
    /// Match slot sizing
    pub slot_policy: SlotPolicy,
    /// Identifier generation
    pub id_strategy: IdStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            partition: PartitionSettings::default(),
            idle_seconds: IDLE_SECONDS_BETWEEN_MATCHES,
            slot_policy: SlotPolicy::default(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl EngineConfig {
    /// Validate configuration before running the pipeline
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.partition.age_span > MAX_BAND_SPAN {
            return Err(ConfigError::Invalid {
                field: "age_span".to_string(),
                reason: format!("Must be at most {MAX_BAND_SPAN}"),
            });
        }

        if self.partition.weight_span > MAX_BAND_SPAN {
            return Err(ConfigError::Invalid {
                field: "weight_span".to_string(),
                reason: format!("Must be at most {MAX_BAND_SPAN}"),
            });
        }

        if self.idle_seconds >= SECONDS_PER_DAY {
            return Err(ConfigError::Invalid {
                field: "idle_seconds".to_string(),
                reason: "Must be shorter than one day".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration for {field}: {reason}")]
    Invalid { field: String, reason: String },
}
