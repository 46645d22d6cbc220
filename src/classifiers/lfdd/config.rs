use crate::classifiers::learner_choice::LearnerChoice;
use crate::classifiers::lfdd::LfddError;
use anyhow::Context;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CHUNK_SIZE: usize = 500;
fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

pub const DEFAULT_EVENT_HISTORY: usize = 256;
fn default_event_history() -> usize {
    DEFAULT_EVENT_HISTORY
}

/// What the detector does when a selection run or a projection fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Fall back to the unreduced instance and keep going.
    #[default]
    UseFullInstance,
    /// Drop the instance; predictions for it are empty vote vectors.
    SkipInstance,
    /// Surface the error to the caller of `try_train` / `try_predict`.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LfddConfig {
    #[serde(default)]
    #[schemars(
        title = "Base Learner",
        description = "Classifier trained on the selected attributes"
    )]
    pub base_learner: LearnerChoice,

    #[serde(default = "default_chunk_size")]
    #[schemars(
        title = "Chunk Size",
        description = "Number of examples buffered before each feature selection",
        range(min = 1)
    )]
    pub chunk_size: usize,

    #[serde(default)]
    #[schemars(
        title = "Failure Policy",
        description = "Handling of failed selections and projections"
    )]
    pub failure_policy: FailurePolicy,

    #[serde(default = "default_event_history")]
    #[schemars(
        title = "Event History",
        description = "Most recent selection events kept for inspection (0 keeps none)"
    )]
    pub event_history: usize,
}

impl Default for LfddConfig {
    fn default() -> Self {
        Self {
            base_learner: LearnerChoice::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            failure_policy: FailurePolicy::default(),
            event_history: DEFAULT_EVENT_HISTORY,
        }
    }
}

impl LfddConfig {
    pub fn new(base_learner: LearnerChoice, chunk_size: usize) -> Self {
        Self {
            base_learner,
            chunk_size,
            ..Self::default()
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn with_event_history(mut self, event_history: usize) -> Self {
        self.event_history = event_history;
        self
    }

    pub fn validate(&self) -> Result<(), LfddError> {
        if self.chunk_size == 0 {
            return Err(LfddError::InvalidConfig(
                "chunk_size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let config: LfddConfig =
            serde_json::from_str(raw).context("failed to parse LFDD configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("invalid configuration in {}", path.display()))
    }

    pub fn schema() -> Schema {
        schema_for!(LfddConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_historical_options() {
        let c = LfddConfig::default();
        assert_eq!(c.chunk_size, 500);
        assert_eq!(c.base_learner, LearnerChoice::NaiveBayes);
        assert_eq!(c.failure_policy, FailurePolicy::UseFullInstance);
        assert_eq!(c.event_history, DEFAULT_EVENT_HISTORY);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_object_uses_defaults() {
        let c = LfddConfig::from_json_str("{}").unwrap();
        assert_eq!(c, LfddConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let raw = json!({
            "base_learner": {"type": "majority-class"},
            "chunk_size": 50,
            "failure_policy": "skip-instance",
            "event_history": 4
        })
        .to_string();
        let c = LfddConfig::from_json_str(&raw).unwrap();
        assert_eq!(c.base_learner, LearnerChoice::MajorityClass);
        assert_eq!(c.chunk_size, 50);
        assert_eq!(c.failure_policy, FailurePolicy::SkipInstance);
        assert_eq!(c.event_history, 4);
    }

    #[test]
    fn rejects_zero_chunk_size() {
        assert!(matches!(
            LfddConfig::default().with_chunk_size(0).validate(),
            Err(LfddError::InvalidConfig(_))
        ));
        assert!(LfddConfig::from_json_str(r#"{"chunk_size": 0}"#).is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(LfddConfig::from_json_str(r#"{"chunk": 10}"#).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"chunk_size": 7, "failure_policy": "fail"}}"#).unwrap();

        let c = LfddConfig::from_path(file.path()).unwrap();
        assert_eq!(c.chunk_size, 7);
        assert_eq!(c.failure_policy, FailurePolicy::Fail);
    }

    #[test]
    fn missing_file_error_names_path() {
        let err = LfddConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }

    #[test]
    fn schema_exposes_chunk_size_bounds() {
        let v = serde_json::to_value(LfddConfig::schema()).unwrap();
        let chunk = v
            .get("properties")
            .and_then(|p| p.get("chunk_size"))
            .cloned()
            .unwrap_or(Value::Null);
        assert_eq!(chunk.get("minimum").and_then(Value::as_u64), Some(1));
        assert_eq!(chunk.get("title").and_then(Value::as_str), Some("Chunk Size"));
    }
}
