use crate::classifiers::bayes::NaiveBayes;
use crate::classifiers::classifier::Classifier;
use crate::classifiers::majority_class::MajorityClass;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Base learner wrapped by the detector, serialized as `{"type": "naive-bayes"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(LearnerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum LearnerChoice {
    #[default]
    #[strum_discriminants(strum(
        message = "Naive Bayes",
        detailed_message = "Gaussian/count based Naive Bayes over the selected attributes."
    ))]
    NaiveBayes,

    #[strum_discriminants(strum(
        message = "Majority Class",
        detailed_message = "Predicts the class distribution observed so far."
    ))]
    MajorityClass,
}

impl LearnerChoice {
    pub fn from_kind(kind: LearnerKind) -> Self {
        match kind {
            LearnerKind::NaiveBayes => LearnerChoice::NaiveBayes,
            LearnerKind::MajorityClass => LearnerChoice::MajorityClass,
        }
    }

    pub fn kind(&self) -> LearnerKind {
        LearnerKind::from(self)
    }

    pub fn build(&self) -> Box<dyn Classifier> {
        match self {
            LearnerChoice::NaiveBayes => Box::new(NaiveBayes::new()),
            LearnerChoice::MajorityClass => Box::new(MajorityClass::new()),
        }
    }
}
