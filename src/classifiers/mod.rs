pub mod attribute_class_observers;
pub mod bayes;
pub mod classifier;
pub mod learner_choice;
pub mod lfdd;
pub mod majority_class;

pub use classifier::Classifier;
pub use learner_choice::{LearnerChoice, LearnerKind};
pub use lfdd::{LandmarkFeatureDriftDetector, LfddConfig};
pub use majority_class::MajorityClass;
