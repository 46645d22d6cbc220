//! Landmark-based feature drift detection.
//!
//! [`LandmarkFeatureDriftDetector`] wraps a stream classifier, buffers training
//! examples into fixed-size chunks and re-runs attribute selection at every
//! chunk boundary. The wrapped learner only ever sees the selected attributes
//! and is reset whenever the selection changes.

pub mod classifiers;
pub mod core;
pub mod feature_selection;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use classifiers::lfdd::{
    FailurePolicy, LandmarkFeatureDriftDetector, LfddConfig, LfddError, SelectionEvent,
    SelectionOutcome,
};
