mod feature_drift_generator;

pub use feature_drift_generator::FeatureDriftGenerator;
