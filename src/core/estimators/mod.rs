mod gaussian_estimator;

pub use gaussian_estimator::GaussianEstimator;
