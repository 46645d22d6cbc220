use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::testing::numeric_header;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Binary stream over uniform `[0, 1)` features where the class is
/// `x[relevant] > 0.5`. The relevant feature switches from `relevant_before`
/// to `relevant_after` at the `drift_at`-th instance (0-based); every other
/// feature is noise.
pub struct FeatureDriftGenerator {
    header: Arc<InstanceHeader>,
    num_features: usize,
    relevant_before: usize,
    relevant_after: usize,
    drift_at: usize,
    produced: usize,
    rng: StdRng,
}

impl FeatureDriftGenerator {
    /// # Panics
    ///
    /// Panics if either relevant feature index is not below `num_features`.
    pub fn new(
        num_features: usize,
        relevant_before: usize,
        relevant_after: usize,
        drift_at: usize,
        seed: u64,
    ) -> Self {
        assert!(relevant_before < num_features && relevant_after < num_features);
        Self {
            header: numeric_header(num_features, 2),
            num_features,
            relevant_before,
            relevant_after,
            drift_at,
            produced: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn produced(&self) -> usize {
        self.produced
    }

    pub fn relevant_feature(&self) -> usize {
        if self.produced >= self.drift_at {
            self.relevant_after
        } else {
            self.relevant_before
        }
    }

    pub fn next_instance(&mut self) -> DenseInstance {
        let relevant = self.relevant_feature();
        let mut values: Vec<f64> = (0..self.num_features)
            .map(|_| self.rng.random::<f64>())
            .collect();
        let class = if values[relevant] > 0.5 { 1.0 } else { 0.0 };
        values.push(class);
        self.produced += 1;
        DenseInstance::new(Arc::clone(&self.header), values, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::Instance;

    #[test]
    fn class_follows_relevant_feature_across_drift() {
        let mut g = FeatureDriftGenerator::new(3, 0, 2, 5, 1);
        for i in 0..10 {
            let inst = g.next_instance();
            let relevant = if i < 5 { 0 } else { 2 };
            let expected = if inst.values()[relevant] > 0.5 { 1.0 } else { 0.0 };
            assert_eq!(inst.class_value(), Some(expected));
        }
        assert_eq!(g.produced(), 10);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = FeatureDriftGenerator::new(2, 0, 1, 3, 42);
        let mut b = FeatureDriftGenerator::new(2, 0, 1, 3, 42);
        for _ in 0..5 {
            assert_eq!(a.next_instance().values(), b.next_instance().values());
        }
    }

    #[test]
    #[should_panic]
    fn relevant_feature_must_exist() {
        FeatureDriftGenerator::new(2, 0, 2, 10, 1);
    }
}
