use crate::classifiers::attribute_class_observers::AttributeClassObserver;
use crate::core::estimators::GaussianEstimator;

/// One Gaussian per class for a numeric attribute.
#[derive(Debug, Default)]
pub struct GaussianNumericAttributeClassObserver {
    attribute_value_distribution_per_class: Vec<Option<GaussianEstimator>>,
}

impl GaussianNumericAttributeClassObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn estimator_for_class(&self, class_val: usize) -> Option<&GaussianEstimator> {
        self.attribute_value_distribution_per_class
            .get(class_val)
            .and_then(Option::as_ref)
    }
}

impl AttributeClassObserver for GaussianNumericAttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: f64, class_val: usize, weight: f64) {
        if att_val.is_nan() {
            return;
        }
        if class_val >= self.attribute_value_distribution_per_class.len() {
            self.attribute_value_distribution_per_class
                .resize_with(class_val + 1, || None);
        }
        self.attribute_value_distribution_per_class[class_val]
            .get_or_insert_with(GaussianEstimator::new)
            .add_observation(att_val, weight);
    }

    fn probability_of_attribute_value_given_class(
        &self,
        att_val: f64,
        class_val: usize,
    ) -> Option<f64> {
        if att_val.is_nan() {
            return None;
        }
        Some(
            self.estimator_for_class(class_val)
                .map(|est| est.probability_density(att_val))
                .unwrap_or(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_is_higher_near_class_mean() {
        let mut obs = GaussianNumericAttributeClassObserver::new();
        for v in [0.0, 0.1, -0.1, 0.2] {
            obs.observe_attribute_class(v, 0, 1.0);
        }
        for v in [5.0, 5.1, 4.9, 5.2] {
            obs.observe_attribute_class(v, 1, 1.0);
        }
        let near0 = obs.probability_of_attribute_value_given_class(0.05, 0).unwrap();
        let far0 = obs.probability_of_attribute_value_given_class(0.05, 1).unwrap();
        assert!(near0 > far0);
    }

    #[test]
    fn unseen_class_has_zero_density() {
        let mut obs = GaussianNumericAttributeClassObserver::new();
        obs.observe_attribute_class(1.0, 0, 1.0);
        assert_eq!(obs.probability_of_attribute_value_given_class(1.0, 4), Some(0.0));
        assert!(obs.estimator_for_class(4).is_none());
    }
}
