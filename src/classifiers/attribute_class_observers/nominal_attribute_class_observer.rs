use crate::classifiers::attribute_class_observers::AttributeClassObserver;

/// Per-class value counts for a nominal attribute, Laplace smoothed on lookup.
///
/// Values that are not a label index in `0..num_values` count as missing.
#[derive(Debug)]
pub struct NominalAttributeClassObserver {
    num_values: usize,
    total_weight_observed: f64,
    missing_weight_observed: f64,
    attribute_value_distribution_per_class: Vec<Vec<f64>>,
}

impl NominalAttributeClassObserver {
    pub fn new(num_values: usize) -> Self {
        Self {
            num_values,
            total_weight_observed: 0.0,
            missing_weight_observed: 0.0,
            attribute_value_distribution_per_class: Vec::new(),
        }
    }

    pub fn num_values(&self) -> usize {
        self.num_values
    }

    pub fn total_weight_observed(&self) -> f64 {
        self.total_weight_observed
    }

    pub fn missing_weight_observed(&self) -> f64 {
        self.missing_weight_observed
    }

    #[inline]
    fn label_index(&self, att_val: f64) -> Option<usize> {
        (att_val.is_finite() && att_val >= 0.0 && att_val < self.num_values as f64)
            .then_some(att_val as usize)
    }

    #[inline]
    fn row_mut(&mut self, class_val: usize) -> &mut Vec<f64> {
        if class_val >= self.attribute_value_distribution_per_class.len() {
            let width = self.num_values;
            self.attribute_value_distribution_per_class
                .resize_with(class_val + 1, || vec![0.0; width]);
        }
        &mut self.attribute_value_distribution_per_class[class_val]
    }
}

impl AttributeClassObserver for NominalAttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: f64, class_val: usize, weight: f64) {
        match self.label_index(att_val) {
            Some(index) => self.row_mut(class_val)[index] += weight,
            None => self.missing_weight_observed += weight,
        }
        self.total_weight_observed += weight;
    }

    fn probability_of_attribute_value_given_class(
        &self,
        att_val: f64,
        class_val: usize,
    ) -> Option<f64> {
        if att_val.is_nan() {
            return None;
        }
        let row = self.attribute_value_distribution_per_class.get(class_val)?;
        if row.is_empty() {
            return None;
        }
        let count = self
            .label_index(att_val)
            .and_then(|i| row.get(i))
            .copied()
            .unwrap_or(0.0);
        let sum: f64 = row.iter().sum();
        Some((count + 1.0) / (sum + row.len() as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laplace_smoothed_probabilities() {
        let mut obs = NominalAttributeClassObserver::new(2);
        obs.observe_attribute_class(0.0, 0, 1.0);
        obs.observe_attribute_class(0.0, 0, 1.0);
        obs.observe_attribute_class(1.0, 0, 1.0);

        let p0 = obs.probability_of_attribute_value_given_class(0.0, 0).unwrap();
        let p1 = obs.probability_of_attribute_value_given_class(1.0, 0).unwrap();
        assert!((p0 - 3.0 / 5.0).abs() < 1e-12);
        assert!((p1 - 2.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn unseen_class_and_missing_value_are_none() {
        let mut obs = NominalAttributeClassObserver::new(2);
        obs.observe_attribute_class(f64::NAN, 0, 2.0);
        assert_eq!(obs.missing_weight_observed(), 2.0);
        assert!(obs.probability_of_attribute_value_given_class(0.0, 3).is_none());
        assert!(obs.probability_of_attribute_value_given_class(f64::NAN, 0).is_none());
    }

    #[test]
    fn values_outside_label_range_count_as_missing() {
        let mut obs = NominalAttributeClassObserver::new(3);
        for v in [1e13, -1.0, 3.0, f64::INFINITY] {
            obs.observe_attribute_class(v, 0, 1.0);
        }
        obs.observe_attribute_class(2.0, 0, 1.0);

        assert_eq!(obs.missing_weight_observed(), 4.0);
        assert_eq!(obs.total_weight_observed(), 5.0);
        // one real observation of label 2 over three labels
        let p2 = obs.probability_of_attribute_value_given_class(2.0, 0).unwrap();
        assert!((p2 - 2.0 / 4.0).abs() < 1e-12);
        let p_far = obs.probability_of_attribute_value_given_class(1e13, 0).unwrap();
        assert!((p_far - 1.0 / 4.0).abs() < 1e-12);
    }
}
