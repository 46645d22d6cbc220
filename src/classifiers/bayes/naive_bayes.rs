use crate::classifiers::attribute_class_observers::{
    AttributeClassObserver, GaussianNumericAttributeClassObserver, NominalAttributeClassObserver,
};
use crate::classifiers::classifier::Classifier;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use std::sync::Arc;

#[derive(Default)]
pub struct NaiveBayes {
    header: Option<Arc<InstanceHeader>>,
    observed_class_distribution: Vec<f64>,
    attribute_observers: Vec<Option<Box<dyn AttributeClassObserver>>>,
}

impl NaiveBayes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observed_class_distribution(&self) -> &[f64] {
        &self.observed_class_distribution
    }

    #[inline]
    fn model_att_index_to_instance_att_index(model_idx: usize, class_idx: usize) -> usize {
        if class_idx > model_idx {
            model_idx
        } else {
            model_idx + 1
        }
    }

    fn new_observer(instance: &dyn Instance, inst_idx: usize) -> Box<dyn AttributeClassObserver> {
        match instance
            .attribute_at_index(inst_idx)
            .and_then(|a| a.num_values())
        {
            Some(num_values) => Box::new(NominalAttributeClassObserver::new(num_values)),
            None => Box::new(GaussianNumericAttributeClassObserver::new()),
        }
    }

    pub fn do_naive_bayes_prediction(
        instance: &dyn Instance,
        observed_class_distribution: &[f64],
        attribute_observers: &[Option<Box<dyn AttributeClassObserver>>],
    ) -> Vec<f64> {
        let mut votes = vec![0.0; observed_class_distribution.len()];
        let observed_class_sum: f64 = observed_class_distribution.iter().sum();
        if observed_class_sum <= 0.0 {
            return votes;
        }

        let class_idx = instance.class_index();
        let num_model_atts = instance.number_of_attributes().saturating_sub(1);

        for (class_index, vote) in votes.iter_mut().enumerate() {
            let mut score = observed_class_distribution[class_index] / observed_class_sum;

            for att_index in 0..num_model_atts {
                let Some(Some(obs)) = attribute_observers.get(att_index) else {
                    continue;
                };
                let inst_idx = Self::model_att_index_to_instance_att_index(att_index, class_idx);
                let Some(x) = instance.value_at_index(inst_idx).filter(|v| !v.is_nan()) else {
                    continue;
                };
                score *= obs
                    .probability_of_attribute_value_given_class(x, class_index)
                    .unwrap_or(0.0);
            }
            *vote = score;
        }
        votes
    }
}

impl Classifier for NaiveBayes {
    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Vec<f64> {
        NaiveBayes::do_naive_bayes_prediction(
            instance,
            &self.observed_class_distribution,
            &self.attribute_observers,
        )
    }

    fn set_model_context(&mut self, header: Arc<InstanceHeader>) {
        self.observed_class_distribution = vec![0.0; header.number_of_classes()];
        self.attribute_observers.clear();
        self.attribute_observers
            .resize_with(header.number_of_attributes().saturating_sub(1), || None);
        self.header = Some(header);
    }

    fn train_on_instance(&mut self, instance: &dyn Instance) {
        if self.header.is_none() {
            return;
        }

        let w = instance.weight().max(0.0);
        if w == 0.0 {
            return;
        }

        let Some(class_val) = instance.class_value().map(|c| c as usize) else {
            return;
        };

        if class_val >= self.observed_class_distribution.len() {
            self.observed_class_distribution.resize(class_val + 1, 0.0);
        }
        self.observed_class_distribution[class_val] += w;

        let class_idx = instance.class_index();
        let num_model_atts = instance.number_of_attributes().saturating_sub(1);
        if self.attribute_observers.len() < num_model_atts {
            self.attribute_observers.resize_with(num_model_atts, || None);
        }

        for m in 0..num_model_atts {
            let inst_idx = Self::model_att_index_to_instance_att_index(m, class_idx);
            let Some(value) = instance.value_at_index(inst_idx) else {
                continue;
            };
            self.attribute_observers[m]
                .get_or_insert_with(|| Self::new_observer(instance, inst_idx))
                .observe_attribute_class(value, class_val, w);
        }
    }

    fn reset_learning(&mut self) {
        match self.header.clone() {
            Some(header) => self.set_model_context(header),
            None => {
                self.observed_class_distribution.clear();
                self.attribute_observers.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::DenseInstance;
    use crate::testing::{mixed_header, numeric_header};

    #[test]
    fn untrained_model_votes_zero() {
        let h = numeric_header(2, 2);
        let mut nb = NaiveBayes::new();
        nb.set_model_context(Arc::clone(&h));

        let inst = DenseInstance::new(h, vec![0.0, 1.0, f64::NAN], 1.0);
        assert_eq!(nb.get_votes_for_instance(&inst), vec![0.0, 0.0]);
    }

    #[test]
    fn train_without_context_is_ignored() {
        let h = numeric_header(1, 2);
        let mut nb = NaiveBayes::new();
        nb.train_on_instance(&DenseInstance::new(h, vec![1.0, 0.0], 1.0));
        assert!(nb.observed_class_distribution().is_empty());
    }

    #[test]
    fn numeric_gaussian_observer_separates_classes() {
        let h = numeric_header(1, 2);
        let mut nb = NaiveBayes::new();
        nb.set_model_context(Arc::clone(&h));

        for &v in &[-0.5, 0.0, 0.1, 0.2, -0.2] {
            nb.train_on_instance(&DenseInstance::new(Arc::clone(&h), vec![v, 0.0], 1.0));
        }
        for &v in &[4.8, 5.0, 5.2, 6.0, 4.0] {
            nb.train_on_instance(&DenseInstance::new(Arc::clone(&h), vec![v, 1.0], 1.0));
        }

        assert_eq!(nb.observed_class_distribution(), &[5.0, 5.0]);

        let near_c0 = DenseInstance::new(Arc::clone(&h), vec![0.15, f64::NAN], 1.0);
        let v0 = nb.get_votes_for_instance(&near_c0);
        assert!(v0[0] > v0[1], "votes={v0:?}");

        let near_c1 = DenseInstance::new(h, vec![5.1, f64::NAN], 1.0);
        let v1 = nb.get_votes_for_instance(&near_c1);
        assert!(v1[1] > v1[0], "votes={v1:?}");
    }

    #[test]
    fn nominal_attribute_uses_counts() {
        let h = mixed_header();
        let mut nb = NaiveBayes::new();
        nb.set_model_context(Arc::clone(&h));

        // colour {red, blue}, size numeric, class {no, yes}
        for _ in 0..4 {
            nb.train_on_instance(&DenseInstance::new(Arc::clone(&h), vec![0.0, 1.0, 1.0], 1.0));
            nb.train_on_instance(&DenseInstance::new(Arc::clone(&h), vec![1.0, 1.0, 0.0], 1.0));
        }

        let red = DenseInstance::new(h, vec![0.0, 1.0, f64::NAN], 1.0);
        let votes = nb.get_votes_for_instance(&red);
        assert!(votes[1] > votes[0], "votes={votes:?}");
    }

    #[test]
    fn reset_learning_keeps_context_and_forgets_counts() {
        let h = numeric_header(1, 2);
        let mut nb = NaiveBayes::new();
        nb.set_model_context(Arc::clone(&h));
        nb.train_on_instance(&DenseInstance::new(Arc::clone(&h), vec![1.0, 1.0], 1.0));

        nb.reset_learning();
        assert_eq!(nb.observed_class_distribution(), &[0.0, 0.0]);

        nb.train_on_instance(&DenseInstance::new(h, vec![1.0, 0.0], 2.0));
        assert_eq!(nb.observed_class_distribution(), &[2.0, 0.0]);
    }

    #[test]
    fn zero_weight_is_ignored() {
        let h = numeric_header(1, 2);
        let mut nb = NaiveBayes::new();
        nb.set_model_context(Arc::clone(&h));
        nb.train_on_instance(&DenseInstance::new(h, vec![1.0, 1.0], 0.0));
        assert_eq!(nb.observed_class_distribution(), &[0.0, 0.0]);
    }

    #[test]
    fn out_of_range_nominal_value_is_treated_as_missing() {
        let h = mixed_header();
        let mut nb = NaiveBayes::new();
        nb.set_model_context(Arc::clone(&h));

        nb.train_on_instance(&DenseInstance::new(Arc::clone(&h), vec![1e13, 1.0, 1.0], 1.0));
        nb.train_on_instance(&DenseInstance::new(Arc::clone(&h), vec![-3.0, 1.0, 0.0], 1.0));
        assert_eq!(nb.observed_class_distribution(), &[1.0, 1.0]);

        let votes = nb.get_votes_for_instance(&DenseInstance::new(h, vec![1e13, 1.0, f64::NAN], 1.0));
        assert_eq!(votes.len(), 2);
        assert!(votes.iter().all(|v| v.is_finite()));
    }
}
