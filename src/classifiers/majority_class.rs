use crate::classifiers::classifier::Classifier;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use std::sync::Arc;

/// Votes with the weighted class distribution seen so far, ignoring attributes.
#[derive(Debug, Default)]
pub struct MajorityClass {
    observed_class_distribution: Vec<f64>,
}

impl MajorityClass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observed_class_distribution(&self) -> &[f64] {
        &self.observed_class_distribution
    }
}

impl Classifier for MajorityClass {
    fn get_votes_for_instance(&self, _instance: &dyn Instance) -> Vec<f64> {
        self.observed_class_distribution.clone()
    }

    fn set_model_context(&mut self, header: Arc<InstanceHeader>) {
        self.observed_class_distribution = vec![0.0; header.number_of_classes()];
    }

    fn train_on_instance(&mut self, instance: &dyn Instance) {
        let Some(class_val) = instance.class_value().map(|c| c as usize) else {
            return;
        };
        if class_val >= self.observed_class_distribution.len() {
            self.observed_class_distribution.resize(class_val + 1, 0.0);
        }
        self.observed_class_distribution[class_val] += instance.weight().max(0.0);
    }

    fn reset_learning(&mut self) {
        self.observed_class_distribution
            .iter_mut()
            .for_each(|c| *c = 0.0);
    }
}
