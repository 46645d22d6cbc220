use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use std::sync::Arc;

pub trait Classifier: Send {
    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Vec<f64>;
    fn set_model_context(&mut self, header: Arc<InstanceHeader>);
    fn train_on_instance(&mut self, instance: &dyn Instance);

    /// Forget everything learned so far. The model context is kept.
    fn reset_learning(&mut self);

    fn is_randomizable(&self) -> bool {
        false
    }
}
