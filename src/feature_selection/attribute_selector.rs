use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::feature_selection::SelectionError;

/// Chooses a subset of input attributes from a complete batch of examples.
///
/// Implementations return indices into `header` and never include the class
/// index. Order and duplicates do not matter; callers sort and deduplicate.
pub trait AttributeSelector: Send {
    fn select_attributes(
        &mut self,
        header: &InstanceHeader,
        chunk: &[DenseInstance],
    ) -> Result<Vec<usize>, SelectionError>;

    fn name(&self) -> &'static str;
}
