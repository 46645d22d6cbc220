use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::feature_selection::{AttributeSelector, SelectionError};

#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSelector;

impl AttributeSelector for FailingSelector {
    fn select_attributes(
        &mut self,
        _header: &InstanceHeader,
        _chunk: &[DenseInstance],
    ) -> Result<Vec<usize>, SelectionError> {
        Err(SelectionError::Failed("selector unavailable".into()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
