use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::feature_selection::ProjectionError;
use std::sync::Arc;

/// Reduces instances of one input schema to a selected attribute subset.
///
/// The reduced schema lists the selected attributes in ascending input order
/// followed by the class attribute, which is always kept.
#[derive(Debug, Clone)]
pub struct AttributeProjection {
    input_attributes: usize,
    selected: Vec<usize>,
    source_indices: Vec<usize>,
    header: Arc<InstanceHeader>,
}

impl AttributeProjection {
    pub fn new(input: &InstanceHeader, selected: &[usize]) -> Result<Self, ProjectionError> {
        let attributes = input.number_of_attributes();
        let class_index = input.class_index();
        if class_index >= attributes {
            return Err(ProjectionError::AttributeOutOfRange {
                index: class_index,
                attributes,
            });
        }

        let mut features: Vec<usize> = selected
            .iter()
            .copied()
            .filter(|&i| i != class_index)
            .collect();
        features.sort_unstable();
        features.dedup();
        if let Some(&index) = features.iter().find(|&&i| i >= attributes) {
            return Err(ProjectionError::AttributeOutOfRange { index, attributes });
        }

        let mut source_indices = features.clone();
        source_indices.push(class_index);

        let reduced = source_indices
            .iter()
            .filter_map(|&i| input.attribute_ref(i).cloned())
            .collect();
        let header = InstanceHeader::new(
            format!("{}-selected", input.relation_name()),
            reduced,
            features.len(),
        );

        Ok(Self {
            input_attributes: attributes,
            selected: features,
            source_indices,
            header: Arc::new(header),
        })
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    /// Selected input attribute indices, ascending, class excluded.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub fn input_attributes(&self) -> usize {
        self.input_attributes
    }

    pub fn project(&self, instance: &dyn Instance) -> Result<DenseInstance, ProjectionError> {
        let found = instance.number_of_attributes();
        if found != self.input_attributes {
            return Err(ProjectionError::AttributeCountMismatch {
                expected: self.input_attributes,
                found,
            });
        }

        let values = self
            .source_indices
            .iter()
            .map(|&i| instance.value_at_index(i).unwrap_or(f64::NAN))
            .collect();
        Ok(DenseInstance::new(
            Arc::clone(&self.header),
            values,
            instance.weight(),
        ))
    }
}
