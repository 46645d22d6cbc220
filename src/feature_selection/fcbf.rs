use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::feature_selection::{
    AttributeSelector, DiscreteColumn, SelectionError, discretize_attribute,
    symmetrical_uncertainty,
};
use tracing::debug;

/// Fast correlation-based filter (Yu & Liu) ranked by symmetrical uncertainty.
///
/// Attributes whose SU with the class is above `threshold` are ranked by
/// decreasing relevance (lower index wins ties). Walking that ranking, each
/// surviving attribute removes every lower-ranked attribute it is at least as
/// correlated with as that attribute is with the class.
#[derive(Debug, Clone)]
pub struct SymmetricalUncertaintyFcbf {
    threshold: f64,
}

impl Default for SymmetricalUncertaintyFcbf {
    fn default() -> Self {
        Self { threshold: 0.0 }
    }
}

impl SymmetricalUncertaintyFcbf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn remove_redundant(
        ranked: &[(usize, f64)],
        columns: &[(usize, DiscreteColumn)],
        weights: &[f64],
    ) -> Vec<bool> {
        let mut removed = vec![false; ranked.len()];
        for p in 0..ranked.len() {
            if removed[p] {
                continue;
            }
            let predominant = &columns[ranked[p].0].1;
            for q in (p + 1)..ranked.len() {
                if removed[q] {
                    continue;
                }
                let (pos, relevance) = ranked[q];
                if symmetrical_uncertainty(predominant, &columns[pos].1, weights) >= relevance {
                    removed[q] = true;
                }
            }
        }
        removed
    }
}

impl AttributeSelector for SymmetricalUncertaintyFcbf {
    fn select_attributes(
        &mut self,
        header: &InstanceHeader,
        chunk: &[DenseInstance],
    ) -> Result<Vec<usize>, SelectionError> {
        if chunk.is_empty() {
            return Err(SelectionError::EmptyChunk);
        }

        let class_index = header.class_index();
        let attributes = header.number_of_attributes();
        if class_index >= attributes {
            return Err(SelectionError::ClassIndexOutOfRange {
                index: class_index,
                attributes,
            });
        }
        let num_classes = header
            .class_attribute()
            .and_then(|a| a.num_values())
            .ok_or(SelectionError::ClassNotNominal { index: class_index })?;

        let labelled: Vec<(&DenseInstance, usize)> = chunk
            .iter()
            .filter_map(|inst| {
                let c = inst.class_value()?;
                (c >= 0.0 && (c as usize) < num_classes).then_some((inst, c as usize))
            })
            .collect();
        if labelled.is_empty() {
            return Err(SelectionError::NoLabelledInstances);
        }

        let weights: Vec<f64> = labelled.iter().map(|(i, _)| i.weight().max(0.0)).collect();
        let classes: Vec<usize> = labelled.iter().map(|&(_, c)| c).collect();
        let class_column = DiscreteColumn {
            codes: classes.clone(),
            cardinality: num_classes,
        };

        let columns: Vec<(usize, DiscreteColumn)> = header
            .feature_indices()
            .map(|j| {
                let values: Vec<f64> = labelled
                    .iter()
                    .map(|(inst, _)| inst.value_at_index(j).unwrap_or(f64::NAN))
                    .collect();
                let nominal = header.attribute_at_index(j).and_then(|a| a.num_values());
                (j, discretize_attribute(&values, nominal, &classes, &weights, num_classes))
            })
            .collect();

        let mut ranked: Vec<(usize, f64)> = columns
            .iter()
            .enumerate()
            .map(|(pos, (_, col))| (pos, symmetrical_uncertainty(col, &class_column, &weights)))
            .filter(|&(_, su)| su > self.threshold)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let removed = Self::remove_redundant(&ranked, &columns, &weights);
        let mut selected: Vec<usize> = ranked
            .iter()
            .zip(&removed)
            .filter(|&(_, &gone)| !gone)
            .map(|(&(pos, _), _)| columns[pos].0)
            .collect();
        selected.sort_unstable();

        debug!(
            chunk = chunk.len(),
            relevant = ranked.len(),
            selected = ?selected,
            "fcbf selection finished"
        );
        Ok(selected)
    }

    fn name(&self) -> &'static str {
        "symmetrical-uncertainty-fcbf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
    use crate::testing::{FeatureDriftGenerator, numeric_header};
    use std::sync::Arc;

    fn nominal(name: &str, labels: &[&str]) -> AttributeRef {
        Arc::new(NominalAttribute::with_values(
            name.into(),
            labels.iter().map(|s| s.to_string()).collect(),
        ))
    }

    fn copy_constant_copy_header() -> Arc<InstanceHeader> {
        let attrs = vec![
            nominal("a", &["x", "y"]),
            nominal("constant", &["k"]),
            nominal("a_copy", &["x", "y"]),
            nominal("class", &["no", "yes"]),
        ];
        Arc::new(InstanceHeader::new("toy".into(), attrs, 3))
    }

    #[test]
    fn keeps_relevant_and_drops_redundant_and_constant() {
        let h = copy_constant_copy_header();
        let chunk: Vec<DenseInstance> = (0..20)
            .map(|i| {
                let v = (i % 2) as f64;
                DenseInstance::new(Arc::clone(&h), vec![v, 0.0, v, v], 1.0)
            })
            .collect();

        let mut fcbf = SymmetricalUncertaintyFcbf::new();
        assert_eq!(fcbf.select_attributes(&h, &chunk).unwrap(), vec![0]);
    }

    #[test]
    fn higher_threshold_filters_weak_attributes() {
        let h = copy_constant_copy_header();
        // `a` agrees with the class 3 times out of 4.
        let chunk: Vec<DenseInstance> = (0..40)
            .map(|i| {
                let c = (i % 2) as f64;
                let a = if i % 4 == 0 { 1.0 - c } else { c };
                DenseInstance::new(Arc::clone(&h), vec![a, 0.0, 0.0, c], 1.0)
            })
            .collect();

        let mut lenient = SymmetricalUncertaintyFcbf::new();
        assert_eq!(lenient.select_attributes(&h, &chunk).unwrap(), vec![0]);

        let mut strict = SymmetricalUncertaintyFcbf::with_threshold(0.9);
        assert!(strict.select_attributes(&h, &chunk).unwrap().is_empty());
    }

    #[test]
    fn finds_relevant_numeric_feature() {
        let mut generator = FeatureDriftGenerator::new(4, 1, 2, usize::MAX, 7);
        let chunk: Vec<DenseInstance> = (0..300).map(|_| generator.next_instance()).collect();

        let mut fcbf = SymmetricalUncertaintyFcbf::new();
        let selected = fcbf
            .select_attributes(generator.header(), &chunk)
            .unwrap();
        assert!(selected.contains(&1), "selected={selected:?}");
        assert!(!selected.contains(&4), "class index leaked: {selected:?}");
    }

    #[test]
    fn rejects_empty_chunk() {
        let h = numeric_header(2, 2);
        let mut fcbf = SymmetricalUncertaintyFcbf::new();
        assert_eq!(
            fcbf.select_attributes(&h, &[]).unwrap_err(),
            SelectionError::EmptyChunk
        );
    }

    #[test]
    fn rejects_numeric_class() {
        let attrs: Vec<AttributeRef> = vec![
            Arc::new(NumericAttribute::new("x".into())),
            Arc::new(NumericAttribute::new("y".into())),
        ];
        let h = Arc::new(InstanceHeader::new("reg".into(), attrs, 1));
        let chunk = vec![DenseInstance::new(Arc::clone(&h), vec![1.0, 2.0], 1.0)];

        let mut fcbf = SymmetricalUncertaintyFcbf::new();
        assert_eq!(
            fcbf.select_attributes(&h, &chunk).unwrap_err(),
            SelectionError::ClassNotNominal { index: 1 }
        );
    }

    #[test]
    fn rejects_chunk_without_labels() {
        let h = numeric_header(1, 2);
        let chunk = vec![DenseInstance::new(Arc::clone(&h), vec![1.0, f64::NAN], 1.0)];

        let mut fcbf = SymmetricalUncertaintyFcbf::new();
        assert_eq!(
            fcbf.select_attributes(&h, &chunk).unwrap_err(),
            SelectionError::NoLabelledInstances
        );
    }
}
