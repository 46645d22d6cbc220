pub mod dummies;
pub mod generators;
pub mod spies;
pub mod stubs;

pub use dummies::FailingSelector;
pub use generators::FeatureDriftGenerator;
pub use spies::{TrainSpyClassifier, TrainSpyHandle};
pub use stubs::{OracleClassifier, ScriptedSelector};

use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use std::sync::Arc;

/// `x0..x{n-1}` numeric, then a nominal `class` with labels `c0..c{k-1}`.
pub fn numeric_header(num_features: usize, num_classes: usize) -> Arc<InstanceHeader> {
    let mut attrs: Vec<AttributeRef> = (0..num_features)
        .map(|i| Arc::new(NumericAttribute::new(format!("x{i}"))) as AttributeRef)
        .collect();
    attrs.push(Arc::new(NominalAttribute::with_values(
        "class".into(),
        (0..num_classes).map(|c| format!("c{c}")).collect(),
    )));
    Arc::new(InstanceHeader::new("synthetic".into(), attrs, num_features))
}

/// colour {red, blue}, size numeric, class {no, yes}.
pub fn mixed_header() -> Arc<InstanceHeader> {
    let attrs: Vec<AttributeRef> = vec![
        Arc::new(NominalAttribute::with_values(
            "colour".into(),
            vec!["red".into(), "blue".into()],
        )),
        Arc::new(NumericAttribute::new("size".into())),
        Arc::new(NominalAttribute::with_values(
            "class".into(),
            vec!["no".into(), "yes".into()],
        )),
    ];
    Arc::new(InstanceHeader::new("mixed".into(), attrs, 2))
}

/// Unit-weight instance with the class value appended after `features`.
pub fn labelled(header: &Arc<InstanceHeader>, features: &[f64], class: usize) -> DenseInstance {
    let mut values = features.to_vec();
    values.push(class as f64);
    DenseInstance::new(Arc::clone(header), values, 1.0)
}
