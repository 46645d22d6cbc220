use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("cannot select attributes from an empty chunk")]
    EmptyChunk,

    #[error("class index {index} out of range for {attributes} attributes")]
    ClassIndexOutOfRange { index: usize, attributes: usize },

    #[error("class attribute at index {index} is not nominal")]
    ClassNotNominal { index: usize },

    #[error("no instance in the chunk carries a class label")]
    NoLabelledInstances,

    #[error("selected attribute {index} out of range for {attributes} attributes")]
    IndexOutOfRange { index: usize, attributes: usize },

    #[error("attribute selection failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("instance has {found} attributes, projection was fitted on {expected}")]
    AttributeCountMismatch { expected: usize, found: usize },

    #[error("attribute {index} out of range for {attributes} attributes")]
    AttributeOutOfRange { index: usize, attributes: usize },
}
