use crate::feature_selection::{ProjectionError, SelectionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LfddError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("instance has {found} attributes, the buffered chunk expects {expected}")]
    SchemaMismatch { expected: usize, found: usize },

    #[error("feature selection failed: {0}")]
    Selection(#[from] SelectionError),

    #[error("projection onto selected attributes failed: {0}")]
    Projection(#[from] ProjectionError),
}
