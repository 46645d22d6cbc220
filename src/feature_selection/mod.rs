//! Batch attribute selection over a buffered chunk and projection of single
//! instances onto the selected attribute subset.

mod attribute_selector;
mod discretization;
mod error;
mod fcbf;
mod projection;
mod symmetrical_uncertainty;

pub use attribute_selector::AttributeSelector;
pub use discretization::{DiscreteColumn, discretize_attribute, mdl_cut_points};
pub use error::{ProjectionError, SelectionError};
pub use fcbf::SymmetricalUncertaintyFcbf;
pub use projection::AttributeProjection;
pub use symmetrical_uncertainty::{entropy, symmetrical_uncertainty};
