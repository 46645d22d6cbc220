use std::any::Any;
use std::sync::Arc;

pub type AttributeRef = Arc<dyn Attribute + Send + Sync>;

pub trait Attribute: Any + Send + Sync {
    fn name(&self) -> String;

    fn as_any(&self) -> &dyn Any;

    /// One-line human readable description, e.g. `outlook {sunny, rainy}`.
    fn describe(&self) -> String;

    /// Number of labels for nominal attributes, `None` for numeric ones.
    fn num_values(&self) -> Option<usize> {
        None
    }

    fn is_nominal(&self) -> bool {
        self.num_values().is_some()
    }
}
