mod chunk_buffer;
mod config;
mod error;
mod lfdd;
mod selection_event;

pub use chunk_buffer::ChunkBuffer;
pub use config::{DEFAULT_CHUNK_SIZE, DEFAULT_EVENT_HISTORY, FailurePolicy, LfddConfig};
pub use error::LfddError;
pub use lfdd::{InstanceRoute, LandmarkFeatureDriftDetector, LearnerFactory, TrainReport};
pub use selection_event::{SelectionEvent, SelectionOutcome};
