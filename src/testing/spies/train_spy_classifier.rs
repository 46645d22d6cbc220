use crate::classifiers::Classifier;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

#[derive(Default)]
struct SpyState {
    trains: AtomicU64,
    resets: AtomicU64,
    last_trained: Mutex<Option<Vec<f64>>>,
    last_predicted: Mutex<Option<Vec<f64>>>,
    context_attributes: Mutex<Option<usize>>,
}

/// Shared view of everything the spies created from it observed.
#[derive(Clone)]
pub struct TrainSpyHandle(Arc<SpyState>);

impl TrainSpyHandle {
    /// A new spy reporting into the same state, for learner factories.
    pub fn spawn(&self) -> TrainSpyClassifier {
        TrainSpyClassifier {
            state: Arc::clone(&self.0),
            num_classes: 2,
        }
    }

    pub fn trains(&self) -> u64 {
        self.0.trains.load(Ordering::Relaxed)
    }

    pub fn resets(&self) -> u64 {
        self.0.resets.load(Ordering::Relaxed)
    }

    pub fn last_trained(&self) -> Option<Vec<f64>> {
        self.0.last_trained.lock().ok().and_then(|v| v.clone())
    }

    pub fn last_predicted(&self) -> Option<Vec<f64>> {
        self.0.last_predicted.lock().ok().and_then(|v| v.clone())
    }

    /// Attribute count of the last header passed to `set_model_context`.
    pub fn context_attributes(&self) -> Option<usize> {
        self.0.context_attributes.lock().ok().and_then(|v| *v)
    }
}

pub struct TrainSpyClassifier {
    state: Arc<SpyState>,
    num_classes: usize,
}

impl TrainSpyClassifier {
    pub fn new() -> (Self, TrainSpyHandle) {
        let handle = TrainSpyHandle(Arc::new(SpyState::default()));
        (handle.spawn(), handle)
    }
}

impl Classifier for TrainSpyClassifier {
    fn get_votes_for_instance(&self, inst: &dyn Instance) -> Vec<f64> {
        if let Ok(mut last) = self.state.last_predicted.lock() {
            *last = Some(inst.to_vec());
        }
        let y = inst.class_value().unwrap_or_default() as usize;
        let mut v = vec![0.0; self.num_classes.max(2)];
        if y < v.len() {
            v[y] = 1.0;
        }
        v
    }

    fn set_model_context(&mut self, h: Arc<InstanceHeader>) {
        self.num_classes = h.number_of_classes();
        if let Ok(mut attrs) = self.state.context_attributes.lock() {
            *attrs = Some(h.number_of_attributes());
        }
    }

    fn train_on_instance(&mut self, inst: &dyn Instance) {
        self.state.trains.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.state.last_trained.lock() {
            *last = Some(inst.to_vec());
        }
    }

    fn reset_learning(&mut self) {
        self.state.resets.fetch_add(1, Ordering::Relaxed);
    }
}
