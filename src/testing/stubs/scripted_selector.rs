use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::feature_selection::{AttributeSelector, SelectionError};
use std::sync::{Arc, Mutex};

/// Returns scripted results in order, repeating the last one once exhausted,
/// and records the size of every chunk it was handed.
pub struct ScriptedSelector {
    script: Vec<Result<Vec<usize>, SelectionError>>,
    next: usize,
    chunk_lengths: Arc<Mutex<Vec<usize>>>,
}

impl ScriptedSelector {
    pub fn new(script: Vec<Result<Vec<usize>, SelectionError>>) -> Self {
        Self {
            script,
            next: 0,
            chunk_lengths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn selecting(selections: Vec<Vec<usize>>) -> Self {
        Self::new(selections.into_iter().map(Ok).collect())
    }

    pub fn chunk_lengths(&self) -> Arc<Mutex<Vec<usize>>> {
        Arc::clone(&self.chunk_lengths)
    }
}

impl AttributeSelector for ScriptedSelector {
    fn select_attributes(
        &mut self,
        _header: &InstanceHeader,
        chunk: &[DenseInstance],
    ) -> Result<Vec<usize>, SelectionError> {
        if let Ok(mut lengths) = self.chunk_lengths.lock() {
            lengths.push(chunk.len());
        }
        let Some(last) = self.script.len().checked_sub(1) else {
            return Err(SelectionError::Failed("empty script".into()));
        };
        let step = self.next.min(last);
        self.next += 1;
        self.script[step].clone()
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
