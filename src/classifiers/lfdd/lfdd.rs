use crate::classifiers::classifier::Classifier;
use crate::classifiers::lfdd::{
    ChunkBuffer, FailurePolicy, LfddConfig, LfddError, SelectionEvent, SelectionOutcome,
};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::feature_selection::{
    AttributeProjection, AttributeSelector, SelectionError, SymmetricalUncertaintyFcbf,
};
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Builds a fresh, untrained base learner.
pub type LearnerFactory = Box<dyn Fn() -> Box<dyn Classifier> + Send>;

/// How a training example reached (or did not reach) the wrapped learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceRoute {
    /// No selection active yet; trained on the full instance.
    Unreduced,
    Projected,
    /// The instance did not fit the buffered schema or the projection, and
    /// the policy fell back to the full instance. It was not buffered.
    FullInstanceFallback,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainReport {
    /// Present when this example closed a chunk and triggered a selection run.
    pub selection: Option<SelectionOutcome>,
    pub route: InstanceRoute,
}

/// Landmark-based feature drift detector.
///
/// Examples are buffered into chunks of `chunk_size`. When a chunk is complete
/// the attribute selector runs over it; if the selected attributes differ from
/// the previous chunk's, the wrapped learner is reset and from then on trained
/// and queried on instances projected onto the new selection.
///
/// A buffer holding `chunk_size` examples is only closed by the next training
/// call, and that example is not buffered: it is the first one trained against
/// the new selection. Each selection cycle therefore spans `chunk_size + 1`
/// training calls.
///
/// Only the last `event_history` selection events are retained; the total
/// number of selection runs is counted separately.
pub struct LandmarkFeatureDriftDetector {
    config: LfddConfig,
    learner_factory: LearnerFactory,
    selector: Box<dyn AttributeSelector>,
    classifier: Box<dyn Classifier>,
    header: Option<Arc<InstanceHeader>>,
    buffer: Option<ChunkBuffer>,
    selected: Option<Vec<usize>>,
    projection: Option<AttributeProjection>,
    events: VecDeque<SelectionEvent>,
    selection_count: u64,
    instances_seen: u64,
    reset_count: u64,
}

impl LandmarkFeatureDriftDetector {
    pub fn new(config: LfddConfig) -> Result<Self, LfddError> {
        let learner = config.base_learner.clone();
        Self::with_components(
            config,
            Box::new(move || learner.build()),
            Box::new(SymmetricalUncertaintyFcbf::new()),
        )
    }

    pub fn with_components(
        config: LfddConfig,
        learner_factory: LearnerFactory,
        selector: Box<dyn AttributeSelector>,
    ) -> Result<Self, LfddError> {
        config.validate()?;
        let classifier = learner_factory();
        Ok(Self {
            config,
            learner_factory,
            selector,
            classifier,
            header: None,
            buffer: None,
            selected: None,
            projection: None,
            events: VecDeque::new(),
            selection_count: 0,
            instances_seen: 0,
            reset_count: 0,
        })
    }

    pub fn config(&self) -> &LfddConfig {
        &self.config
    }

    /// Back to the untrained state: fresh learner, no buffer, no selection.
    pub fn reset(&mut self) {
        self.classifier = (self.learner_factory)();
        if let Some(header) = &self.header {
            self.classifier.set_model_context(Arc::clone(header));
        }
        self.buffer = None;
        self.selected = None;
        self.projection = None;
        self.events.clear();
        self.selection_count = 0;
        self.instances_seen = 0;
        self.reset_count = 0;
        debug!("detector reset");
    }

    pub fn try_train(&mut self, instance: &dyn Instance) -> Result<TrainReport, LfddError> {
        self.instances_seen += 1;
        let input_header = self.input_header(instance);
        let expected = input_header.number_of_attributes();
        let found = instance.number_of_attributes();
        if found != expected {
            let route = self.degrade(LfddError::SchemaMismatch { expected, found })?;
            if route == InstanceRoute::FullInstanceFallback {
                self.classifier.train_on_instance(instance);
            }
            return Ok(TrainReport {
                selection: None,
                route,
            });
        }
        let copy = DenseInstance::from_instance(Arc::clone(&input_header), instance);

        let chunk_size = self.config.chunk_size;
        let buffer = self
            .buffer
            .get_or_insert_with(|| ChunkBuffer::new(input_header, chunk_size));

        let selection = if !buffer.is_full() {
            buffer.push(copy.clone());
            None
        } else {
            let chunk = buffer.take_chunk();
            debug!(
                chunk_len = chunk.len(),
                instances_seen = self.instances_seen,
                "chunk complete"
            );
            Some(self.complete_chunk(&chunk)?)
        };

        let route = self.train_wrapped(&copy)?;
        Ok(TrainReport { selection, route })
    }

    pub fn try_predict(&self, instance: &dyn Instance) -> Result<Vec<f64>, LfddError> {
        let Some(projection) = &self.projection else {
            return Ok(self.classifier.get_votes_for_instance(instance));
        };

        match projection.project(instance) {
            Ok(reduced) => Ok(self.classifier.get_votes_for_instance(&reduced)),
            Err(err) => match self.degrade(err.into())? {
                InstanceRoute::Skipped => Ok(Vec::new()),
                _ => Ok(self.classifier.get_votes_for_instance(instance)),
            },
        }
    }

    /// Runs the attribute selector over a complete chunk and returns the chosen
    /// input attribute indices, sorted and deduplicated, class excluded.
    pub fn perform_feature_selection(
        &mut self,
        chunk: &ChunkBuffer,
    ) -> Result<Vec<usize>, SelectionError> {
        let header = chunk.header();
        let mut selected = self.selector.select_attributes(header, chunk.instances())?;

        let attributes = header.number_of_attributes();
        if let Some(&index) = selected.iter().find(|&&i| i >= attributes) {
            return Err(SelectionError::IndexOutOfRange { index, attributes });
        }
        let class_index = header.class_index();
        selected.retain(|&i| i != class_index);
        selected.sort_unstable();
        selected.dedup();
        Ok(selected)
    }

    pub fn selected_attributes(&self) -> Option<&[usize]> {
        self.selected.as_deref()
    }

    pub fn projection(&self) -> Option<&AttributeProjection> {
        self.projection.as_ref()
    }

    /// The most recent selection events, oldest first.
    pub fn selection_events(&self) -> &VecDeque<SelectionEvent> {
        &self.events
    }

    pub fn selection_count(&self) -> u64 {
        self.selection_count
    }

    /// Learner resets caused by a change of the selected attributes.
    pub fn reset_count(&self) -> u64 {
        self.reset_count
    }

    pub fn buffered(&self) -> usize {
        self.buffer.as_ref().map_or(0, ChunkBuffer::len)
    }

    pub fn instances_seen(&self) -> u64 {
        self.instances_seen
    }

    pub fn selector_name(&self) -> &'static str {
        self.selector.name()
    }

    pub fn model_description(&self) -> String {
        let mut out = format!(
            "LFDD chunk_size={} learner={} selector={} failure_policy={:?}\n",
            self.config.chunk_size,
            self.config.base_learner.kind(),
            self.selector.name(),
            self.config.failure_policy,
        );
        out.push_str(&format!(
            "seen={} buffered={} selections={} resets={}\n",
            self.instances_seen,
            self.buffered(),
            self.selection_count,
            self.reset_count,
        ));
        match &self.projection {
            None => out.push_str("selected: none yet\n"),
            Some(projection) => {
                let names: Vec<String> = (0..projection.selected().len())
                    .filter_map(|i| projection.header().attribute_at_index(i))
                    .map(|a| a.describe())
                    .collect();
                out.push_str(&format!(
                    "selected: {:?} [{}]\n",
                    projection.selected(),
                    names.join(", ")
                ));
            }
        }
        out
    }

    fn input_header(&mut self, instance: &dyn Instance) -> Arc<InstanceHeader> {
        if let Some(buffer) = &self.buffer {
            return Arc::clone(buffer.header());
        }
        if let Some(header) = &self.header {
            return Arc::clone(header);
        }
        let header = Arc::new(instance.header().clone());
        self.classifier.set_model_context(Arc::clone(&header));
        self.header = Some(Arc::clone(&header));
        header
    }

    fn complete_chunk(&mut self, chunk: &ChunkBuffer) -> Result<SelectionOutcome, LfddError> {
        let result = self.perform_feature_selection(chunk).and_then(|selected| {
            if self.selected.as_deref() == Some(selected.as_slice()) {
                return Ok((selected, None));
            }
            let projection = AttributeProjection::new(chunk.header(), &selected)
                .map_err(|err| SelectionError::Failed(err.to_string()))?;
            Ok((selected, Some(projection)))
        });

        match result {
            Ok((selected, None)) => {
                debug!(?selected, "selected attributes unchanged");
                self.record_event(selected, SelectionOutcome::Unchanged, chunk.len());
                Ok(SelectionOutcome::Unchanged)
            }
            Ok((selected, Some(projection))) => {
                info!(
                    previous = ?self.selected,
                    ?selected,
                    "selected attributes changed; resetting base learner"
                );
                self.classifier.reset_learning();
                self.classifier
                    .set_model_context(Arc::clone(projection.header()));
                self.projection = Some(projection);
                self.reset_count += 1;
                self.selected = Some(selected.clone());
                self.record_event(selected, SelectionOutcome::Changed, chunk.len());
                Ok(SelectionOutcome::Changed)
            }
            Err(err) => {
                warn!(
                    error = %err,
                    selector = self.selector.name(),
                    "feature selection failed; keeping previous selection"
                );
                let kept = self.selected.clone().unwrap_or_default();
                self.record_event(kept, SelectionOutcome::Failed, chunk.len());
                if self.config.failure_policy == FailurePolicy::Fail {
                    return Err(err.into());
                }
                Ok(SelectionOutcome::Failed)
            }
        }
    }

    fn record_event(&mut self, selected: Vec<usize>, outcome: SelectionOutcome, chunk_len: usize) {
        self.selection_count += 1;
        let event = SelectionEvent {
            ordinal: self.selection_count,
            instances_seen: self.instances_seen,
            chunk_len,
            selected,
            outcome,
            timestamp: Utc::now(),
        };
        debug!(%event, "selection event");

        let capacity = self.config.event_history;
        if capacity == 0 {
            return;
        }
        while self.events.len() >= capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn train_wrapped(&mut self, copy: &DenseInstance) -> Result<InstanceRoute, LfddError> {
        let Some(projection) = &self.projection else {
            self.classifier.train_on_instance(copy);
            return Ok(InstanceRoute::Unreduced);
        };

        match projection.project(copy) {
            Ok(reduced) => {
                self.classifier.train_on_instance(&reduced);
                Ok(InstanceRoute::Projected)
            }
            Err(err) => {
                let route = self.degrade(err.into())?;
                if route == InstanceRoute::FullInstanceFallback {
                    self.classifier.train_on_instance(copy);
                }
                Ok(route)
            }
        }
    }

    /// Applies the failure policy to an instance that cannot be handled as is.
    fn degrade(&self, err: LfddError) -> Result<InstanceRoute, LfddError> {
        match self.config.failure_policy {
            FailurePolicy::UseFullInstance => {
                warn!(error = %err, "using the unreduced instance");
                Ok(InstanceRoute::FullInstanceFallback)
            }
            FailurePolicy::SkipInstance => {
                warn!(error = %err, "skipping instance");
                Ok(InstanceRoute::Skipped)
            }
            FailurePolicy::Fail => Err(err),
        }
    }
}

impl Classifier for LandmarkFeatureDriftDetector {
    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Vec<f64> {
        self.try_predict(instance).unwrap_or_else(|err| {
            error!(error = %err, "prediction failed");
            Vec::new()
        })
    }

    fn set_model_context(&mut self, header: Arc<InstanceHeader>) {
        if self.projection.is_none() {
            self.classifier.set_model_context(Arc::clone(&header));
        }
        self.header = Some(header);
    }

    fn train_on_instance(&mut self, instance: &dyn Instance) {
        if let Err(err) = self.try_train(instance) {
            error!(error = %err, "training step failed");
        }
    }

    fn reset_learning(&mut self) {
        self.reset();
    }

    fn is_randomizable(&self) -> bool {
        true
    }
}
