use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The sorted selection differs from the previous one; the learner was reset.
    Changed,
    Unchanged,
    /// Selection did not complete; the previous selection stays active.
    Failed,
}

impl SelectionOutcome {
    pub fn learner_reset(self) -> bool {
        matches!(self, SelectionOutcome::Changed)
    }
}

/// One landmark: a feature-selection run at a chunk boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    pub ordinal: u64,
    pub instances_seen: u64,
    pub chunk_len: usize,
    pub selected: Vec<usize>,
    pub outcome: SelectionOutcome,
    pub timestamp: DateTime<Utc>,
}

impl Display for SelectionEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "#{} seen={} chunk={} selected={:?} outcome={:?} at={}",
            self.ordinal,
            self.instances_seen,
            self.chunk_len,
            self.selected,
            self.outcome,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}
