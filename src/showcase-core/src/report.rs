//! The display surface a loader reports its non-fatal conditions to.

use crate::error::workflow::{LoadConditionKind, Severity, WorkflowLoadError};
use std::cell::RefCell;

/// Receives conditions the workflow loader resolved on its own.
///
/// Implemented for any `Fn(&WorkflowLoadError)`, so a closure can be passed
/// wherever a reporter is expected.
pub trait Reporter {
    fn report(&self, condition: &WorkflowLoadError);
}

impl<F> Reporter for F
where
    F: Fn(&WorkflowLoadError),
{
    fn report(&self, condition: &WorkflowLoadError) {
        self(condition)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCondition {
    pub kind: LoadConditionKind,
    pub severity: Severity,
    pub message: String,
}

/// Keeps every reported condition in memory, in the order received.
#[derive(Default)]
pub struct RecordingReporter {
    conditions: RefCell<Vec<RecordedCondition>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conditions(&self) -> Vec<RecordedCondition> {
        self.conditions.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<LoadConditionKind> {
        self.conditions.borrow().iter().map(|c| c.kind).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, condition: &WorkflowLoadError) {
        self.conditions.borrow_mut().push(RecordedCondition {
            kind: condition.kind(),
            severity: condition.severity(),
            message: condition.to_string(),
        });
    }
}
