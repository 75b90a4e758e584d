//! Wizard state machine — bounded step index, answers, submitting flag.
//!
//! `current_index` never leaves `[0, step_count - 1]`. Advancing past the
//! last step does not increment; it signals that the wizard is ready to
//! submit. All transitions are synchronous; the submit IO lives in the
//! coordinator one level up.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::WizardError;

use super::steps::{OTHER_LANGUAGE, StepKind, WizardStep};

/// Outcome of one `advance` attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepTransition {
    /// Current step failed validation; the index did not move.
    Held(String),
    /// Moved forward to this index.
    Moved(usize),
    /// Last step validated; the accumulated answers should be submitted.
    ReadyToSubmit,
}

/// Mutable wizard state, created when the onboarding view mounts and
/// discarded on navigation away.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardState {
    pub current_index: usize,
    /// answer_key → chosen or typed answer.
    pub answers: BTreeMap<String, String>,
    /// Free-text override shown when the Other sentinel is chosen.
    pub other_language: String,
    pub submitting: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer for a step.
    pub fn set_answer(&mut self, answer_key: impl Into<String>, value: impl Into<String>) {
        self.answers.insert(answer_key.into(), value.into());
    }

    pub fn answer(&self, answer_key: &str) -> Option<&str> {
        self.answers.get(answer_key).map(String::as_str)
    }

    /// Validate the step at `current_index` against its input kind.
    pub fn validate_current(&self, steps: &[WizardStep]) -> Result<(), WizardError> {
        let step = steps
            .get(self.current_index)
            .ok_or(WizardError::StepOutOfBounds {
                index: self.current_index,
                count: steps.len(),
            })?;
        let answer = self.answer(&step.answer_key).unwrap_or_default();
        match step.kind {
            StepKind::Choice => {
                if answer.is_empty() {
                    return Err(WizardError::Validation {
                        answer_key: step.answer_key.clone(),
                        message: "Please select an option".to_string(),
                    });
                }
                if !step.choices.iter().any(|c| c == answer) {
                    return Err(WizardError::Validation {
                        answer_key: step.answer_key.clone(),
                        message: format!("{answer:?} is not one of the offered choices"),
                    });
                }
            }
            // Free text is optional.
            StepKind::FreeText => {}
        }
        Ok(())
    }

    /// Validate the current step and move forward if it passes. From the
    /// last index a passing step yields `ReadyToSubmit` instead of moving.
    pub fn advance(&mut self, steps: &[WizardStep]) -> StepTransition {
        if let Err(e) = self.validate_current(steps) {
            return StepTransition::Held(e.to_string());
        }
        if self.current_index + 1 >= steps.len() {
            return StepTransition::ReadyToSubmit;
        }
        self.current_index += 1;
        StepTransition::Moved(self.current_index)
    }

    /// Step back one index; always succeeds, no validation, clamped at 0.
    pub fn retreat(&mut self) -> usize {
        self.current_index = self.current_index.saturating_sub(1);
        self.current_index
    }

    /// Build the submitted payload: one entry per step key, with the Other
    /// sentinel replaced by the free-text override.
    pub fn payload(&self, steps: &[WizardStep]) -> Value {
        let mut map = serde_json::Map::new();
        for step in steps {
            let mut answer = self.answer(&step.answer_key).unwrap_or_default().to_string();
            if answer == OTHER_LANGUAGE {
                answer = self.other_language.clone();
            }
            map.insert(step.answer_key.clone(), json!(answer));
        }
        Value::Object(map)
    }
}
