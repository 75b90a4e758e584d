//! Multi-step onboarding wizard.
//!
//! A linear sequence of declaratively described steps driven by an index,
//! a validation gate on every forward transition, and a terminal submit
//! that posts the accumulated answers to the onboarding endpoint.

pub mod state;
pub mod steps;

use crate::api::onboarding;
use crate::gateway::Gateway;
use crate::nav::Navigation;

pub use state::{StepTransition, WizardState};
pub use steps::{OTHER_LANGUAGE, StepKind, WizardStep, language_steps};

/// Result of a submit: where to navigate, and a user-visible notice when the
/// post failed. Failed submits are not retried automatically — the user must
/// re-trigger submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub navigation: Navigation,
    pub error: Option<String>,
}

/// Outcome of one `advance` call on the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Validation failed; surfaced inline, index unchanged.
    Held(String),
    /// Moved to this step index.
    Moved(usize),
    /// The wizard submitted.
    Submitted(SubmitOutcome),
}

/// Coordinates the step sequence, the mutable state, and submission.
pub struct OnboardingWizard {
    steps: Vec<WizardStep>,
    state: WizardState,
    gateway: Gateway,
}

impl OnboardingWizard {
    /// Wizard over the canonical language questionnaire.
    pub fn new(gateway: Gateway) -> Self {
        Self::with_steps(gateway, language_steps())
    }

    pub fn with_steps(gateway: Gateway, steps: Vec<WizardStep>) -> Self {
        Self {
            steps,
            state: WizardState::new(),
            gateway,
        }
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn current_step(&self) -> &WizardStep {
        &self.steps[self.state.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    /// Completion percentage for the progress bar.
    pub fn progress(&self) -> f32 {
        ((self.state.current_index + 1) as f32 / self.steps.len() as f32) * 100.0
    }

    pub fn set_answer(&mut self, answer_key: impl Into<String>, value: impl Into<String>) {
        self.state.set_answer(answer_key, value);
    }

    pub fn set_other_language(&mut self, value: impl Into<String>) {
        self.state.other_language = value.into();
    }

    /// Validate the current step and move forward; from the last step this
    /// submits instead.
    pub async fn advance(&mut self) -> Advance {
        match self.state.advance(&self.steps) {
            StepTransition::Held(message) => Advance::Held(message),
            StepTransition::Moved(index) => Advance::Moved(index),
            StepTransition::ReadyToSubmit => Advance::Submitted(self.submit().await),
        }
    }

    /// Step back one index; no validation.
    pub fn retreat(&mut self) -> usize {
        self.state.retreat()
    }

    /// Post the accumulated answers. The submitting flag is cleared on every
    /// exit path, success or failure.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.state.submitting = true;
        let payload = self.state.payload(&self.steps);

        let outcome = match onboarding::post_onboarding(&self.gateway, &payload).await {
            Ok(_) => {
                tracing::info!("Onboarding answers submitted");
                SubmitOutcome {
                    navigation: Navigation::Learn,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(%e, "Onboarding submit failed");
                SubmitOutcome {
                    navigation: Navigation::Home,
                    error: Some(e.user_message()),
                }
            }
        };

        self.state.submitting = false;
        outcome
    }
}
