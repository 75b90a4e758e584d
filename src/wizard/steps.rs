//! Step definitions for the onboarding questionnaire.

use serde::{Deserialize, Serialize};

/// Sentinel choice that reveals a free-text override for the answer.
pub const OTHER_LANGUAGE: &str = "Other (please specify)";

/// Input kind for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Pick exactly one of the listed choices.
    Choice,
    /// Free text, optional.
    FreeText,
}

/// One declaratively described wizard step. Immutable once the wizard is
/// built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardStep {
    pub prompt: String,
    /// Ordered choices; empty for free-text steps.
    pub choices: Vec<String>,
    pub kind: StepKind,
    /// Key under which the answer lands in the submitted payload.
    pub answer_key: String,
}

impl WizardStep {
    pub fn choice(
        prompt: impl Into<String>,
        answer_key: impl Into<String>,
        choices: &[&str],
    ) -> Self {
        Self {
            prompt: prompt.into(),
            choices: choices.iter().map(|c| (*c).to_string()).collect(),
            kind: StepKind::Choice,
            answer_key: answer_key.into(),
        }
    }

    pub fn free_text(prompt: impl Into<String>, answer_key: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            choices: Vec::new(),
            kind: StepKind::FreeText,
            answer_key: answer_key.into(),
        }
    }
}

/// The canonical 9-step language-learning questionnaire.
///
/// Answer keys are the exact wire keys the onboarding endpoint expects
/// (including the misspelled `challengingAspec`, which the backend matches
/// verbatim).
pub fn language_steps() -> Vec<WizardStep> {
    vec![
        WizardStep::choice(
            "What's your native language?",
            "nativeLanguage",
            &[
                "Hindi",
                "Spanish",
                "Mandarin",
                "Arabic",
                "English",
                OTHER_LANGUAGE,
            ],
        ),
        WizardStep::choice(
            "What's your language learning goal?",
            "goal",
            &[
                "Fluency",
                "Basic Conversation",
                "Professional Use",
                "Academic Research",
            ],
        ),
        WizardStep::choice(
            "What's your current language level?",
            "languageLevel",
            &["Beginner", "Intermediate", "Advanced", "Fluent"],
        ),
        WizardStep::choice(
            "What is your main purpose for learning?",
            "purpose",
            &["Travel", "Work", "Education", "Personal Interest"],
        ),
        WizardStep::choice(
            "How much time can you dedicate each week?",
            "timeToBeDedicated",
            &["<1 hour", "1-3 hours", "3-5 hours", "5+ hours"],
        ),
        WizardStep::choice(
            "What's your preferred learning pace?",
            "learningPace",
            &["Slow", "Moderate", "Fast", "Intensive"],
        ),
        WizardStep::choice(
            "What do you find most challenging?",
            "challengingAspec",
            &["Speaking", "Listening", "Reading", "Writing"],
        ),
        WizardStep::choice(
            "How do you prefer to practice?",
            "preferredPracticingWay",
            &["Solo", "With a Tutor", "In a Group", "Online Courses"],
        ),
        WizardStep::free_text(
            "Any additional information you'd like to share?",
            "additionalText",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_steps_ending_in_free_text() {
        let steps = language_steps();
        assert_eq!(steps.len(), 9);
        assert_eq!(steps.last().unwrap().kind, StepKind::FreeText);
        assert!(steps.last().unwrap().choices.is_empty());
    }

    #[test]
    fn choice_steps_have_choices() {
        for step in language_steps() {
            match step.kind {
                StepKind::Choice => assert!(!step.choices.is_empty(), "{}", step.answer_key),
                StepKind::FreeText => assert!(step.choices.is_empty()),
            }
        }
    }

    #[test]
    fn first_step_offers_the_other_sentinel() {
        let steps = language_steps();
        assert_eq!(steps[0].answer_key, "nativeLanguage");
        assert!(steps[0].choices.iter().any(|c| c == OTHER_LANGUAGE));
    }

    #[test]
    fn answer_keys_are_unique() {
        let steps = language_steps();
        let mut keys: Vec<_> = steps.iter().map(|s| s.answer_key.clone()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), steps.len());
    }
}
