//! Onboarding wizard model
//!
//! Three fixed steps collected after sign-up. Finishing the last step is
//! the signal the screen turns into the controller's
//! `complete_onboarding` transition.

use derive_more::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    #[display("Your role")]
    Role,
    #[display("Your goals")]
    Goals,
    #[display("Your workspace")]
    Workspace,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 3] = [
        OnboardingStep::Role,
        OnboardingStep::Goals,
        OnboardingStep::Workspace,
    ];

    pub fn index(&self) -> usize {
        match self {
            OnboardingStep::Role => 0,
            OnboardingStep::Goals => 1,
            OnboardingStep::Workspace => 2,
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

/// Choices offered on the role step
pub const ROLES: [&str; 4] = ["Founder", "Marketer", "Designer", "Developer"];

/// Choices offered on the goals step
pub const GOALS: [&str; 4] = [
    "Grow my audience",
    "Launch a product",
    "Automate campaigns",
    "Understand analytics",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnboardingAnswers {
    pub role: Option<String>,
    pub goals: Vec<String>,
    pub workspace: String,
}

/// Result of pressing "Next"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardProgress {
    Moved(OnboardingStep),
    /// Current step is missing an answer
    Blocked,
    Completed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    answers: OnboardingAnswers,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn answers(&self) -> &OnboardingAnswers {
        &self.answers
    }

    pub fn select_role(&mut self, role: impl Into<String>) {
        self.answers.role = Some(role.into());
    }

    /// Add the goal if absent, remove it if present
    pub fn toggle_goal(&mut self, goal: &str) {
        if let Some(pos) = self.answers.goals.iter().position(|g| g == goal) {
            self.answers.goals.remove(pos);
        } else {
            self.answers.goals.push(goal.to_string());
        }
    }

    pub fn set_workspace(&mut self, name: impl Into<String>) {
        self.answers.workspace = name.into();
    }

    /// Whether the current step has enough input to continue
    pub fn can_advance(&self) -> bool {
        match self.step {
            OnboardingStep::Role => self.answers.role.is_some(),
            OnboardingStep::Goals => !self.answers.goals.is_empty(),
            OnboardingStep::Workspace => !self.answers.workspace.trim().is_empty(),
        }
    }

    pub fn advance(&mut self) -> WizardProgress {
        if !self.can_advance() {
            return WizardProgress::Blocked;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                WizardProgress::Moved(next)
            }
            None => {
                tracing::debug!(answers = ?self.answers, "onboarding completed");
                WizardProgress::Completed
            }
        }
    }

    /// Step back; stays on the first step
    pub fn back(&mut self) -> OnboardingStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Completion percentage shown in the progress bar
    pub fn progress_percent(&self) -> u8 {
        let total = OnboardingStep::ALL.len();
        ((self.step.index() + 1) * 100 / total) as u8
    }
}
