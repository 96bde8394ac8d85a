//! Framework-free navigation, theme and form logic

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
pub mod observer;
pub mod onboarding;
pub mod signup;
#[cfg(test)]
mod tests;
mod view;

pub use observer::{ObserverOptions, Subscription, THEME_REGION_ID, ThemeObserver, VisibilitySource};
pub use onboarding::{OnboardingAnswers, OnboardingStep, OnboardingWizard, WizardProgress};
pub use signup::{SignupError, SignupField, SignupForm};
pub use view::*;
