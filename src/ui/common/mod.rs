//! Common reusable UI components shared by the screens

pub mod button;
pub mod form;

pub use button::{Button, ButtonSize, ButtonVariant, StepButtons};
pub use form::{ChoiceCard, FormField};
