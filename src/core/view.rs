//! View navigation state machine
//!
//! `ViewState` is the single owned source of truth for which screen is shown,
//! the email captured on the landing page, and the landing theme flag.
//! Every transition is total: it maps any current view to exactly one next
//! view and never fails.

use derive_more::Display;

/// The screen currently rendered to the user
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    #[display("landing")]
    Landing,
    #[display("signup")]
    Signup,
    #[display("onboarding")]
    Onboarding,
    #[display("dashboard")]
    Dashboard,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Landing,
        View::Signup,
        View::Onboarding,
        View::Dashboard,
    ];

    pub fn is_landing(&self) -> bool {
        matches!(self, View::Landing)
    }
}

/// User intents emitted by the screens, one per controller operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Email submitted from the landing hero
    StartSignup(String),
    /// "Log in" pressed in the navbar
    Login,
    /// Sign-up form completed
    SignupNext,
    /// Last onboarding step completed
    OnboardingComplete,
    /// Logo clicked from any screen
    LogoClick,
    /// "Sign up" pressed in the navbar
    SignupRequestedFromNav,
}

/// Record of a single transition, consumed by the reactive layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: View,
    pub to: View,
    /// Whether the viewport should jump back to the origin
    pub scroll_to_top: bool,
}

/// Key that changes every time the landing view is (re-)entered.
///
/// The theme observer is armed whenever this key changes while on landing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmKey {
    pub view: View,
    pub landing_epoch: u64,
}

/// Props derived from the state for one render pass
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenProps {
    pub view: View,
    pub is_dark_mode: bool,
    /// Only present for the sign-up screen
    pub user_email: Option<String>,
    pub is_logged_in: bool,
    pub hide_auth_buttons: bool,
}

/// Navigation state: current view, captured email and theme flag
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    view: View,
    user_email: String,
    dark_mode: bool,
    landing_epoch: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn landing_epoch(&self) -> u64 {
        self.landing_epoch
    }

    pub fn arm_key(&self) -> ArmKey {
        ArmKey {
            view: self.view,
            landing_epoch: self.landing_epoch,
        }
    }

    /// Record the email and move to the sign-up screen
    pub fn start_signup(&mut self, email: impl Into<String>) -> Transition {
        self.user_email = email.into();
        self.move_to(View::Signup, true)
    }

    /// Login has no screen of its own yet and reuses sign-up
    pub fn login(&mut self) -> Transition {
        self.move_to(View::Signup, true)
    }

    /// Navbar sign-up: switches view only, keeps the scroll position
    pub fn request_signup(&mut self) -> Transition {
        self.move_to(View::Signup, false)
    }

    pub fn complete_signup(&mut self) -> Transition {
        self.move_to(View::Onboarding, true)
    }

    pub fn complete_onboarding(&mut self) -> Transition {
        self.move_to(View::Dashboard, true)
    }

    /// Return to landing from any view. The theme flag starts from `false`
    /// and the observer is re-armed instead of restoring a previous value.
    pub fn go_to_landing(&mut self) -> Transition {
        self.move_to(View::Landing, true)
    }

    /// Apply a visibility signal. Ignored outside the landing view.
    ///
    /// Returns whether the flag was applied.
    pub fn set_theme(&mut self, dark: bool) -> bool {
        if !self.view.is_landing() {
            tracing::debug!(view = %self.view, dark, "ignoring theme signal outside landing");
            return false;
        }
        self.dark_mode = dark;
        true
    }

    /// Route a screen intent to its operation
    pub fn dispatch(&mut self, intent: Intent) -> Transition {
        match intent {
            Intent::StartSignup(email) => self.start_signup(email),
            Intent::Login => self.login(),
            Intent::SignupNext => self.complete_signup(),
            Intent::OnboardingComplete => self.complete_onboarding(),
            Intent::LogoClick => self.go_to_landing(),
            Intent::SignupRequestedFromNav => self.request_signup(),
        }
    }

    /// Props handed to the active screen set
    pub fn props(&self) -> ScreenProps {
        ScreenProps {
            view: self.view,
            is_dark_mode: self.view.is_landing() && self.dark_mode,
            user_email: (self.view == View::Signup).then(|| self.user_email.clone()),
            is_logged_in: self.view == View::Dashboard,
            hide_auth_buttons: matches!(self.view, View::Signup | View::Onboarding),
        }
    }

    fn move_to(&mut self, to: View, scroll_to_top: bool) -> Transition {
        let from = self.view;
        self.view = to;
        // Leaving landing, or re-entering it, always starts from the light theme
        self.dark_mode = false;
        if to.is_landing() {
            self.landing_epoch += 1;
        }
        tracing::debug!(%from, %to, scroll_to_top, "view transition");
        Transition {
            from,
            to,
            scroll_to_top,
        }
    }
}
