//! Screen renderers
//!
//! One page per view plus the 404 page:
//! - Landing page (marketing sections + theme region)
//! - Sign-up page
//! - Onboarding wizard
//! - Dashboard

mod dashboard;
mod landing;
mod not_found;
mod onboarding;
mod signup;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use onboarding::OnboardingPage;
pub use signup::SignupPage;
