#[cfg(test)]
mod tests {
    use crate::core::observer::testing::FakeVisibility;
    use crate::core::{Intent, ThemeObserver, Transition, View, ViewState};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Wires a `ViewState` to a `ThemeObserver` the same way the reactive
    /// controller does: release on every transition, arm after landing renders.
    struct Session {
        state: Rc<RefCell<ViewState>>,
        observer: ThemeObserver<FakeVisibility>,
        fake: FakeVisibility,
    }

    impl Session {
        fn new() -> Self {
            let fake = FakeVisibility::with_region();
            let mut session = Self {
                state: Rc::new(RefCell::new(ViewState::new())),
                observer: ThemeObserver::new(fake.clone()),
                fake,
            };
            session.arm();
            session
        }

        fn arm(&mut self) {
            if self.state.borrow().view().is_landing() {
                let state = Rc::clone(&self.state);
                self.observer.activate(move |dark| {
                    state.borrow_mut().set_theme(dark);
                });
            }
        }

        fn send(&mut self, intent: Intent) -> Transition {
            self.observer.release();
            let transition = self.state.borrow_mut().dispatch(intent);
            self.arm();
            transition
        }

        fn view(&self) -> View {
            self.state.borrow().view()
        }

        fn dark(&self) -> bool {
            self.state.borrow().is_dark_mode()
        }

        fn reach(view: View) -> Self {
            let mut session = Self::new();
            match view {
                View::Landing => {}
                View::Signup => {
                    session.send(Intent::StartSignup("p@q.com".into()));
                }
                View::Onboarding => {
                    session.send(Intent::StartSignup("p@q.com".into()));
                    session.send(Intent::SignupNext);
                }
                View::Dashboard => {
                    session.send(Intent::StartSignup("p@q.com".into()));
                    session.send(Intent::SignupNext);
                    session.send(Intent::OnboardingComplete);
                }
            }
            session
        }
    }

    fn expected_next(intent: &Intent) -> View {
        match intent {
            Intent::StartSignup(_) | Intent::Login | Intent::SignupRequestedFromNav => View::Signup,
            Intent::SignupNext => View::Onboarding,
            Intent::OnboardingComplete => View::Dashboard,
            Intent::LogoClick => View::Landing,
        }
    }

    #[test]
    fn test_every_operation_defined_in_every_state() {
        let intents = [
            Intent::StartSignup("t@t.io".into()),
            Intent::Login,
            Intent::SignupNext,
            Intent::OnboardingComplete,
            Intent::LogoClick,
            Intent::SignupRequestedFromNav,
        ];
        for view in View::ALL {
            for intent in &intents {
                let mut session = Session::reach(view);
                let t = session.send(intent.clone());
                assert_eq!(t.from, view);
                assert_eq!(t.to, expected_next(intent), "{view} + {intent:?}");
                assert_eq!(session.view(), t.to);
            }
        }
    }

    #[test]
    fn test_leaving_landing_resets_theme() {
        let mut session = Session::new();
        assert!(session.fake.fire(true));
        assert!(session.dark());

        session.send(Intent::StartSignup("a@b.com".into()));
        assert_eq!(session.view(), View::Signup);
        assert!(!session.dark());
    }

    #[test]
    fn test_theme_false_off_landing_in_all_reachable_states() {
        let mut session = Session::new();
        let walk = [
            Intent::StartSignup("w@w.io".into()),
            Intent::SignupNext,
            Intent::OnboardingComplete,
            Intent::LogoClick,
            Intent::Login,
            Intent::LogoClick,
            Intent::SignupRequestedFromNav,
        ];
        for intent in walk {
            if session.view().is_landing() {
                session.fake.fire(true);
            }
            session.send(intent);
            if !session.view().is_landing() {
                assert!(!session.dark());
                // No stale callback can reach the state
                assert!(!session.fake.fire(true));
                assert!(!session.dark());
            }
        }
    }

    #[test]
    fn test_signup_props_carry_email() {
        let mut session = Session::new();
        session.send(Intent::StartSignup("user@example.com".into()));
        let props = session.state.borrow().props();
        assert_eq!(props.user_email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_observer_lifecycle_follows_landing() {
        let mut session = Session::new();
        assert_eq!(session.fake.live_watches(), 1);
        assert_eq!(session.observer.acquisitions(), 1);

        session.send(Intent::Login);
        assert_eq!(session.fake.live_watches(), 0);
        assert!(!session.observer.is_active());

        session.send(Intent::LogoClick);
        assert_eq!(session.fake.live_watches(), 1);
        assert_eq!(session.observer.acquisitions(), 2);

        // Logo click while already on landing re-arms without leaking
        session.send(Intent::LogoClick);
        assert_eq!(session.fake.live_watches(), 1);
        assert_eq!(session.observer.acquisitions(), 3);
    }

    #[test]
    fn test_missing_region_leaves_theme_untouched() {
        let mut session = Session::new();
        session.send(Intent::Login);
        session.fake.set_region_present(false);

        session.send(Intent::LogoClick);
        assert!(!session.observer.is_active());
        assert!(!session.dark());

        session.fake.set_region_present(true);
        session.send(Intent::LogoClick);
        assert!(session.observer.is_active());
    }

    #[test]
    fn test_navigation_cycles_indefinitely() {
        let mut session = Session::reach(View::Dashboard);
        for _ in 0..3 {
            session.send(Intent::LogoClick);
            session.send(Intent::StartSignup("x@y.com".into()));
            session.send(Intent::SignupNext);
            session.send(Intent::OnboardingComplete);
            assert_eq!(session.view(), View::Dashboard);
            assert!(session.state.borrow().props().is_logged_in);
        }
    }

    #[test]
    fn test_visibility_events_pass_through_immediately() {
        let session = Session::new();
        session.fake.fire(true);
        assert!(session.dark());
        assert!(session.state.borrow().props().is_dark_mode);

        session.fake.fire(false);
        assert!(!session.dark());
    }
}
